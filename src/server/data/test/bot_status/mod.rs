use crate::server::data::bot_status::BotStatusRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure_exists;
mod set_maintenance;
mod toggle;
