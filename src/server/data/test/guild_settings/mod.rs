use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    error::{settings::SettingsError, AppError},
    model::settings::{GuildSettings, SettingChange},
};
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod get;
mod upsert_field;
