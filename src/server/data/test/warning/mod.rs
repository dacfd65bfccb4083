use crate::server::{
    data::warning::WarningRepository,
    error::{moderation::ModerationError, AppError},
    model::warning::CreateWarningParam,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod clear;
mod list;

fn param(guild_id: u64, user_id: u64, reason: &str) -> CreateWarningParam {
    CreateWarningParam {
        guild_id,
        user_id,
        moderator_id: 500,
        reason: reason.to_string(),
    }
}
