//! Warning ledger domain models.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// A recorded warning against a guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// Ledger-assigned identifier, unique and increasing across all guilds.
    pub warn_id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub moderator_id: u64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Warning {
    /// Converts an entity model to a warning domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Warning)` - The converted warning
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::warning::Model) -> Result<Self, AppError> {
        Ok(Self {
            warn_id: entity.warn_id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            moderator_id: parse_u64_from_string(entity.moderator_id)?,
            reason: entity.reason,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending a warning to the ledger.
#[derive(Debug, Clone)]
pub struct CreateWarningParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub moderator_id: u64,
    pub reason: String,
}

/// Result of appending a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningReceipt {
    pub warning: Warning,
    /// Number of warnings the user holds in the guild, including this one.
    pub count: u64,
}
