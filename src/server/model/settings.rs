//! Guild settings domain models and change sets.
//!
//! A guild without a stored row behaves as if it had the default settings. Changes are
//! expressed as a list of `SettingChange` values; parsing a raw field/value pair into a
//! `SettingChange` is the only way to build one, so the allow-list of writable fields is
//! enforced by construction rather than by checking column names at write time.

use std::str::FromStr;

use serde_json::Value;

use crate::{
    model::settings::GuildSettingsDto,
    server::{
        error::{settings::SettingsError, AppError},
        util::parse::{parse_optional_u64, parse_u64_from_string},
    },
};

/// Language used by guilds that never picked one.
pub const DEFAULT_LANGUAGE: &str = "it";

/// Timezone used by guilds that never picked one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Timezones a guild may select.
pub const ALLOWED_TIMEZONES: [&str; 5] = [
    "UTC",
    "Europe/London",
    "Europe/Rome",
    "Europe/Paris",
    "America/New_York",
];

/// Effective settings of a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSettings {
    pub guild_id: u64,
    /// Language code used for every message the bot sends in the guild.
    pub language: String,
    /// Channel receiving moderation audit entries, if any.
    pub log_channel_id: Option<u64>,
    /// Role granting moderation and configuration rights, if any.
    pub staff_role_id: Option<u64>,
    pub timezone: String,
}

impl GuildSettings {
    /// Settings reported for a guild with no stored row.
    pub fn defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            language: DEFAULT_LANGUAGE.to_string(),
            log_channel_id: None,
            staff_role_id: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Converts an entity model to a settings domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The converted settings
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            language: entity.language,
            log_channel_id: parse_optional_u64(entity.log_channel_id)?,
            staff_role_id: parse_optional_u64(entity.staff_role_id)?,
            timezone: entity.timezone,
        })
    }

    pub fn into_dto(self) -> GuildSettingsDto {
        GuildSettingsDto {
            guild_id: self.guild_id,
            language: self.language,
            log_channel_id: self.log_channel_id,
            staff_role_id: self.staff_role_id,
            timezone: self.timezone,
        }
    }
}

/// Writable settings fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Language,
    LogChannelId,
    StaffRoleId,
    Timezone,
}

impl SettingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::LogChannelId => "log_channel_id",
            Self::StaffRoleId => "staff_role_id",
            Self::Timezone => "timezone",
        }
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(Self::Language),
            "log_channel_id" => Ok(Self::LogChannelId),
            "staff_role_id" => Ok(Self::StaffRoleId),
            "timezone" => Ok(Self::Timezone),
            other => Err(SettingsError::InvalidField(other.to_string())),
        }
    }
}

/// A single validated-for-shape settings write.
///
/// Domain checks that depend on runtime data (the set of loaded languages) happen in
/// `ConfigurationService`; everything else is checked while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    Language(String),
    /// `None` unsets the log channel.
    LogChannelId(Option<u64>),
    /// `None` unsets the staff role.
    StaffRoleId(Option<u64>),
    Timezone(String),
}

impl SettingChange {
    pub fn field(&self) -> SettingField {
        match self {
            Self::Language(_) => SettingField::Language,
            Self::LogChannelId(_) => SettingField::LogChannelId,
            Self::StaffRoleId(_) => SettingField::StaffRoleId,
            Self::Timezone(_) => SettingField::Timezone,
        }
    }

    /// Parses a raw field name and JSON value into a change.
    ///
    /// Snowflake fields accept a decimal string, a non-negative integer, `null` or the
    /// empty string; the last two unset the field. Text fields accept non-empty strings,
    /// and timezones must be one of `ALLOWED_TIMEZONES`.
    ///
    /// # Returns
    /// - `Ok(SettingChange)` - Parsed change
    /// - `Err(SettingsError::InvalidField)` - Field is outside the allow-list
    /// - `Err(SettingsError::InvalidValue)` - Value has the wrong shape or domain
    pub fn parse(field: &str, value: &Value) -> Result<Self, SettingsError> {
        let field = field.parse::<SettingField>()?;
        let invalid = || SettingsError::InvalidValue {
            field: field.as_str().to_string(),
            value: value.to_string(),
        };

        match field {
            SettingField::Language => match value.as_str().map(str::trim) {
                Some(code) if !code.is_empty() => Ok(Self::Language(code.to_string())),
                _ => Err(invalid()),
            },
            SettingField::Timezone => match value.as_str() {
                Some(tz) if ALLOWED_TIMEZONES.contains(&tz) => Ok(Self::Timezone(tz.to_string())),
                _ => Err(invalid()),
            },
            SettingField::LogChannelId => {
                parse_snowflake_value(value).map(Self::LogChannelId).ok_or_else(invalid)
            }
            SettingField::StaffRoleId => {
                parse_snowflake_value(value).map(Self::StaffRoleId).ok_or_else(invalid)
            }
        }
    }
}

/// Reads an optional snowflake from a JSON value.
///
/// The outer `Option` is `None` when the value has the wrong shape.
fn parse_snowflake_value(value: &Value) -> Option<Option<u64>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) if s.is_empty() => Some(None),
        Value::String(s) => s.parse::<u64>().ok().filter(|id| *id > 0).map(Some),
        Value::Number(n) => n.as_u64().filter(|id| *id > 0).map(Some),
        _ => None,
    }
}

/// Parameters for applying a batch of settings changes to one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettingsParam {
    pub guild_id: u64,
    pub changes: Vec<SettingChange>,
}

impl UpdateSettingsParam {
    /// Builds a change set from a dashboard request body.
    ///
    /// Every field name is checked before any value is parsed, so a body naming an
    /// unknown field is rejected with `InvalidField` regardless of its other entries.
    pub fn from_dto(
        guild_id: u64,
        payload: &serde_json::Map<String, Value>,
    ) -> Result<Self, SettingsError> {
        for field in payload.keys() {
            field.parse::<SettingField>()?;
        }

        let changes = payload
            .iter()
            .map(|(field, value)| SettingChange::parse(field, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { guild_id, changes })
    }
}
