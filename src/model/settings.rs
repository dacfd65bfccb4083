use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::serde_id::{
    deserialize_optional_u64_from_string, deserialize_u64_from_string,
    serialize_optional_u64_as_string, serialize_u64_as_string,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuildSettingsDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub language: String,
    #[serde(
        serialize_with = "serialize_optional_u64_as_string",
        deserialize_with = "deserialize_optional_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub log_channel_id: Option<u64>,
    #[serde(
        serialize_with = "serialize_optional_u64_as_string",
        deserialize_with = "deserialize_optional_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub staff_role_id: Option<u64>,
    pub timezone: String,
}

/// Response body for a successful settings update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateSettingsResponseDto {
    pub success: bool,
    pub settings: GuildSettingsDto,
}

/// Choices the dashboard offers for the enumerated settings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SettingsOptionsDto {
    pub languages: Vec<String>,
    pub timezones: Vec<String>,
}
