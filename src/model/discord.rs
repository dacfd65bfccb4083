use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::serde_id::{deserialize_u64_from_string, serialize_u64_as_string};

/// Guild the signed-in user administers.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiscordGuildDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
}

/// Text channel or role of a guild, as offered by the dashboard selectors.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuildResourceDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    pub name: String,
}
