use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::serde_id::{deserialize_u64_from_string, serialize_u64_as_string};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub discord_id: u64,
    pub name: String,
    /// Whether the user is the bot owner and may toggle maintenance mode.
    pub owner: bool,
}
