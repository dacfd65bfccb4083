//! Signed-in dashboard user.

use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Dashboard user as stored in the session after the OAuth callback.
///
/// The access token is kept so guild listings and per-guild admin checks can be made
/// against the identity provider on behalf of the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: u64,
    pub name: String,
    pub access_token: String,
}

impl SessionUser {
    pub fn into_dto(self, owner_id: u64) -> UserDto {
        UserDto {
            discord_id: self.user_id,
            name: self.name,
            owner: self.user_id == owner_id,
        }
    }
}
