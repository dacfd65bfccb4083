use tower_sessions::Session;

use crate::server::{
    error::{access::AccessError, auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
    service::identity::IdentityService,
};

pub enum Permission {
    /// Administrator of the guild according to the identity provider.
    GuildAdmin(u64),
    /// The configured bot owner.
    Owner,
}

pub struct AuthGuard<'a> {
    session: &'a Session,
    http_client: &'a reqwest::Client,
    owner_id: u64,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session, http_client: &'a reqwest::Client, owner_id: u64) -> Self {
        Self {
            session,
            http_client,
            owner_id,
        }
    }

    /// Requires a signed-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - The signed-in user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(NotGuildAdmin))` - User does not administer the guild
    /// - `Err(AppError::AuthErr(TokenRejected))` - The stored access token expired
    /// - `Err(AppError::AccessErr(NotOwner))` - User is not the bot owner
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Owner => {
                    if user.user_id != self.owner_id {
                        return Err(AccessError::NotOwner(user.user_id).into());
                    }
                }
                Permission::GuildAdmin(guild_id) => {
                    IdentityService::new(self.http_client, &user.access_token)
                        .require_guild_admin(user.user_id, *guild_id)
                        .await?;
                }
            }
        }

        Ok(user)
    }
}
