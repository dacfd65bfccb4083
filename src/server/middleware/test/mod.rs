use crate::server::{
    error::{access::AccessError, auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{AuthSession, CsrfSession},
    },
    model::user::SessionUser,
};
use test_utils::builder::TestBuilder;


const OWNER_ID: u64 = 1000;

fn session_user(user_id: u64) -> SessionUser {
    SessionUser {
        user_id,
        name: "Galaxy".to_string(),
        access_token: "token".to_string(),
    }
}
