use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, DashboardConfig},
    data::bot_status::BotStatusRepository,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Whichever process starts first creates the schema; migrations are idempotent, so the
/// second process finds nothing to do. The bot status row is created here as well, so
/// maintenance mode reads as off until the owner toggles it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    BotStatusRepository::new(&db).ensure_exists().await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after a week of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the dashboard router
/// - `Err(AppError::InternalError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for identity provider requests.
///
/// Redirects are disabled so a response cannot steer requests carrying a user's
/// access token to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds the Discord OAuth2 client from the dashboard configuration.
pub fn setup_oauth_client(config: &DashboardConfig) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };

    Ok(BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|_| invalid("DISCORD_AUTH_URL", &config.discord_auth_url))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|_| invalid("DISCORD_TOKEN_URL", &config.discord_token_url))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|_| invalid("DISCORD_REDIRECT_URL", &config.discord_redirect_url))?,
        ))
}
