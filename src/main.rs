mod model;
mod server;

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use serenity::all::Http;
use tower_http::trace::TraceLayer;

use crate::server::{
    bot,
    config::{Config, DashboardConfig},
    error::AppError,
    i18n::Catalog,
    router,
    service::platform::discord::DiscordPlatform,
    startup,
    state::AppState,
};

/// GalaxyBot: Discord moderation bot and its configuration dashboard.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Long-running service to start
    #[arg(value_enum)]
    service: Service,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Service {
    /// HTTP dashboard API
    Web,
    /// Discord gateway bot
    Bot,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let catalog = Arc::new(Catalog::embedded()?);

    match cli.service {
        Service::Bot => {
            let client = bot::start::init_bot(&config, db, catalog).await?;
            bot::start::start_bot(client).await
        }
        Service::Web => serve_dashboard(&config, db, catalog).await,
    }
}

async fn serve_dashboard(
    config: &Config,
    db: sea_orm::DatabaseConnection,
    catalog: Arc<Catalog>,
) -> Result<(), AppError> {
    let dashboard = DashboardConfig::from_env()?;

    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&dashboard)?;
    let discord = DiscordPlatform::new(Arc::new(Http::new(&config.discord_bot_token)));

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            discord,
            catalog,
            config.bot_owner_id,
        ))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(dashboard.addr).await?;
    tracing::info!("Dashboard listening on {}", dashboard.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
