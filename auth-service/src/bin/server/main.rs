use std::sync::Arc;

use auth::Authenticator;
use auth::HashCost;
use auth::PasswordHasher;
use auth_service::config::Config;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::inbound::http::router::CookieSettings;
use auth_service::outbound::clock::SystemClock;
use auth_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_days = config.jwt.expiration_days,
        secure_cookie = config.cookie.secure,
        "Configuration loaded"
    );

    // Fails on a missing or empty secret
    let signing_secret = config.jwt.signing_secret()?;
    let token_ttl = config.jwt.token_ttl()?;
    let password_hasher = PasswordHasher::with_cost(HashCost::from(&config.password))?;
    let authenticator = Arc::new(
        Authenticator::new(&signing_secret)
            .with_password_hasher(password_hasher)
            .with_token_ttl(token_ttl),
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::new(SystemClock),
        Arc::clone(&authenticator),
    )?);

    let cookie = CookieSettings {
        secure: config.cookie.secure,
        max_age: authenticator.token_ttl(),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, cookie);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
