use anyhow::{Context, Result};
use axum::{routing::get, Router};
use portcullis::{
    api,
    auth::jwt::AuthService,
    cli::{init, output::Output, Cli, Commands},
    db::StoreProvider,
    AppConfig, AppState,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init {
            path,
            force,
            host,
            port,
        }) => {
            match init::run(
                init::InitConfig {
                    path,
                    force,
                    host,
                    port,
                },
                &output,
            ) {
                init::InitResult::Success | init::InitResult::AlreadyExists => Ok(()),
                init::InitResult::Error(e) => anyhow::bail!("init failed: {}", e),
            }
        }
        Some(Commands::Config { validate }) => {
            let config = AppConfig::load(&cli.config)
                .with_context(|| format!("loading {}", cli.config.display()))?;
            if validate {
                output.success("configuration is valid");
            } else {
                output.header("Configuration");
                output.info(&format!("listen: {}:{}", config.server.host, config.server.port));
                output.info(&format!("database: {}", config.database.url));
                output.info(&format!(
                    "secret env var: {} (set: yes)",
                    config.auth.jwt_secret_env
                ));
                output.info(&format!("token expiry: {}s", config.auth.jwt_expiry));
            }
            Ok(())
        }
        None => serve(&cli.config, cli.verbose).await,
    }
}

async fn serve(config_path: &std::path::Path, verbose: bool) -> Result<()> {
    let config = AppConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    init_tracing(&config, verbose);

    // Secret and work factor are resolved once, here. A bad secret is a
    // startup failure, not a per-request condition.
    let auth_service = AuthService::new(
        config.jwt_secret()?,
        config.auth.jwt_expiry,
        config.hash_params()?,
    );

    let store = StoreProvider::from_url(&config.database.url)
        .create_store()
        .await
        .context("opening user store")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        store,
        auth_service: Arc::new(auth_service),
    };

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api::routes::create_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(%addr, "portcullis-server listening");

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let default_directive = if verbose {
        "debug".to_string()
    } else {
        config.server.log_level.clone()
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
