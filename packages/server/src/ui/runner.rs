//! Router assembly and server startup.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::ServerConfig,
    domain::UserRepository,
    error::ServerError,
    infrastructure::repository::InMemoryUserRepository,
};

use super::{
    handler::{get_room, health_check, list_rooms, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router.
///
/// API and WebSocket routes take precedence; every other path is served from
/// the static directory.
pub fn build_app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(list_rooms))
        .route("/api/rooms/{room}", get(get_room))
        .route("/ws", get(websocket_handler))
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors_layer(config) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let origins = config
        .allowed_origins()?
        .iter()
        .copied()
        .map(HeaderValue::from_static)
        .collect::<Vec<_>>();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST]),
    )
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let state = Arc::new(AppState::new(repository));
    let app = build_app(state, config);

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!(
        "Environment: {:?}, static files from '{}'",
        config.environment,
        config.static_dir.display()
    );
    if config.allowed_origins().is_none() {
        tracing::info!("Cross-origin access disabled");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, &config, shutdown_signal()).await
}
