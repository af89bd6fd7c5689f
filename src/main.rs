//! StudyBuddy - Application Entry Point

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studybuddy::{config::CONFIG, db, handlers, middleware::cors_layer, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StudyBuddy server...");
    tracing::info!("Environment: {}", CONFIG.server.environment);

    let store = db::connect_store(&CONFIG.database).await?;
    let state = AppState::new(store, CONFIG.clone());

    if CONFIG.session.require_session {
        tracing::info!("Session gate attached to data routes");
    } else {
        tracing::warn!("Data routes are not session-gated (REQUIRE_SESSION=false)");
    }

    // Layers are applied bottom-up, so CORS wraps everything
    let app = handlers::routes(&state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&CONFIG.cors)?)
        .with_state(state);

    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
