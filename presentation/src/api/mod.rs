use crate::application_ports::Locator;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

pub mod interactions;

/// Path Discord posts interactions to, configured as the application's
/// interactions endpoint URL.
pub const INTERACTIONS_PATH: &str = "/interactions";

pub fn create_router<L: Locator + Send + Sync + Clone + 'static>() -> Router<L> {
    Router::new()
        .route(
            INTERACTIONS_PATH,
            axum::routing::post(interactions::interactions_handler::<L>),
        )
        .layer(TraceLayer::new_for_http())
}

#[instrument(level = "debug", skip(locator))]
pub async fn run_api<L: Locator + Send + Sync + Clone + 'static>(
    locator: L,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let router: Router<()> = create_router::<L>().with_state(locator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!(port, path = INTERACTIONS_PATH, "Listening for Discord interactions");

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
