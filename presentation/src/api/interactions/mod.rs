mod payload;
mod response;

use crate::application_ports::Locator;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use payload::InteractionPayload;
use response::InteractionResponse;
use tracing::{debug, instrument, warn};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Entry point for Discord's interactions webhook.
///
/// Unsigned or badly signed requests get `401` before the body is looked at.
/// Pings and interactions other than slash commands are acknowledged with a
/// pong; slash commands are dispatched and answered with an ephemeral message.
#[instrument(level = "info", skip_all)]
pub async fn interactions_handler<L: Locator + Send + Sync + Clone + 'static>(
    State(locator): State<L>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = header_value(&headers, SIGNATURE_HEADER);
    let timestamp = header_value(&headers, TIMESTAMP_HEADER);

    if !locator
        .get_signature_verifier()
        .verify(&body, signature, timestamp)
    {
        warn!("Rejected interaction with an invalid request signature");
        return (StatusCode::UNAUTHORIZED, "Bad request signature").into_response();
    }

    let payload = match serde_json::from_slice::<InteractionPayload>(&body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "Signed interaction payload could not be parsed");
            return (StatusCode::BAD_REQUEST, "Malformed interaction payload").into_response();
        }
    };

    debug!(interaction_type = payload.kind, "Interaction received");

    let Some(invocation) = payload.into_command_invocation() else {
        return Json(InteractionResponse::pong()).into_response();
    };

    let content = locator.get_command_port().dispatch(invocation).await;

    Json(InteractionResponse::ephemeral_message(content)).into_response()
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
