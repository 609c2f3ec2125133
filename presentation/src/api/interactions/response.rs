use serde::Serialize;

const RESPONSE_PONG: u8 = 1;
const RESPONSE_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Message flag that makes a reply visible only to the invoking user.
pub const EPHEMERAL: u64 = 1 << 6;

#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<InteractionResponseData>,
}

#[derive(Debug, Serialize)]
struct InteractionResponseData {
    content: String,
    flags: u64,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_PONG,
            data: None,
        }
    }

    pub fn ephemeral_message(content: impl Into<String>) -> Self {
        Self {
            kind: RESPONSE_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(InteractionResponseData {
                content: content.into(),
                flags: EPHEMERAL,
            }),
        }
    }
}
