use async_trait::async_trait;
use domain_shared::discord::{GuildId, RoleId, UserId};
use thiserror::Error;

/// Role membership mutations against Discord's REST API.
///
/// `Ok(())` means Discord answered with a 2xx status.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    async fn add_member_role(
        &self,
        guild_id: &GuildId,
        user_id: &UserId,
        role_id: &RoleId,
        reason: &str,
    ) -> Result<(), DiscordError>;

    async fn remove_member_role(
        &self,
        guild_id: &GuildId,
        user_id: &UserId,
        role_id: &RoleId,
        reason: &str,
    ) -> Result<(), DiscordError>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Discord is unavailable")]
    DiscordUnavailable,
    #[error("Discord rejected the request")]
    RequestRejected,
    #[error("Invalid Discord id {0:?}")]
    InvalidId(String),
}
