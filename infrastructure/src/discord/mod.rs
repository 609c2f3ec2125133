mod guild_id;
mod role_id;
mod snowflake;
mod user_id;

use crate::discord::guild_id::domain_to_serenity_guild_id;
use crate::discord::role_id::domain_to_serenity_role_id;
use crate::discord::user_id::domain_to_serenity_user_id;
use async_trait::async_trait;
use domain::ports::discord::{DiscordError, DiscordPort};
use domain_shared::discord::{GuildId, RoleId, UserId};
use serenity::http::{Http, HttpBuilder};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Grants and revokes roles through Discord's REST API.
///
/// The bot token is bound to the `Http` client, which sends
/// `PUT`/`DELETE /guilds/{guild}/members/{user}/roles/{role}`. Build the
/// client with [`http_client`] so every call is a single request.
pub struct DiscordAdapter {
    client: Arc<Http>,
}

/// Creates the REST client for the bot.
///
/// Serenity's ratelimiter is disabled. A `429` is reported as a failed call
/// instead of being waited out and resent.
#[instrument(level = "trace", skip_all)]
pub fn http_client(bot_token: &str) -> Arc<Http> {
    Arc::new(http_builder(bot_token).build())
}

fn http_builder(bot_token: &str) -> HttpBuilder {
    HttpBuilder::new(bot_token).ratelimiter_disabled(true)
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, reason))]
    async fn add_member_role(
        &self,
        guild_id: &GuildId,
        user_id: &UserId,
        role_id: &RoleId,
        reason: &str,
    ) -> Result<(), DiscordError> {
        let guild_id = domain_to_serenity_guild_id(guild_id)?;
        let user_id = domain_to_serenity_user_id(user_id)?;
        let role_id = domain_to_serenity_role_id(role_id)?;

        self.client
            .add_member_role(guild_id, user_id, role_id, Some(reason))
            .await
            .map_err(map_serenity_err)
    }

    #[instrument(level = "debug", err, skip(self, reason))]
    async fn remove_member_role(
        &self,
        guild_id: &GuildId,
        user_id: &UserId,
        role_id: &RoleId,
        reason: &str,
    ) -> Result<(), DiscordError> {
        let guild_id = domain_to_serenity_guild_id(guild_id)?;
        let user_id = domain_to_serenity_user_id(user_id)?;
        let role_id = domain_to_serenity_role_id(role_id)?;

        self.client
            .remove_member_role(guild_id, user_id, role_id, Some(reason))
            .await
            .map_err(map_serenity_err)
    }
}

#[instrument(level = "trace", skip_all)]
fn map_serenity_err(err: serenity::Error) -> DiscordError {
    if let serenity::Error::Http(http_err) = &err {
        if let Some(status) = http_err.status_code() {
            warn!(%status, error = ?err, "Discord rejected the request");
            return DiscordError::RequestRejected;
        }
    }

    warn!(error = ?err, "Discord request failed");
    DiscordError::DiscordUnavailable
}
