use crate::discord::snowflake::parse_snowflake;
use domain::ports::discord::DiscordError;
use domain_shared::discord::GuildId;
use tracing::instrument;

#[instrument(level = "trace", skip(guild_id))]
pub fn domain_to_serenity_guild_id(
    guild_id: &GuildId,
) -> Result<serenity::all::GuildId, DiscordError> {
    parse_snowflake(&guild_id.0).map(|id| serenity::all::GuildId::new(id.get()))
}
