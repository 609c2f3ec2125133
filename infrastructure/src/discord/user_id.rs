use crate::discord::snowflake::parse_snowflake;
use domain::ports::discord::DiscordError;
use domain_shared::discord::UserId;
use tracing::instrument;

#[instrument(level = "trace", skip(user_id))]
pub fn domain_to_serenity_user_id(
    user_id: &UserId,
) -> Result<serenity::all::UserId, DiscordError> {
    parse_snowflake(&user_id.0).map(|id| serenity::all::UserId::new(id.get()))
}
