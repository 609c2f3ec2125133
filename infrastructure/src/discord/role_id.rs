use crate::discord::snowflake::parse_snowflake;
use domain::ports::discord::DiscordError;
use domain_shared::discord::RoleId;
use tracing::instrument;

#[instrument(level = "trace", skip(role_id))]
pub fn domain_to_serenity_role_id(
    role_id: &RoleId,
) -> Result<serenity::all::RoleId, DiscordError> {
    parse_snowflake(&role_id.0).map(|id| serenity::all::RoleId::new(id.get()))
}
