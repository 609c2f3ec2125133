use crate::command::{CommandService, GUILD_ONLY};
use application_ports::command::{CommandInvocation, CommandOptionDto};
use domain::operator_role::assign_operator_role;
use tracing::{info, instrument, warn};

pub(crate) const OPTIONS_REQUIRED: &str = "This command requires options.";
pub(crate) const ROLE_ASSERTION_FAILED: &str = "Role assertion failed";
pub(crate) const SAVE_FAILED: &str = "Failed to save operator role";

impl CommandService {
    /// Registers the guild's operator role, replacing any previous one.
    #[instrument(level = "info", skip_all)]
    pub(crate) async fn setup(&self, invocation: CommandInvocation) -> String {
        let Some(guild_id) = invocation.guild_id else {
            return GUILD_ONLY.to_string();
        };
        let Some(options) = invocation.options.filter(|options| !options.is_empty()) else {
            return OPTIONS_REQUIRED.to_string();
        };
        let Some(role_id) = options.iter().find_map(CommandOptionDto::role_id).cloned() else {
            return ROLE_ASSERTION_FAILED.to_string();
        };

        let operator_role = assign_operator_role(guild_id, role_id);

        if let Err(err) = self.operator_role_repository.save(&operator_role).await {
            warn!(
                error = ?err,
                guild_id = %operator_role.guild_id,
                "Failed to save operator role",
            );
            return SAVE_FAILED.to_string();
        }

        info!(
            guild_id = %operator_role.guild_id,
            role_id = %operator_role.role_id,
            "Operator role set",
        );

        format!("Operator role set to {}", operator_role.role_id.mention())
    }
}
