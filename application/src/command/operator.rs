use crate::command::{CommandService, GUILD_ONLY};
use application_ports::command::CommandInvocation;
use tracing::{info, instrument, warn};

pub(crate) const MEMBER_MISSING: &str = "Discord did not send a member object.";
pub(crate) const NO_OPERATOR_ROLE: &str = "No operator role is set, please run /setup";
pub(crate) const LOAD_FAILED: &str = "Failed to load operator role";

#[derive(Debug, Clone, Copy)]
enum RoleChange {
    Grant,
    Revoke,
}

impl RoleChange {
    fn audit_log_reason(self) -> &'static str {
        match self {
            RoleChange::Grant => "Operator role granted via /reop",
            RoleChange::Revoke => "Operator role removed via /deop",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            RoleChange::Grant => "Successfully added role",
            RoleChange::Revoke => "Successfully removed role",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            RoleChange::Grant => "Failed to add role",
            RoleChange::Revoke => "Failed to delete role",
        }
    }
}

impl CommandService {
    #[instrument(level = "info", skip_all)]
    pub(crate) async fn deop(&self, invocation: CommandInvocation) -> String {
        self.change_operator_role(invocation, RoleChange::Revoke).await
    }

    #[instrument(level = "info", skip_all)]
    pub(crate) async fn reop(&self, invocation: CommandInvocation) -> String {
        self.change_operator_role(invocation, RoleChange::Grant).await
    }

    #[instrument(level = "debug", skip(self, invocation))]
    async fn change_operator_role(
        &self,
        invocation: CommandInvocation,
        change: RoleChange,
    ) -> String {
        let Some(guild_id) = invocation.guild_id else {
            return GUILD_ONLY.to_string();
        };
        let Some(member) = invocation.member else {
            return MEMBER_MISSING.to_string();
        };

        let operator_role = match self
            .operator_role_repository
            .find_by_guild_id(&guild_id)
            .await
        {
            Ok(Some(operator_role)) => operator_role,
            Ok(None) => return NO_OPERATOR_ROLE.to_string(),
            Err(err) => {
                warn!(error = ?err, guild_id = %guild_id, "Failed to load operator role");
                return LOAD_FAILED.to_string();
            }
        };

        let result = match change {
            RoleChange::Grant => {
                self.discord_port
                    .add_member_role(
                        &guild_id,
                        &member.user_id,
                        &operator_role.role_id,
                        change.audit_log_reason(),
                    )
                    .await
            }
            RoleChange::Revoke => {
                self.discord_port
                    .remove_member_role(
                        &guild_id,
                        &member.user_id,
                        &operator_role.role_id,
                        change.audit_log_reason(),
                    )
                    .await
            }
        };

        match result {
            Ok(()) => {
                info!(
                    guild_id = %guild_id,
                    user_id = %member.user_id,
                    role_id = %operator_role.role_id,
                    ?change,
                    "Operator role membership changed",
                );
                change.success_message().to_string()
            }
            Err(err) => {
                warn!(
                    error = ?err,
                    guild_id = %guild_id,
                    user_id = %member.user_id,
                    ?change,
                    "Failed to change operator role membership",
                );
                change.failure_message().to_string()
            }
        }
    }
}
