mod operator;
mod setup;
#[cfg(test)]
mod tests;

use application_ports::command::{CommandInvocation, CommandPort, UNRECOGNIZED_COMMAND};
use async_trait::async_trait;
use domain::operator_role::OperatorRoleRepository;
use domain::ports::discord::DiscordPort;
use std::sync::Arc;
use tracing::{debug, instrument};

pub(crate) const GUILD_ONLY: &str = "This command can only be used in guilds.";

pub struct CommandService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    operator_role_repository: Arc<dyn OperatorRoleRepository + Send + Sync>,
}

impl CommandService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        operator_role_repository: Arc<dyn OperatorRoleRepository + Send + Sync>,
    ) -> Self {
        Self {
            discord_port,
            operator_role_repository,
        }
    }
}

#[async_trait]
impl CommandPort for CommandService {
    #[instrument(
        level = "info",
        skip_all,
        fields(command = %invocation.name, guild_id = ?invocation.guild_id),
    )]
    async fn dispatch(&self, invocation: CommandInvocation) -> String {
        match invocation.name.as_str() {
            "setup" => self.setup(invocation).await,
            "deop" => self.deop(invocation).await,
            "reop" => self.reop(invocation).await,
            name => {
                debug!(command = name, "Unrecognized command");
                UNRECOGNIZED_COMMAND.to_string()
            }
        }
    }
}
