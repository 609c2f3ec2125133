use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application::command::CommandService;
use clap::Args;
use infrastructure::discord::{http_client, DiscordAdapter};
use infrastructure::operator_role::PostgresOperatorRoleRepository;
use infrastructure::signature::Ed25519SignatureVerifier;
use presentation::api::run_api;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Args)]
pub struct ServeArgs {
    /// Hex encoded public key of the Discord application, used to verify interactions
    #[arg(long, env = "DISCORD_PUBLIC_KEY")]
    pub discord_public_key: String,
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    pub discord_bot_token: String,
    /// The port to listen on for interactions
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let CommonArgs { database_url, .. } = common_args;
    let ServeArgs {
        discord_public_key,
        discord_bot_token,
        port,
    } = args;

    let signature_verifier = Arc::new(Ed25519SignatureVerifier::from_hex(&discord_public_key)?);

    let database_connection = sqlx::PgPool::connect(&database_url).await?;
    let discord_adapter = Arc::new(DiscordAdapter::new(http_client(&discord_bot_token)));
    let operator_role_repository =
        Arc::new(PostgresOperatorRoleRepository::new(database_connection));

    let command_adapter = Arc::new(CommandService::new(
        discord_adapter,
        operator_role_repository,
    ));

    let locator = ApplicationPortLocator::new(signature_verifier, command_adapter);

    info!(port, "Starting interactions endpoint");

    run_api(locator, port).await.map_err(|e| anyhow!(e))?;

    Ok(())
}
