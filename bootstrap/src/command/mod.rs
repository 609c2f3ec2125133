pub mod migrate;
pub mod serve;

use crate::args::CommonArgs;
use crate::command::migrate::MigrateArgs;
use crate::command::serve::ServeArgs;
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the Discord interactions endpoint handling /setup, /deop and /reop
    #[command(name = "serve")]
    Serve(ServeArgs),
    /// Create or update the table holding each guild's operator role
    #[command(name = "migrate")]
    Migrate(MigrateArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Serve(args) => serve::run(common_args, args).await,
            Command::Migrate(args) => migrate::run(common_args, args).await,
        }
    }
}
