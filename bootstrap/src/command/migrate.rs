use crate::args::CommonArgs;
use clap::Args;
use tracing::{info, instrument};

#[derive(Args, Debug)]
pub struct MigrateArgs {}

#[instrument(level = "info", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: MigrateArgs) -> anyhow::Result<()> {
    let CommonArgs { database_url, .. } = common_args;
    let MigrateArgs {} = args;

    let migrator = &infrastructure::database::MIGRATOR;
    let connection = sqlx::PgPool::connect(&database_url).await?;
    migrator.run(&connection).await?;

    for migration in migrator.iter() {
        info!(
            version = migration.version,
            description = %migration.description,
            "Operator role schema migration in place",
        );
    }

    Ok(())
}
