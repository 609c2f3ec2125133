use crate::args::CommonArgs;
use sentry::ClientInitGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber and, when a DSN is configured, Sentry.
///
/// The returned guard flushes pending Sentry events on drop and must be held
/// for the lifetime of the process.
pub fn init(common_args: &CommonArgs) -> anyhow::Result<Option<ClientInitGuard>> {
    let sentry = match &common_args.sentry_dsn {
        Some(dsn) => Some(sentry::init(sentry::ClientOptions {
            dsn: Some(dsn.parse()?),
            release: sentry::release_name!(),
            environment: common_args.sentry_environment.clone().map(Into::into),
            sample_rate: common_args.sentry_sample_rate.unwrap_or(1.0),
            traces_sample_rate: common_args.sentry_traces_sample_rate.unwrap_or(0.0),
            ..Default::default()
        })),
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    Ok(sentry)
}
