use application::command::CommandService;
use application_ports::command::CommandPort;
use domain::ports::signature::SignatureVerifier;
use infrastructure::signature::Ed25519SignatureVerifier;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

/// Holds the configured adapters for the lifetime of the server.
#[derive(Clone)]
pub struct ApplicationPortLocator {
    signature_verifier: Arc<Ed25519SignatureVerifier>,
    command_adapter: Arc<CommandService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        signature_verifier: Arc<Ed25519SignatureVerifier>,
        command_adapter: Arc<CommandService>,
    ) -> Self {
        Self {
            signature_verifier,
            command_adapter,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_signature_verifier(&self) -> Arc<dyn SignatureVerifier + Send + Sync> {
        self.signature_verifier.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_command_port(&self) -> Arc<dyn CommandPort + Send + Sync> {
        self.command_adapter.clone()
    }
}
