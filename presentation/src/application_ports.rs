use application_ports::command::CommandPort;
use domain::ports::signature::SignatureVerifier;
use std::sync::Arc;

pub trait Locator {
    fn get_signature_verifier(&self) -> Arc<dyn SignatureVerifier + Send + Sync>;
    fn get_command_port(&self) -> Arc<dyn CommandPort + Send + Sync>;
}
