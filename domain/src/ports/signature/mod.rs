/// Checks that an interaction request was signed by Discord.
///
/// The signed message is the timestamp header followed by the raw body. Any
/// malformed input must verify as `false` rather than fail.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SignatureVerifier {
    fn verify(&self, body: &[u8], signature: &str, timestamp: &str) -> bool;
}
