use domain::ports::signature::SignatureVerifier;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;
use tracing::{debug, instrument};

/// Verifies Discord's Ed25519 interaction signatures against the
/// application's public key.
pub struct Ed25519SignatureVerifier {
    public_key: VerifyingKey,
}

#[derive(Debug, Error)]
pub enum SignatureKeyError {
    #[error("Public key is not valid hex")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Public key must be 32 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Public key is not a valid Ed25519 point")]
    InvalidKey(#[from] ed25519_dalek::SignatureError),
}

impl Ed25519SignatureVerifier {
    #[instrument(level = "trace", skip_all)]
    pub fn new(public_key: VerifyingKey) -> Self {
        Self { public_key }
    }

    /// Parses the hex encoded public key shown in Discord's developer portal.
    #[instrument(level = "trace", skip_all, err)]
    pub fn from_hex(public_key: &str) -> Result<Self, SignatureKeyError> {
        let bytes = hex::decode(public_key.trim())?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|bytes: Vec<u8>| SignatureKeyError::InvalidLength(bytes.len()))?;
        let public_key = VerifyingKey::from_bytes(&bytes)?;

        Ok(Self::new(public_key))
    }
}

impl SignatureVerifier for Ed25519SignatureVerifier {
    #[instrument(level = "debug", skip(self, body, signature))]
    fn verify(&self, body: &[u8], signature: &str, timestamp: &str) -> bool {
        let Ok(signature) = hex::decode(signature) else {
            debug!("Signature is not valid hex");
            return false;
        };
        let Ok(signature) = Signature::from_slice(&signature) else {
            debug!("Signature has the wrong length");
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.public_key.verify(&message, &signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    const TIMESTAMP: &str = "1700000000";
    const BODY: &[u8] = br#"{"type":1}"#;

    fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&[7; 32])
    }

    fn verifier() -> Ed25519SignatureVerifier {
        let public_key = hex::encode(signing_key().verifying_key().to_bytes());
        Ed25519SignatureVerifier::from_hex(&public_key).unwrap()
    }

    fn sign(timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(signing_key().sign(&message).to_bytes())
    }

    #[test]
    fn accepts_valid_signature() {
        let signature = sign(TIMESTAMP, BODY);

        assert!(verifier().verify(BODY, &signature, TIMESTAMP));
    }

    #[test]
    fn rejects_tampered_body() {
        let signature = sign(TIMESTAMP, BODY);

        assert!(!verifier().verify(br#"{"type":2}"#, &signature, TIMESTAMP));
    }

    #[test]
    fn rejects_other_timestamp() {
        let signature = sign(TIMESTAMP, BODY);

        assert!(!verifier().verify(BODY, &signature, "1700000001"));
    }

    #[test]
    fn rejects_missing_headers() {
        assert!(!verifier().verify(BODY, "", ""));
    }

    #[test]
    fn rejects_malformed_signature() {
        assert!(!verifier().verify(BODY, "not hex", TIMESTAMP));
        assert!(!verifier().verify(BODY, "abcd", TIMESTAMP));
    }

    #[test]
    fn rejects_signature_from_other_key() {
        let other_key = SigningKey::from_bytes(&[9; 32]);
        let mut message = TIMESTAMP.as_bytes().to_vec();
        message.extend_from_slice(BODY);
        let signature = hex::encode(other_key.sign(&message).to_bytes());

        assert!(!verifier().verify(BODY, &signature, TIMESTAMP));
    }

    #[test]
    fn public_key_must_be_32_bytes() {
        assert!(matches!(
            Ed25519SignatureVerifier::from_hex("abcd"),
            Err(SignatureKeyError::InvalidLength(2)),
        ));
        assert!(matches!(
            Ed25519SignatureVerifier::from_hex("zz"),
            Err(SignatureKeyError::InvalidHex(_)),
        ));
    }
}
