/*
[INPUT]:  Transaction payload bytes and Ed25519 key material
[OUTPUT]: Hex-encoded signatures for transaction broadcast
[POS]:    Auth layer - signing seam between flows and wallets
[UPDATE]: When changing signing algorithm or key format
*/

use async_trait::async_trait;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use rand::rngs::OsRng;

use crate::http::Result;

/// Trait for transaction signing.
///
/// Wallet connection and signing UX are external collaborators; the flows
/// only depend on this seam. The trait is async to support hardware wallets
/// and external signing services.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Bech32 address of the signing wallet
    fn address(&self) -> &str;

    /// Sign a transaction payload and return the hex-encoded signature
    async fn sign(&self, payload: &[u8]) -> Result<String>;
}

/// Mock signer for testing
#[derive(Debug, Clone)]
pub struct MockSigner {
    address: String,
    signature: String,
}

impl MockSigner {
    /// Create a new mock signer with a predetermined signature
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            address: address.to_string(),
            signature: signature.to_string(),
        }
    }
}

#[async_trait]
impl TransactionSigner for MockSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign(&self, _payload: &[u8]) -> Result<String> {
        Ok(self.signature.clone())
    }
}

/// Ed25519 signer over raw key material
#[derive(Debug)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Create signer from existing secret key bytes (32 bytes)
    pub fn from_secret_key(bytes: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(bytes);
        Self { signing_key }
    }

    /// Sign a message and return the signature
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Get the raw public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Get the public key in hex encoding
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// Get the raw secret key bytes
    pub fn secret_key_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Verify a signature against a message
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.signing_key
            .verifying_key()
            .verify(message, signature)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let signer = Ed25519Signer::generate();
        assert_eq!(signer.public_key_bytes().len(), 32);
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = Ed25519Signer::from_secret_key(&[7u8; 32]);
        let message = b"test payload";
        let signature = signer.sign(message);
        assert!(signer.verify(message, &signature));
    }

    #[tokio::test]
    async fn test_mock_signer() {
        let signer = MockSigner::new("erd1test", "deadbeef");

        assert_eq!(signer.address(), "erd1test");
        let signature = signer.sign(b"payload").await.unwrap();
        assert_eq!(signature, "deadbeef");
    }
}
