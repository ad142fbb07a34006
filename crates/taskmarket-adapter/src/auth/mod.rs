/*
[INPUT]:  Wallet key material and transaction payloads
[OUTPUT]: Transaction signatures behind a trait seam
[POS]:    Auth layer - signing abstraction and PEM wallet
[UPDATE]: When adding new wallet types or changing signature format
*/

pub mod pem;
pub mod signer;

pub use pem::PemWallet;
pub use signer::{Ed25519Signer, MockSigner, TransactionSigner};
