/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task marketplace adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod decode;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Ed25519Signer,
    MockSigner,
    PemWallet,
    TransactionSigner,
};

// Re-export commonly used types from http
pub use http::{
    build_post_task_call,
    ClientConfig,
    GatewayClient,
    MarketError,
    PostTask,
    Result,
    WorkerClient,
    DEFAULT_WORKER_URL,
};

// Re-export all types
pub use types::*;

// Re-export the boundary decode helpers
pub use decode::{decode_status, number_field, string_field};
