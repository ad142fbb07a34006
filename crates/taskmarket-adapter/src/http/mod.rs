/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - gateway and worker REST communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod network;
pub mod query;
pub mod tx;
pub mod worker;

pub use client::{ClientConfig, GatewayClient};
pub use error::{MarketError, Result};
pub use tx::{build_post_task_call, encode_string_arg, encode_u32_arg, encode_u64_arg, PostTask};
pub use worker::{WorkerClient, DEFAULT_WORKER_URL};
