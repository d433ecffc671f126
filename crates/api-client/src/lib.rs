//! Browser-side access to the LawLink backend.
//!
//! Every call goes through [`ApiClient`], which reads the bearer token from the
//! shared [`SessionHandle`] and classifies failures into `AppError`.

pub mod admin;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod ports;
pub mod request;
pub mod session;
pub mod storage;
pub mod token;

pub use auth::RegisterOutcome;
pub use config::client_config;
pub use ports::*;
pub use request::{ApiClient, Auth};
pub use session::{Session, SessionHandle};
pub use storage::{default_store, MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use token::{decode_identity, try_decode_identity, TokenDecodeError};
