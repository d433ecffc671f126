pub mod config;
pub mod error;
pub mod filters;
pub mod messaging;
pub mod models;
pub mod requests;

pub use config::*;
pub use error::*;
pub use filters::*;
pub use messaging::*;
pub use models::*;
pub use requests::*;
