pub mod config;
pub mod error;

pub use config::CacheConfig;
pub use error::{CacheError, Result};
