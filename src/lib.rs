pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod runner;

// Re-export commonly used types
pub use error::{HcError, Result};
