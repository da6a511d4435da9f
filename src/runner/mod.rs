pub mod executor;
pub mod reporter;
pub mod types;

pub use executor::{RequestRunner, extract_values};
pub use reporter::Reporter;
pub use types::RunOutput;
