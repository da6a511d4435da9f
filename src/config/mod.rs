pub mod builder;
pub mod extend;
pub mod loader;
pub mod raw;
pub mod selector;
pub mod types;

// Re-export commonly used types
pub use builder::ConfigBuilder;
pub use extend::resolve_extend;
pub use loader::ConfigLoader;
pub use raw::{RawDocument, RawRequest, RawSettings};
pub use selector::Selector;
pub use types::{
    ArgType, Argument, BodyType, Config, ConfigError, ConfigResult, GlobalSettings, Header,
    Method, RequestConfig,
};
