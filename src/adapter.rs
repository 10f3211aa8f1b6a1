pub mod driven;
pub mod driver;
pub mod service_config;

pub use service_config::{ConfigError, ServiceConfig};
