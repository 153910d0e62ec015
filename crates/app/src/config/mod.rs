//! Application configuration module

use clap::Args;

pub mod logging;
pub mod store;

pub use logging::{LogFormat, LoggingConfig};
pub use store::StoreConfig;

/// Back-office configuration shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Storage settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
