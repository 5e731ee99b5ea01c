//! Utility modules for packplan

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
