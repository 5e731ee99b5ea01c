//! Progress reporting for plan construction

mod handler;
mod logging;

pub use handler::{ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;
