//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { project_root } => {
                info!(project = %project_root, "Starting plan");
            }
            ProgressEvent::PhaseStarted { phase } => {
                debug!(phase = %phase, "Starting phase");
            }
            ProgressEvent::PhaseComplete { phase, duration } => {
                debug!(
                    phase = %phase,
                    duration_ms = duration.as_millis(),
                    "Phase complete"
                );
            }
            ProgressEvent::EntriesDiscovered { count, scan_time } => {
                info!(
                    entries = count,
                    scan_time_ms = scan_time.as_millis(),
                    "Entry discovery complete"
                );
            }
            ProgressEvent::EntryMapBuilt { entries } => {
                debug!(entries, "Entry map built");
            }
            ProgressEvent::Completed {
                entries,
                rules,
                total_time,
            } => {
                info!(
                    entries,
                    rules,
                    total_time_ms = total_time.as_millis(),
                    "Plan complete"
                );
            }
            ProgressEvent::Failed { phase, error } => {
                warn!(phase = %phase, error = %error, "Planning failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        let events = vec![
            ProgressEvent::Started {
                project_root: "/test".to_string(),
            },
            ProgressEvent::PhaseStarted {
                phase: "discover".to_string(),
            },
            ProgressEvent::PhaseComplete {
                phase: "discover".to_string(),
                duration: Duration::from_millis(3),
            },
            ProgressEvent::EntriesDiscovered {
                count: 2,
                scan_time: Duration::from_millis(3),
            },
            ProgressEvent::EntryMapBuilt { entries: 2 },
            ProgressEvent::Completed {
                entries: 2,
                rules: 7,
                total_time: Duration::from_millis(5),
            },
            ProgressEvent::Failed {
                phase: "assemble".to_string(),
                error: "Test error".to_string(),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
