//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while a plan is being built
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Planning started for a project
    Started { project_root: String },

    /// A planning phase started
    PhaseStarted { phase: String },

    /// A planning phase finished
    PhaseComplete { phase: String, duration: Duration },

    /// Entry discovery finished
    EntriesDiscovered { count: usize, scan_time: Duration },

    /// Discovered files were folded into the entry map
    EntryMapBuilt { entries: usize },

    /// The plan was assembled successfully
    Completed {
        entries: usize,
        rules: usize,
        total_time: Duration,
    },

    /// Planning stopped with an error
    Failed { phase: String, error: String },
}

/// Trait for handling progress events during planning
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}
