// Planning phases, run in file order by the orchestrator

#[path = "01_discover.rs"]
pub mod discover;
#[path = "02_entries.rs"]
pub mod entries;
#[path = "03_assemble.rs"]
pub mod assemble;

pub use assemble::AssemblePhase;
pub use discover::DiscoverPhase;
pub use entries::EntryMapPhase;
