//! Entry point discovery and bundle naming

mod discover;
mod map;
mod normalize;

pub use discover::{discover, DiscoveryConfig, EntryDiscoverer, DEFAULT_ENTRY_EXTENSIONS};
pub use map::EntryMap;
pub use normalize::{normalize, BundleName};
