use super::normalize::{normalize, BundleName};
use crate::error::{PlanError, PlanResult};
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap, Entry};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Mapping from bundle name to the absolute source path compiled for it
///
/// Ordered by bundle name so that serialized plans are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryMap {
    entries: BTreeMap<BundleName, PathBuf>,
}

impl EntryMap {
    /// Folds discovered files into an entry map, rejecting bundle name collisions.
    ///
    /// Registering the same file twice is a no-op.
    pub fn build<I, P>(root: &Path, discovered: I) -> PlanResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut map = Self::default();
        for path in discovered {
            map.insert(root, path.as_ref())?;
        }
        debug!(entries = map.len(), "Entry map built");
        Ok(map)
    }

    fn insert(&mut self, root: &Path, source: &Path) -> PlanResult<()> {
        let name = normalize(root, source)?;

        match self.entries.entry(name) {
            Entry::Vacant(slot) => {
                debug!(bundle = %slot.key(), source = %source.display(), "Registered entry");
                slot.insert(source.to_path_buf());
                Ok(())
            }
            Entry::Occupied(existing) if existing.get() == source => Ok(()),
            Entry::Occupied(existing) => {
                warn!(
                    bundle = %existing.key(),
                    first = %existing.get().display(),
                    second = %source.display(),
                    "Bundle name collision"
                );
                Err(PlanError::Collision {
                    name: existing.key().to_string(),
                    first: existing.get().clone(),
                    second: source.to_path_buf(),
                })
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn names(&self) -> impl Iterator<Item = &BundleName> {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, BundleName, PathBuf> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntryMap {
    type Item = (&'a BundleName, &'a PathBuf);
    type IntoIter = btree_map::Iter<'a, BundleName, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
