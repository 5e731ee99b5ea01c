use crate::error::{PlanError, PlanResult};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Script and component extensions recognized as bundle entry points
pub const DEFAULT_ENTRY_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Extensions (without the leading dot) that mark a file as an entry. Case-sensitive.
    pub extensions: BTreeSet<String>,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_ENTRY_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_depth: None,
            include_hidden: false,
        }
    }
}

impl DiscoveryConfig {
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| self.extensions.contains(ext))
    }
}

/// Recursive scanner that yields entry files below one root, in lexicographic order
pub struct EntryDiscoverer {
    root: PathBuf,
    config: DiscoveryConfig,
}

impl EntryDiscoverer {
    pub fn new(root: impl Into<PathBuf>) -> PlanResult<Self> {
        let root = root.into();

        if !root.exists() {
            return Err(PlanError::file_system(
                &root,
                io::Error::new(io::ErrorKind::NotFound, "entry root does not exist"),
            ));
        }
        if !root.is_dir() {
            return Err(PlanError::file_system(
                &root,
                io::Error::new(io::ErrorKind::Other, "entry root is not a directory"),
            ));
        }

        // Surface permission problems up front instead of as an empty walk.
        std::fs::read_dir(&root).map_err(|err| PlanError::file_system(&root, err))?;

        let root = root
            .canonicalize()
            .map_err(|err| PlanError::file_system(&root, err))?;

        debug!(root = %root.display(), "EntryDiscoverer initialized");

        Ok(Self {
            root,
            config: DiscoveryConfig::default(),
        })
    }

    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// Canonical root every discovered path descends from
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn discover(&self) -> PlanResult<Vec<PathBuf>> {
        let start = Instant::now();

        info!(
            root = %self.root.display(),
            extensions = ?self.config.extensions,
            "Discovering entry points"
        );

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(!self.config.include_hidden)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        let mut files_seen = 0usize;

        for result in walker {
            let entry = result.map_err(|err| {
                let message = err.to_string();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
                PlanError::file_system(&self.root, source)
            })?;

            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }
            files_seen += 1;

            let path = entry.path();
            if self.config.accepts(path) {
                debug!(path = %path.display(), "Found entry point");
                entries.push(path.to_path_buf());
            }
        }

        entries.sort();

        info!(
            entries = entries.len(),
            files_seen,
            scan_time_ms = start.elapsed().as_millis() as u64,
            "Entry discovery completed"
        );

        Ok(entries)
    }
}

/// Discovers entry files below `root` whose extension is one of `extensions`
pub fn discover<I, S>(root: &Path, extensions: I) -> PlanResult<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EntryDiscoverer::new(root)?
        .with_config(DiscoveryConfig::with_extensions(extensions))
        .discover()
}
