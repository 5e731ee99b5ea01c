use serde::Serialize;
use std::path::{Path, PathBuf};

pub const SCRIPT_FILENAME: &str = "[name]-[chunkhash].js";
pub const SCRIPT_CHUNK_FILENAME: &str = "[name]-[chunkhash].chunk.js";
pub const HOT_UPDATE_FILENAME: &str = "[id]-[hash].hot-update.js";
pub const STYLESHEET_FILENAME: &str = "[name]-[contenthash:8].css";
pub const STYLESHEET_CHUNK_FILENAME: &str = "[name]-[contenthash:8].chunk.css";

/// File name templates and locations for the external emitter
///
/// Templates are opaque to the planner. Script names carry the chunk hash, stylesheet
/// names their own content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputNaming {
    pub filename: String,
    pub chunk_filename: String,
    pub hot_update_filename: String,
    pub stylesheet_filename: String,
    pub stylesheet_chunk_filename: String,
    pub path: PathBuf,
    pub public_path: String,
}

impl OutputNaming {
    pub fn new(path: impl AsRef<Path>, public_path: impl Into<String>) -> Self {
        Self {
            filename: SCRIPT_FILENAME.to_string(),
            chunk_filename: SCRIPT_CHUNK_FILENAME.to_string(),
            hot_update_filename: HOT_UPDATE_FILENAME.to_string(),
            stylesheet_filename: STYLESHEET_FILENAME.to_string(),
            stylesheet_chunk_filename: STYLESHEET_CHUNK_FILENAME.to_string(),
            path: path.as_ref().to_path_buf(),
            public_path: public_path.into(),
        }
    }
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self::new("public/packs", "/packs/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates() {
        let naming = OutputNaming::default();
        assert_eq!(naming.filename, "[name]-[chunkhash].js");
        assert_eq!(naming.chunk_filename, "[name]-[chunkhash].chunk.js");
        assert_eq!(naming.hot_update_filename, "[id]-[hash].hot-update.js");
        assert_eq!(naming.stylesheet_filename, "[name]-[contenthash:8].css");
        assert_eq!(naming.path, PathBuf::from("public/packs"));
        assert_eq!(naming.public_path, "/packs/");
    }

    #[test]
    fn test_script_and_stylesheet_tags_differ() {
        let naming = OutputNaming::default();
        assert!(naming.filename.contains("[chunkhash]"));
        assert!(naming.stylesheet_filename.contains("[contenthash:8]"));
    }
}
