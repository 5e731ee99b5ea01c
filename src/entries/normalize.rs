//! Source path to bundle name normalization

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::path::{Component, Path};

/// Logical identifier of a bundle: the source path relative to the entry root with its
/// final extension removed, always using `/` as separator
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleName(String);

impl BundleName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BundleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BundleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives the bundle name of `file` relative to `root`.
///
/// `file` must be a strict descendant of `root`. Only the last extension of the base
/// name is removed, so `styles/foo.module.css` becomes `styles/foo.module`.
pub fn normalize(root: &Path, file: &Path) -> PlanResult<BundleName> {
    let relative = file.strip_prefix(root).map_err(|_| {
        PlanError::configuration(format!(
            "{} is not inside the entry root {}",
            file.display(),
            root.display()
        ))
    })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    PlanError::configuration(format!(
                        "{} contains a non UTF-8 path segment",
                        file.display()
                    ))
                })?;
                segments.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(PlanError::configuration(format!(
                    "{} escapes the entry root {}",
                    file.display(),
                    root.display()
                )))
            }
        }
    }

    let Some(base) = segments.pop() else {
        return Err(PlanError::configuration(format!(
            "{} is the entry root itself, not a file below it",
            file.display()
        )));
    };

    let stem = strip_extension(base);
    if stem.is_empty() {
        return Err(PlanError::configuration(format!(
            "{} has an empty file stem",
            file.display()
        )));
    }

    segments.push(stem);
    Ok(BundleName(segments.join("/")))
}

// Leading dots do not start an extension: `.babelrc` keeps its name.
fn strip_extension(base: &str) -> &str {
    match base.rfind('.') {
        Some(0) | None => base,
        Some(idx) => &base[..idx],
    }
}
