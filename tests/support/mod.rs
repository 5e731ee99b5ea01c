use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn get_packplan_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("packplan")
}

/// Creates a project with the given files below `app/javascript`
pub fn project_with(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let source_root = dir.path().join("app").join("javascript");
    fs::create_dir_all(source_root.join("packs")).expect("Failed to create packs dir");

    for file in files {
        let path = source_root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, "// fixture\n").expect("Failed to write fixture file");
    }

    dir
}

/// Canonical source root of a project created by [`project_with`]
#[allow(dead_code)]
pub fn source_root(project: &Path) -> PathBuf {
    project
        .canonicalize()
        .expect("Failed to canonicalize project")
        .join("app")
        .join("javascript")
}

#[allow(dead_code)]
pub fn entry_root(project: &Path) -> PathBuf {
    source_root(project).join("packs")
}

/// Layout shared by most integration tests
#[allow(dead_code)]
pub fn sample_project() -> TempDir {
    project_with(&[
        "packs/application.js",
        "packs/admin/dashboard.ts",
        "packs/README.md",
        "styles/app.module.scss",
        "styles/base.css",
        "components/Card.vue",
    ])
}
