//! Stale generated-resource cleanup.
//!
//! Regeneration always sweeps the previous run's artifacts first, so a
//! manifest edit that switches icon families (legacy-only to adaptive, or
//! back) leaves no orphaned resources behind.
//!
//! Two removal policies: generated *files* are ordinary and their removal is
//! expected to succeed, so failures propagate. Versioned *folders* may hold
//! user-added files or be otherwise locked, so folder removal is best-effort
//! and never fails the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Remove every file named `filename` anywhere under `root`.
pub fn remove_files_named(root: &Path, filename: &str) -> io::Result<()> {
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() && entry.file_name() == filename {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn is_versioned_mipmap(name: &str) -> bool {
    name.starts_with("mipmap-") && name.ends_with("-v26")
}

/// Remove the contents of every `mipmap-*-v26` folder under `root`, then the
/// now-empty folders themselves.
///
/// Content removal propagates failures; removal of the folders is silent
/// best-effort, matching the policy described in the module docs.
pub fn clear_versioned_dirs(root: &Path) -> io::Result<()> {
    let dirs: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .is_some_and(is_versioned_mipmap)
        })
        .map(|e| e.into_path())
        .collect();

    for dir in &dirs {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
    }

    for dir in &dirs {
        let _ = fs::remove_dir(dir);
    }
    Ok(())
}
