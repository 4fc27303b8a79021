//! Targeted text substitution in generated XML resources.
//!
//! The Android template ships launcher XML fragments and a shared
//! `values/colors.xml` with a placeholder background binding. After the icon
//! assets are generated, that placeholder is rewritten to point at either the
//! generated background mipmap or a literal color.
//!
//! A missing file, or a file that no longer contains the placeholder, is a
//! no-op: patching is idempotent across reruns and across density folders
//! that were never generated.

use crate::density::DENSITY_BUCKETS;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("patching {}: {source}", path.display())]
pub struct PatchError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Replace the first occurrence of `old` with `new` in the file at `path`.
pub fn replace_in_file(old: &str, new: &str, path: &Path) -> Result<(), PatchError> {
    if !path.exists() {
        return Ok(());
    }
    let wrap = |source| PatchError {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(wrap)?;
    if !content.contains(old) {
        return Ok(());
    }
    fs::write(path, content.replacen(old, new, 1)).map_err(wrap)
}

/// Apply [`replace_in_file`] to the addressed file in every density bucket's
/// subfolder (`{prefix}{dpi}{suffix}/{file_name}` under `res_path`).
pub fn patch_res_subfolders(
    old: &str,
    new: &str,
    res_path: &Path,
    folder_prefix: &str,
    folder_suffix: &str,
    file_name: &str,
) -> Result<(), PatchError> {
    DENSITY_BUCKETS.par_iter().try_for_each(|bucket| {
        let folder = format!("{folder_prefix}{}{folder_suffix}", bucket.suffix);
        replace_in_file(old, new, &res_path.join(folder).join(file_name))
    })
}
