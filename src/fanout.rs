//! Density fan-out: one source image into every bucket's subfolder.
//!
//! The source is first saved to a staging file at the resource root, then
//! copied into each density subfolder and scaled there in place. Bucket
//! operations write to disjoint paths and run in parallel; the fan-out is
//! joined as a unit before the staging file is removed.
//!
//! Squareness is checked on every bucket copy after scaling. Launcher,
//! adaptive, and notification icons all go through the same path; only the
//! base size, filename, and folder prefix differ per [`IconTask`].

use crate::context::RunContext;
use crate::density::{ADAPTIVE_BASE_SIZE, DENSITY_BUCKETS};
use crate::fetch::save_source;
use crate::imaging::{ImageTool, ResizeError};
use crate::pipeline::IconError;
use crate::resolver::IconSource;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// One fan-out job. Transient; built per icon family and discarded.
pub struct IconTask<'a> {
    pub source: &'a IconSource,
    /// Icon size in px at mdpi. Bucket sizes scale from this.
    pub base_size: u32,
    pub filename: &'static str,
    /// `mipmap-` for launcher and adaptive layers, `drawable-` for the
    /// notification icon.
    pub folder_prefix: &'static str,
}

impl IconTask<'_> {
    /// Adaptive icon layers must land in version-gated folders, which only
    /// Android 8+ reads. The adaptive base size is the signal.
    fn versioned(&self) -> bool {
        self.base_size == ADAPTIVE_BASE_SIZE
    }
}

/// Materialize `task` into every density bucket under `res_path`.
///
/// `resize_warned` deduplicates the missing-resize-tool warning across every
/// fan-out of one pipeline run; the caller owns the flag so no state leaks
/// across invocations.
pub fn fan_out(
    tool: &impl ImageTool,
    task: &IconTask<'_>,
    context: &RunContext,
    res_path: &Path,
    resize_warned: &AtomicBool,
) -> Result<(), IconError> {
    let staging = res_path.join(task.filename);
    save_source(task.source, &staging).map_err(|source| IconError::Save {
        file: task.filename,
        source,
    })?;
    debug!(file = task.filename, base_size = task.base_size, "fanning out icon");

    DENSITY_BUCKETS.par_iter().try_for_each(|bucket| {
        let folder = res_path.join(bucket.subfolder(task.folder_prefix, task.versioned()));
        fs::create_dir_all(&folder)?;
        let dest = folder.join(task.filename);
        fs::copy(&staging, &dest)?;

        match tool.resize(bucket.target_size(task.base_size), &dest) {
            Ok(()) => {}
            Err(err @ ResizeError::Unavailable(_)) => {
                if context.is_detached() {
                    // Known platform limitation on local machines: the
                    // full-size copy stands in for the scaled asset.
                    if !resize_warned.swap(true, Ordering::Relaxed) {
                        warn!(
                            "failed to resize app icons; the full size icon was copied into \
                             every res subfolder. For best quality, provide downscaled versions"
                        );
                    }
                } else {
                    return Err(IconError::ResizeUnavailable {
                        file: task.filename,
                        source: err,
                    });
                }
            }
            Err(source) => {
                return Err(IconError::Resize {
                    file: task.filename,
                    source,
                });
            }
        }

        match tool.measure(&dest) {
            Some(dims) if !dims.is_square() => Err(IconError::NonSquare {
                file: task.filename,
                width: dims.width,
                height: dims.height,
            }),
            Some(_) => Ok(()),
            None if context.is_detached() => Ok(()),
            None => Err(IconError::DimensionUnavailable {
                file: task.filename,
            }),
        }
    })?;

    // Only reached when no bucket failed fatally; a fatal error above leaves
    // the staging file in place.
    fs::remove_file(&staging)?;
    Ok(())
}
