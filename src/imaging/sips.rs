//! Production image tool: `sips` for resizing, the `image` crate for
//! measurement.
//!
//! `sips` ships with macOS, where both the build hosts and most detach users
//! run. `-Z` resamples so the longest edge matches the target, preserving
//! aspect ratio; for the square icons this pipeline handles that is an exact
//! fit. A missing binary surfaces as [`ResizeError::Unavailable`] so the
//! caller's context decides whether that aborts the run.
//!
//! Measurement only needs the image header, so it stays in-process via
//! `image::image_dimensions` and never depends on the OS tool.

use super::tool::{Dimensions, ImageTool, ResizeError};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

pub struct SipsTool;

impl SipsTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SipsTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageTool for SipsTool {
    fn resize(&self, size: u32, path: &Path) -> Result<(), ResizeError> {
        let output = Command::new("sips")
            .arg("-Z")
            .arg(size.to_string())
            .arg(path)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => ResizeError::Unavailable(err),
                _ => ResizeError::Io(err),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResizeError::Failed(format!(
                "sips exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn measure(&self, path: &Path) -> Option<Dimensions> {
        let (width, height) = image::image_dimensions(path).ok()?;
        Some(Dimensions { width, height })
    }
}
