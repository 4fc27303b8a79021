//! Image tool trait and shared types.
//!
//! The production implementation is [`SipsTool`](super::sips::SipsTool). Tests
//! use [`tests::MockTool`], which records operations instead of executing them.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    /// The platform lacks the resize tool entirely. This is the one failure
    /// the pipeline may recover from, depending on context.
    #[error("resize tool not available on this platform: {0}")]
    Unavailable(#[source] std::io::Error),
    #[error("resize failed: {0}")]
    Failed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a measure operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Trait for image tools.
///
/// `Sync` so a single tool can serve rayon's parallel bucket fan-out.
pub trait ImageTool: Sync {
    /// Scale the image at `path` in place so its longest edge is `size` px.
    fn resize(&self, size: u32, path: &Path) -> Result<(), ResizeError>;

    /// Read the image's pixel dimensions. `None` means the dimensions could
    /// not be determined.
    fn measure(&self, path: &Path) -> Option<Dimensions>;
}
