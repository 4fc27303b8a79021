//! Run context: strict service builds vs. best-effort local runs.
//!
//! The same pipeline runs in two places. A build service generates icons on a
//! host that is guaranteed to have the platform resize tool, so any failure
//! there indicates a real problem and must abort the build. A developer running
//! the detach flow locally may be on an OS without the tool, and the pipeline
//! degrades gracefully instead of failing their whole project setup.

use std::path::{Path, PathBuf};

/// Where the pipeline is running, and with what guarantees.
#[derive(Debug, Clone)]
pub enum RunContext {
    /// Strict build-service run. Manifests carry hosted URLs; platform
    /// limitations are fatal.
    Service,
    /// Best-effort local run. Manifests carry project-relative paths, resolved
    /// against `project_root`; known platform limitations degrade gracefully.
    Detached { project_root: PathBuf },
}

impl RunContext {
    pub fn is_detached(&self) -> bool {
        matches!(self, RunContext::Detached { .. })
    }

    /// Project root for resolving local icon paths. `None` under [`Service`](RunContext::Service).
    pub fn project_root(&self) -> Option<&Path> {
        match self {
            RunContext::Service => None,
            RunContext::Detached { project_root } => Some(project_root),
        }
    }
}
