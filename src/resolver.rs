//! Manifest normalization: one source locator per logical icon.
//!
//! The two manifest shapes (hosted URLs vs. local paths) are semantically
//! aligned field-for-field, so the rest of the pipeline never wants to know
//! which shape it got. [`IconSources::resolve`] reads the right field set once,
//! based on the run context, and hands back tagged [`IconSource`] locators.
//! Local paths are joined against the project root here, so downstream code
//! only ever sees absolute paths or URLs.
//!
//! Resolution is a pure function of its inputs: no I/O, no error conditions.
//! An icon the manifest does not request resolves to `None`.

use crate::context::RunContext;
use crate::manifest::AppManifest;
use std::path::PathBuf;

/// A concrete locator for one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Hosted image, fetched over HTTP.
    Remote(String),
    /// Local image, already resolved against the project root.
    Local(PathBuf),
}

/// Resolved source locators for every icon the manifest requests.
#[derive(Debug, Clone, Default)]
pub struct IconSources {
    /// Legacy launcher icon (Android 7 and below, and adaptive fallback).
    pub legacy: Option<IconSource>,
    /// Adaptive icon foreground layer.
    pub foreground: Option<IconSource>,
    /// Adaptive icon background layer, as an image.
    pub background_image: Option<IconSource>,
    /// Adaptive icon background, as a literal color. Only used when
    /// `background_image` is absent.
    pub background_color: Option<String>,
    /// Status bar notification icon.
    pub notification: Option<IconSource>,
}

impl IconSources {
    /// Extract source locators from `manifest` for the given context.
    ///
    /// Android-scoped fields win over top-level ones for the legacy and
    /// notification icons. Adaptive fields are only read when the
    /// `adaptiveIcon` block is present.
    pub fn resolve(manifest: &AppManifest, context: &RunContext) -> Self {
        let android = manifest.android.as_ref();
        let adaptive = android.and_then(|a| a.adaptive_icon.as_ref());
        let notification = manifest.notification.as_ref();

        let source = |field: Option<&String>| -> Option<IconSource> {
            let value = field?;
            Some(match context {
                RunContext::Service => IconSource::Remote(value.clone()),
                RunContext::Detached { project_root } => {
                    IconSource::Local(project_root.join(value))
                }
            })
        };

        match context {
            RunContext::Service => Self {
                legacy: source(
                    android
                        .and_then(|a| a.icon_url.as_ref())
                        .or(manifest.icon_url.as_ref()),
                ),
                foreground: source(adaptive.and_then(|a| a.foreground_image_url.as_ref())),
                background_image: source(adaptive.and_then(|a| a.background_image_url.as_ref())),
                background_color: adaptive.and_then(|a| a.background_color.clone()),
                notification: source(notification.and_then(|n| n.icon_url.as_ref())),
            },
            RunContext::Detached { .. } => Self {
                legacy: source(
                    android
                        .and_then(|a| a.icon.as_ref())
                        .or(manifest.icon.as_ref()),
                ),
                foreground: source(adaptive.and_then(|a| a.foreground_image.as_ref())),
                background_image: source(adaptive.and_then(|a| a.background_image.as_ref())),
                background_color: adaptive.and_then(|a| a.background_color.clone()),
                notification: source(notification.and_then(|n| n.icon.as_ref())),
            },
        }
    }
}
