//! Icon pipeline orchestration.
//!
//! Entry point for generating the full icon resource tree from a manifest:
//! decides between true adaptive icons and legacy-only fallback, sweeps the
//! previous run's artifacts before regenerating each icon family, fans every
//! requested icon out across the density buckets, and binds the adaptive
//! background in the generated XML.
//!
//! ## Generation order
//!
//! 1. Legacy launcher icon (base 48, `mipmap-<dpi>`), preceded by removal of
//!    stale launcher files.
//! 2. Adaptive foreground (base 108, `mipmap-<dpi>-v26`) when requested;
//!    otherwise every versioned folder is cleared so Android 8+ falls back to
//!    the legacy icon instead of the OS's poor auto-coercion.
//! 3. Adaptive background: an image fans out like the foreground and the
//!    launcher XML in every versioned folder is rewritten to reference it; a
//!    bare color is patched into the shared `values/colors.xml` instead. An
//!    image always wins over a color.
//! 4. Notification icon (base 24, `drawable-<dpi>`), falling back to the
//!    legacy icon source when the manifest names none.
//!
//! Cleanup of the opposite icon family always precedes generation, so editing
//! a manifest between legacy-only and adaptive leaves no orphaned resources.
//! Background binding follows background generation, so the XML reference
//! target already exists on disk when patched.
//!
//! ## Failure policy
//!
//! One failure class is context-dependent: the platform resize tool being
//! absent. Detached runs log it once and keep the full-size copies; service
//! runs fail. Unmeasurable dimensions are tolerated in detached runs only.
//! Everything else (fetch or copy failures, non-square icons, unwritable XML)
//! is fatal everywhere and carries the offending filename and cause. Nothing
//! is retried; callers wanting retries wrap the whole pipeline.

use crate::context::RunContext;
use crate::density::ADAPTIVE_BASE_SIZE;
use crate::fanout::{IconTask, fan_out};
use crate::fetch::SaveError;
use crate::imaging::{ImageTool, ResizeError, SipsTool};
use crate::manifest::AppManifest;
use crate::resolver::IconSources;
use crate::sweep;
use crate::xml::{self, PatchError};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use thiserror::Error;

pub const LAUNCHER_ICON: &str = "ic_launcher.png";
pub const FOREGROUND_ICON: &str = "ic_foreground.png";
pub const BACKGROUND_ICON: &str = "ic_background.png";
pub const NOTIFICATION_ICON: &str = "shell_notification_icon.png";

const LAUNCHER_BASE_SIZE: u32 = 48;
const NOTIFICATION_BASE_SIZE: u32 = 24;

const MIPMAP_PREFIX: &str = "mipmap-";
const DRAWABLE_PREFIX: &str = "drawable-";

/// Placeholder the Android template binds the adaptive background to, and the
/// mipmap reference it is rewritten to once a background image is generated.
const BACKGROUND_PLACEHOLDER: &str = "@color/iconBackground";
const BACKGROUND_MIPMAP: &str = "@mipmap/ic_background";
/// Default entry in the template's `values/colors.xml`.
const DEFAULT_BACKGROUND_COLOR: &str = "\"iconBackground\">#FFFFFF";

#[derive(Error, Debug)]
pub enum IconError {
    #[error("failed to save icon file {file} to disk: {source}")]
    Save {
        file: &'static str,
        #[source]
        source: SaveError,
    },
    #[error("resize tool unavailable, cannot scale {file}: {source}")]
    ResizeUnavailable {
        file: &'static str,
        #[source]
        source: ResizeError,
    },
    #[error("failed to resize {file}: {source}")]
    Resize {
        file: &'static str,
        #[source]
        source: ResizeError,
    },
    #[error("unable to read the dimensions of {file}")]
    DimensionUnavailable { file: &'static str },
    #[error("android icons must be square, {file} is {width}x{height}")]
    NonSquare {
        file: &'static str,
        width: u32,
        height: u32,
    },
    #[error("XML patch failed: {0}")]
    XmlWrite(#[from] PatchError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generate the full icon resource tree under `res_path` using the platform
/// image tool.
pub fn write_icons(
    manifest: &AppManifest,
    context: &RunContext,
    res_path: &Path,
) -> Result<(), IconError> {
    write_icons_with(&SipsTool::new(), manifest, context, res_path)
}

/// Generate icons using a specific image tool (allows testing with a mock).
pub fn write_icons_with(
    tool: &impl ImageTool,
    manifest: &AppManifest,
    context: &RunContext,
    res_path: &Path,
) -> Result<(), IconError> {
    let sources = IconSources::resolve(manifest, context);
    // One warning per run, shared across every fan-out below.
    let resize_warned = AtomicBool::new(false);

    // Android 7 and below launcher icon
    if let Some(legacy) = &sources.legacy {
        sweep::remove_files_named(res_path, LAUNCHER_ICON)?;
        fan_out(
            tool,
            &IconTask {
                source: legacy,
                base_size: LAUNCHER_BASE_SIZE,
                filename: LAUNCHER_ICON,
                folder_prefix: MIPMAP_PREFIX,
            },
            context,
            res_path,
            &resize_warned,
        )?;
    }

    if let Some(foreground) = &sources.foreground {
        sweep::remove_files_named(res_path, FOREGROUND_ICON)?;
        fan_out(
            tool,
            &IconTask {
                source: foreground,
                base_size: ADAPTIVE_BASE_SIZE,
                filename: FOREGROUND_ICON,
                folder_prefix: MIPMAP_PREFIX,
            },
            context,
            res_path,
            &resize_warned,
        )?;
    } else {
        // No foreground means no adaptive icon this run. Android 8+ must fall
        // back to the legacy icon, so stale versioned folders cannot survive.
        sweep::clear_versioned_dirs(res_path)?;
    }

    // Adaptive background: image wins over color
    if let Some(background) = &sources.background_image {
        fan_out(
            tool,
            &IconTask {
                source: background,
                base_size: ADAPTIVE_BASE_SIZE,
                filename: BACKGROUND_ICON,
                folder_prefix: MIPMAP_PREFIX,
            },
            context,
            res_path,
            &resize_warned,
        )?;
        xml::patch_res_subfolders(
            BACKGROUND_PLACEHOLDER,
            BACKGROUND_MIPMAP,
            res_path,
            MIPMAP_PREFIX,
            "-v26",
            "ic_launcher.xml",
        )?;
    } else if let Some(color) = &sources.background_color {
        xml::replace_in_file(
            DEFAULT_BACKGROUND_COLOR,
            &format!("\"iconBackground\">{color}"),
            &res_path.join("values").join("colors.xml"),
        )?;
    }

    // Notification icon, falling back to the launcher icon source
    sweep::remove_files_named(res_path, NOTIFICATION_ICON)?;
    if let Some(notification) = sources.notification.as_ref().or(sources.legacy.as_ref()) {
        fan_out(
            tool,
            &IconTask {
                source: notification,
                base_size: NOTIFICATION_BASE_SIZE,
                filename: NOTIFICATION_ICON,
                folder_prefix: DRAWABLE_PREFIX,
            },
            context,
            res_path,
            &resize_warned,
        )?;
    }

    Ok(())
}
