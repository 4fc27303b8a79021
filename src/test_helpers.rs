//! Shared test utilities for the mipgen test suite.
//!
//! Provides a temp-dir project fixture (project root + res tree + source
//! images), manifest builders for the common icon configurations, and a
//! one-shot loopback HTTP server for hosted-manifest tests.

use crate::context::RunContext;
use crate::manifest::{AdaptiveIconManifest, AndroidManifest, AppManifest, NotificationManifest};
use crate::resolver::IconSource;
use std::fs;
use std::io::Write as _;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// A 1x1 transparent RGBA PNG, the smallest measurable fixture.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR, 1x1, 8-bit RGBA
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15,
    0xC4, 0x89, //
    0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, //
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND
];

pub const ALL_DPIS: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

/// Temp project: `assets/` with the usual source icons, plus an empty `res/`
/// tree. Dropped with the test.
pub struct Fixture {
    pub tmp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        for name in ["icon.png", "fg.png", "bg.png", "notif.png"] {
            fs::write(assets.join(name), TINY_PNG).unwrap();
        }
        fs::create_dir_all(tmp.path().join("res")).unwrap();
        Self { tmp }
    }

    pub fn res(&self) -> PathBuf {
        self.tmp.path().join("res")
    }

    pub fn context(&self) -> RunContext {
        RunContext::Detached {
            project_root: self.tmp.path().to_path_buf(),
        }
    }

    /// A `Local` source as the resolver would have produced it.
    pub fn local_source(&self, relative: &str) -> IconSource {
        IconSource::Local(self.tmp.path().join(relative))
    }

    /// Directory names of every `mipmap-*-v26` folder currently in the res tree.
    pub fn versioned_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = walkdir::WalkDir::new(self.res())
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_dir())
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .filter(|name| name.starts_with("mipmap-") && name.ends_with("-v26"))
            .collect();
        dirs.sort();
        dirs
    }
}

// =========================================================================
// Manifest builders
// =========================================================================

/// Local-shape manifest naming only the legacy icon.
pub fn legacy_manifest() -> AppManifest {
    AppManifest {
        icon: Some("assets/icon.png".into()),
        ..Default::default()
    }
}

/// Local-shape manifest with an adaptive icon block.
pub fn adaptive_manifest(
    foreground: bool,
    background_image: bool,
    background_color: Option<&str>,
) -> AppManifest {
    AppManifest {
        icon: Some("assets/icon.png".into()),
        android: Some(AndroidManifest {
            adaptive_icon: Some(AdaptiveIconManifest {
                foreground_image: foreground.then(|| "assets/fg.png".into()),
                background_image: background_image.then(|| "assets/bg.png".into()),
                background_color: background_color.map(String::from),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Manifest naming only a notification icon.
pub fn notification_only_manifest() -> AppManifest {
    AppManifest {
        notification: Some(NotificationManifest {
            icon: Some("assets/notif.png".into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// =========================================================================
// Hosted-manifest support
// =========================================================================

/// Spawn a loopback HTTP server that answers up to `hits` requests with a
/// tiny PNG body, returning a URL for it. The serving thread exits after the
/// last hit or when the test process ends.
pub fn hosted_png_url(hits: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        for _ in 0..hits {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut buf = [0u8; 1024];
            let _ = std::io::Read::read(&mut stream, &mut buf);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                TINY_PNG.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(TINY_PNG);
        }
    });
    format!("http://{addr}/icon.png")
}
