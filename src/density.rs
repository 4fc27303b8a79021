//! Density buckets and resource subfolder naming.
//!
//! Android picks an asset for the device's pixel density from a fixed set of
//! scale tiers. Each bucket maps to a resource subfolder (`mipmap-xhdpi`,
//! `drawable-hdpi`, ...); adaptive icon assets additionally live in `-v26`
//! suffixed folders, which only Android 8+ reads.

/// Base size (in px at mdpi) of adaptive icon layers. Any fan-out at this base
/// size lands in version-gated `-v26` folders.
pub const ADAPTIVE_BASE_SIZE: u32 = 108;

/// One density tier: folder suffix plus the scale applied to an icon's base
/// (mdpi) size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBucket {
    pub suffix: &'static str,
    pub scale: f32,
}

/// The five standard buckets, smallest to largest scale.
pub const DENSITY_BUCKETS: [DensityBucket; 5] = [
    DensityBucket { suffix: "mdpi", scale: 1.0 },
    DensityBucket { suffix: "hdpi", scale: 1.5 },
    DensityBucket { suffix: "xhdpi", scale: 2.0 },
    DensityBucket { suffix: "xxhdpi", scale: 3.0 },
    DensityBucket { suffix: "xxxhdpi", scale: 4.0 },
];

impl DensityBucket {
    /// Resource subfolder name for this bucket, e.g. `mipmap-xhdpi` or
    /// `mipmap-xhdpi-v26` when `versioned`.
    pub fn subfolder(&self, prefix: &str, versioned: bool) -> String {
        let gate = if versioned { "-v26" } else { "" };
        format!("{prefix}{}{gate}", self.suffix)
    }

    /// Pixel size of an icon in this bucket, given its base (mdpi) size.
    pub fn target_size(&self, base_size: u32) -> u32 {
        (base_size as f32 * self.scale).round() as u32
    }
}
