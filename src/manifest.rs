//! App manifest types.
//!
//! The manifest is externally supplied (an `app.json` for local projects, or
//! the hosted manifest a build service receives) and read-only here. Only the
//! icon-related fields are modeled; everything else in the document is ignored
//! during deserialization.
//!
//! The hosted and local shapes are field-for-field aligned but name their
//! locators differently: hosted manifests carry `iconUrl` / `foregroundImageUrl`
//! style URL fields, local manifests carry `icon` / `foregroundImage` style
//! path fields. Both sets are present as optionals on the same structs;
//! [`crate::resolver`] picks the right set once, based on the run context.

use serde::Deserialize;

/// Icon-related slice of an app manifest.
///
/// Android-scoped fields ([`AndroidManifest`]) override the top-level ones
/// where both exist.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    /// Project-relative icon path (local shape).
    pub icon: Option<String>,
    /// Hosted icon URL (hosted shape).
    pub icon_url: Option<String>,
    pub android: Option<AndroidManifest>,
    pub notification: Option<NotificationManifest>,
}

/// The `android` block of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidManifest {
    pub icon: Option<String>,
    pub icon_url: Option<String>,
    pub adaptive_icon: Option<AdaptiveIconManifest>,
}

/// The `android.adaptiveIcon` block.
///
/// A background image always wins over a background color when both are set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveIconManifest {
    pub foreground_image: Option<String>,
    pub foreground_image_url: Option<String>,
    pub background_image: Option<String>,
    pub background_image_url: Option<String>,
    /// Hex color like `#112233`, used when no background image is given.
    pub background_color: Option<String>,
}

/// The `notification` block. Only the icon fields are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationManifest {
    pub icon: Option<String>,
    pub icon_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_local_manifest() {
        let json = r##"{
            "name": "my-app",
            "icon": "./assets/icon.png",
            "android": {
                "icon": "./assets/android-icon.png",
                "adaptiveIcon": {
                    "foregroundImage": "./assets/fg.png",
                    "backgroundColor": "#112233"
                }
            },
            "notification": {
                "icon": "./assets/notification.png"
            }
        }"##;

        let manifest: AppManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.icon.as_deref(), Some("./assets/icon.png"));
        assert!(manifest.icon_url.is_none());

        let android = manifest.android.unwrap();
        assert_eq!(android.icon.as_deref(), Some("./assets/android-icon.png"));

        let adaptive = android.adaptive_icon.unwrap();
        assert_eq!(adaptive.foreground_image.as_deref(), Some("./assets/fg.png"));
        assert!(adaptive.foreground_image_url.is_none());
        assert_eq!(adaptive.background_color.as_deref(), Some("#112233"));

        let notification = manifest.notification.unwrap();
        assert_eq!(notification.icon.as_deref(), Some("./assets/notification.png"));
    }

    #[test]
    fn parse_hosted_manifest() {
        let json = r##"{
            "iconUrl": "https://cdn.example.com/icon.png",
            "android": {
                "adaptiveIcon": {
                    "foregroundImageUrl": "https://cdn.example.com/fg.png",
                    "backgroundImageUrl": "https://cdn.example.com/bg.png"
                }
            }
        }"##;

        let manifest: AppManifest = serde_json::from_str(json).unwrap();
        assert_eq!(
            manifest.icon_url.as_deref(),
            Some("https://cdn.example.com/icon.png")
        );

        let adaptive = manifest.android.unwrap().adaptive_icon.unwrap();
        assert_eq!(
            adaptive.foreground_image_url.as_deref(),
            Some("https://cdn.example.com/fg.png")
        );
        assert_eq!(
            adaptive.background_image_url.as_deref(),
            Some("https://cdn.example.com/bg.png")
        );
        assert!(adaptive.background_color.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"name": "my-app", "version": "1.0.0", "splash": {"image": "x.png"}}"#;
        let manifest: AppManifest = serde_json::from_str(json).unwrap();
        assert!(manifest.icon.is_none());
        assert!(manifest.android.is_none());
        assert!(manifest.notification.is_none());
    }
}
