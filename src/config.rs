use std::path::PathBuf;

use eframe::egui::Vec2;

/// Widget behavior knobs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CropSettings {
    /// Half-size of the corner hit zones, in widget pixels, per axis.
    pub corner_margin: (i32, i32),
    /// RGBA tint painted over the selection rectangle.
    pub overlay_tint: [u8; 4],
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            corner_margin: (20, 20),
            overlay_tint: [72, 145, 220, 128],
        }
    }
}

/// Application configuration, read from an optional `config.json` next to
/// the executable.
#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: Vec2,
    /// Image to load on startup. Overridden by the first CLI argument.
    pub image: Option<PathBuf>,
    pub crop: CropSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: [800.0, 800.0].into(),
            image: None,
            crop: CropSettings::default(),
        }
    }
}
