use std::sync::Arc;

use eframe::egui;
use image::DynamicImage;

use crate::{Config, CropImage};

mod menu;
mod native;

pub use native::run_native;

/// Minimal host window wiring [`CropImage`] to open, save and reset
/// actions.
pub struct CropApp {
    widget: CropImage,
    /// First image the user opened, restored by the reset action.
    original: Option<Arc<DynamicImage>>,
    status: Option<String>,
}

impl CropApp {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            widget: CropImage::new(config.crop.clone()),
            original: None,
            status: None,
        };
        if let Some(path) = &config.image {
            app.open_path(path);
        }
        app
    }
}

impl eframe::App for CropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.menu(ui);
            self.widget.ui(ui);
        });
    }
}
