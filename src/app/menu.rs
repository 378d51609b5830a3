use std::path::Path;
use std::sync::Arc;

use eframe::egui;
use image::GenericImageView;
use log::{info, warn};

use super::CropApp;

impl CropApp {
    pub(super) fn menu(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("image", &["png", "jpg", "jpeg", "tif", "tiff"])
                    .pick_file()
                {
                    self.open_path(&path);
                }
            }

            ui.scope(|ui| {
                if !self.widget.has_selection() {
                    ui.disable();
                }
                if ui.button("Save crop…").clicked() {
                    self.save_crop();
                }
            });

            ui.scope(|ui| {
                if self.original.is_none() {
                    ui.disable();
                }
                if ui.button("Reset").clicked() {
                    if let Some(original) = self.original.clone() {
                        self.widget.set_image(original);
                        self.status = Some("Restored original image".into());
                    }
                }
            });

            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
    }

    pub(super) fn open_path(&mut self, path: &Path) {
        match image::open(path) {
            Ok(image) => {
                let (width, height) = image.dimensions();
                info!("loaded {} ({width}x{height})", path.display());
                let image = Arc::new(image);
                self.original = Some(Arc::clone(&image));
                self.widget.set_image(image);
                self.status = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                warn!("failed to load {}: {e}", path.display());
                self.status = Some(format!("Error loading {}: {e}", path.display()));
            }
        }
    }

    fn save_crop(&mut self) {
        let Some(cropped) = self.widget.cropped_region() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("png", &["png"])
            .add_filter("jpeg", &["jpg", "jpeg"])
            .save_file()
        else {
            return;
        };
        match cropped.save(&path) {
            Ok(()) => {
                info!("saved crop to {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
                // Keep working on the cropped result, like the original
                // sample app does.
                self.widget.set_image(Arc::new(cropped));
            }
            Err(e) => {
                warn!("failed to save {}: {e}", path.display());
                self.status = Some(format!("Error saving {}: {e}", path.display()));
            }
        }
    }
}
