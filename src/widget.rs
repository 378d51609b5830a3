use std::sync::Arc;

use eframe::egui::{
    self, Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, TextureHandle, TextureOptions,
};
use image::DynamicImage;
use log::warn;

use crate::{
    check_texture_size, cropped_region, to_color_image, Corner, CropSettings, CursorHint,
    SelectRect, SelectionArea,
};

/// Image display widget with mouse-driven rectangular crop selection.
///
/// The image is drawn centered and unscaled inside the available area. A
/// drag on empty space starts a selection, a drag inside an existing
/// selection moves it, a drag on one of its corners resizes it, and a click
/// outside clears it. [`CropImage::cropped_region`] extracts the selected
/// pixels.
pub struct CropImage {
    image: Option<Arc<DynamicImage>>,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    texture_error: Option<String>,
    selection: SelectionArea,
    settings: CropSettings,
    /// Size of the area the image was last rendered into, used to map
    /// widget-local selection coordinates into image coordinates.
    widget_size: (u32, u32),
}

impl CropImage {
    pub fn new(settings: CropSettings) -> Self {
        Self {
            image: None,
            texture: None,
            texture_dirty: false,
            texture_error: None,
            selection: SelectionArea::new(settings.corner_margin),
            settings,
            widget_size: (0, 0),
        }
    }

    /// Replace the displayed image.
    ///
    /// Any previous selection referred to the old image's coordinates, so
    /// it is cleared in the same step.
    pub fn set_image(&mut self, image: Arc<DynamicImage>) {
        self.image = Some(image);
        self.selection.clear();
        self.texture_dirty = true;
        self.texture_error = None;
    }

    pub fn image(&self) -> Option<&Arc<DynamicImage>> {
        self.image.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.rect().is_some()
    }

    /// Selection overlay to paint; only shown while an image is displayed.
    fn overlay_rect(&self) -> Option<SelectRect> {
        self.image.as_ref()?;
        self.selection.rect()
    }

    /// Pixels inside the current selection, mapped into image coordinates
    /// and clamped to the image bounds. `None` while no image is loaded or
    /// no selection is present.
    pub fn cropped_region(&self) -> Option<DynamicImage> {
        let image = self.image.as_deref()?;
        let rect = self.selection.rect()?;
        cropped_region(image, rect, self.widget_size)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let widget_rect = response.rect;
        self.widget_size = (widget_rect.width() as u32, widget_rect.height() as u32);

        if self.texture_dirty {
            self.upload_texture(ui.ctx());
        }

        let painter = painter.with_clip_rect(widget_rect);
        if let Some(texture) = &self.texture {
            let image_rect = Rect::from_center_size(widget_rect.center(), texture.size_vec2());
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        } else if let Some(error) = &self.texture_error {
            painter.text(
                widget_rect.center(),
                Align2::CENTER_CENTER,
                error,
                FontId::proportional(16.0),
                ui.visuals().error_fg_color,
            );
        }

        self.handle_pointer(ui, &response);

        if let Some(rect) = self.overlay_rect() {
            let [r, g, b, a] = self.settings.overlay_tint;
            painter.rect_filled(
                Rect::from_min_size(
                    widget_rect.min + egui::vec2(rect.x as f32, rect.y as f32),
                    egui::vec2(rect.width as f32, rect.height as f32),
                ),
                0.0,
                Color32::from_rgba_unmultiplied(r, g, b, a),
            );
        }

        response
    }

    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let origin = response.rect.min;
        let pointer = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos());
        if let Some(pos) = pointer {
            let local = ((pos.x - origin.x) as i32, (pos.y - origin.y) as i32);

            if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
                if self.selection.pointer_down(local) {
                    ui.ctx().request_repaint();
                }
            }

            let primary_down = ui.input(|i| i.pointer.primary_down());
            let outcome = self.selection.pointer_move(local, primary_down);
            if outcome.repaint {
                ui.ctx().request_repaint();
            }
            ui.ctx().set_cursor_icon(cursor_icon(outcome.hint));
        }

        if ui.input(|i| i.pointer.primary_released()) {
            self.selection.pointer_up();
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        self.texture_dirty = false;
        self.texture = None;
        let Some(image) = self.image.as_deref() else {
            return;
        };
        let max_texture_side = ctx.input(|i| i.max_texture_side);
        match check_texture_size(image, max_texture_side) {
            Ok(()) => {
                self.texture = Some(ctx.load_texture(
                    "croppable-image",
                    to_color_image(image),
                    TextureOptions {
                        magnification: egui::TextureFilter::Nearest,
                        ..Default::default()
                    },
                ));
            }
            Err(e) => {
                warn!("{e}");
                self.texture_error = Some(e.to_string());
            }
        }
    }
}

fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Default => CursorIcon::Default,
        CursorHint::Draggable => CursorIcon::Grab,
        CursorHint::Resize(Corner::NorthEast) => CursorIcon::ResizeNorthEast,
        CursorHint::Resize(Corner::NorthWest) => CursorIcon::ResizeNorthWest,
        CursorHint::Resize(Corner::SouthEast) => CursorIcon::ResizeSouthEast,
        CursorHint::Resize(Corner::SouthWest) => CursorIcon::ResizeSouthWest,
    }
}

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgba, RgbaImage};

    use super::*;

    fn widget_with_image() -> CropImage {
        let mut widget = CropImage::new(CropSettings::default());
        widget.set_image(Arc::new(DynamicImage::ImageRgba8(RgbaImage::from_fn(
            200,
            200,
            |x, y| Rgba([x as u8, y as u8, 0, 255]),
        ))));
        widget.widget_size = (200, 200);
        widget
    }

    #[test]
    fn set_image_clears_selection_mid_gesture() {
        let mut widget = widget_with_image();
        widget.selection.pointer_down((10, 10));
        widget.selection.pointer_move((90, 90), true);
        assert!(widget.has_selection());

        widget.set_image(Arc::new(DynamicImage::ImageRgba8(RgbaImage::new(50, 50))));
        assert!(!widget.has_selection());
        assert!(widget.cropped_region().is_none());
    }

    #[test]
    fn overlay_hidden_without_image() {
        let mut widget = CropImage::new(CropSettings::default());
        widget.selection.pointer_down((10, 10));
        widget.selection.pointer_move((90, 90), true);
        assert!(widget.has_selection());
        assert_eq!(widget.overlay_rect(), None);

        let mut widget = widget_with_image();
        widget.selection.pointer_down((10, 10));
        widget.selection.pointer_move((90, 90), true);
        assert_eq!(widget.overlay_rect(), Some(SelectRect::new(10, 10, 80, 80)));
    }

    #[test]
    fn cropped_region_none_without_image() {
        let mut widget = CropImage::new(CropSettings::default());
        widget.selection.pointer_down((10, 10));
        widget.selection.pointer_move((60, 60), true);
        assert!(widget.cropped_region().is_none());
    }

    #[test]
    fn cropped_region_uses_current_selection() {
        let mut widget = widget_with_image();
        widget.selection.pointer_down((10, 10));
        widget.selection.pointer_move((60, 60), true);
        widget.selection.pointer_up();

        assert_eq!(widget.selection.rect(), Some(SelectRect::new(10, 10, 50, 50)));
        let region = widget.cropped_region().unwrap();
        assert_eq!(region.dimensions(), (50, 50));
        assert_eq!(region.get_pixel(0, 0), Rgba([10, 10, 0, 255]));
    }
}
