use eframe::egui::ColorImage;
use image::{DynamicImage, GenericImageView};

/// Convert a decoded image into an egui texture source.
pub fn to_color_image(image: &DynamicImage) -> ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Check an image against the backend's texture size limit before upload.
pub fn check_texture_size(
    image: &DynamicImage,
    max_texture_side: usize,
) -> Result<(), TextureExceedsLimit> {
    let (width, height) = image.dimensions();
    if width as usize > max_texture_side || height as usize > max_texture_side {
        return Err(TextureExceedsLimit {
            width,
            height,
            max_texture_side,
        });
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
#[error(
    "Image too large: {}x{}, max texture side is {}",
    width,
    height,
    max_texture_side
)]
pub struct TextureExceedsLimit {
    width: u32,
    height: u32,
    max_texture_side: usize,
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn color_image_keeps_dimensions_and_pixels() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            4,
            3,
            Rgba([10, 20, 30, 255]),
        ));
        let color_image = to_color_image(&image);
        assert_eq!(color_image.size, [4, 3]);
        assert_eq!(
            color_image.pixels[0],
            eframe::egui::Color32::from_rgba_unmultiplied(10, 20, 30, 255)
        );
    }

    #[test]
    fn oversized_image_is_rejected() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(64, 8));
        assert!(check_texture_size(&image, 64).is_ok());
        let err = check_texture_size(&image, 32).unwrap_err();
        assert!(err.to_string().contains("max texture side is 32"));
    }
}
