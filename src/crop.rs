use image::{DynamicImage, GenericImageView};

use crate::SelectRect;

/// Extract the pixels inside `selection` as an independently-owned image.
///
/// `selection` is in widget-local coordinates; `widget_size` is the size of
/// the area the image was rendered into. The image is drawn centered and
/// unscaled, so the rendering origin (half the size difference per axis,
/// negative when the image overflows the widget) is subtracted to map into
/// image coordinates. The mapped rectangle is clamped to the image bounds;
/// a selection entirely outside the image yields `None`, as does an absent
/// selection.
pub fn cropped_region(
    image: &DynamicImage,
    selection: SelectRect,
    widget_size: (u32, u32),
) -> Option<DynamicImage> {
    if !selection.is_present() {
        return None;
    }

    let (img_w, img_h) = image.dimensions();
    let mut rect = selection;

    let dx = widget_size.0 as i32 - img_w as i32;
    let dy = widget_size.1 as i32 - img_h as i32;
    rect.x -= dx / 2;
    rect.y -= dy / 2;

    let bounds = SelectRect::new(0, 0, img_w as i32, img_h as i32);
    let rect = rect.intersect(&bounds)?;

    Some(image.crop_imm(
        rect.x as u32,
        rect.y as u32,
        rect.width as u32,
        rect.height as u32,
    ))
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    /// 200x200 gradient so every pixel encodes its own coordinates.
    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(200, 200, |x, y| {
            Rgba([x as u8, y as u8, 0, 255])
        }))
    }

    #[test]
    fn absent_selection_yields_none() {
        let image = test_image();
        assert!(cropped_region(&image, SelectRect::default(), (200, 200)).is_none());
        assert!(cropped_region(&image, SelectRect::new(10, 10, 0, 50), (200, 200)).is_none());
    }

    #[test]
    fn crop_without_offset_matches_selection_exactly() {
        let image = test_image();
        let region = cropped_region(&image, SelectRect::new(10, 10, 50, 50), (200, 200)).unwrap();
        assert_eq!(region.dimensions(), (50, 50));
        assert_eq!(region.get_pixel(0, 0), image.get_pixel(10, 10));
        assert_eq!(region.get_pixel(49, 49), image.get_pixel(59, 59));
    }

    #[test]
    fn letterbox_offset_is_subtracted_per_axis() {
        let image = test_image();
        // Widget 300x260 around a 200x200 image: origin at (50, 30).
        let region = cropped_region(&image, SelectRect::new(60, 40, 50, 50), (300, 260)).unwrap();
        assert_eq!(region.dimensions(), (50, 50));
        assert_eq!(region.get_pixel(0, 0), image.get_pixel(10, 10));
    }

    #[test]
    fn widget_smaller_than_image_maps_into_image_coords() {
        let image = test_image();
        // 100x100 widget over a 200x200 image: rendering origin at (-50, -50).
        let region = cropped_region(&image, SelectRect::new(10, 10, 50, 50), (100, 100)).unwrap();
        assert_eq!(region.dimensions(), (50, 50));
        assert_eq!(region.get_pixel(0, 0), image.get_pixel(60, 60));
    }

    #[test]
    fn out_of_bounds_selection_is_clamped() {
        let image = test_image();
        let region = cropped_region(&image, SelectRect::new(180, 180, 50, 50), (200, 200)).unwrap();
        assert_eq!(region.dimensions(), (20, 20));
        assert_eq!(region.get_pixel(0, 0), image.get_pixel(180, 180));
    }

    #[test]
    fn selection_fully_outside_yields_none() {
        let image = test_image();
        assert!(cropped_region(&image, SelectRect::new(250, 250, 50, 50), (200, 200)).is_none());
    }

    #[test]
    fn result_does_not_alias_the_source() {
        let mut image = test_image();
        let region = cropped_region(&image, SelectRect::new(10, 10, 50, 50), (200, 200)).unwrap();
        if let DynamicImage::ImageRgba8(buffer) = &mut image {
            buffer.put_pixel(10, 10, Rgba([255, 255, 255, 255]));
        }
        assert_eq!(region.get_pixel(0, 0), Rgba([10, 10, 0, 255]));
    }
}
