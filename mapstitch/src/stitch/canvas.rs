//! Output canvas that tiles are composited into.

use image::{imageops, DynamicImage, RgbImage};
use tracing::warn;

use crate::grid::TileSpec;

/// RGB raster the size of the whole bounding box, in device pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Crops the logo band off `tile` and pastes the visible part at the
    /// tile's offset. Anything past the canvas edge is clipped.
    pub fn paste(&mut self, tile: &DynamicImage, spec: &TileSpec) {
        let width = spec.visible_width.min(tile.width());
        let height = spec.visible_height.min(tile.height());

        if width < spec.visible_width || height < spec.visible_height {
            warn!(
                col = spec.col,
                row = spec.row,
                expected_width = spec.visible_width,
                expected_height = spec.visible_height,
                actual_width = tile.width(),
                actual_height = tile.height(),
                "Tile smaller than requested, pasting what is available"
            );
        }

        let visible = tile.crop_imm(0, 0, width, height).to_rgb8();
        imageops::replace(
            &mut self.image,
            &visible,
            spec.offset_x as i64,
            spec.offset_y as i64,
        );
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;
    use crate::grid::TileRequest;
    use image::Rgb;

    fn spec(col: u32, row: u32, size: u32) -> TileSpec {
        TileSpec {
            col,
            row,
            request: TileRequest {
                center: GeoPoint::new(0.0, 0.0),
                zoom: 10,
                width: size,
                height: size + 4,
                scale: 1,
            },
            offset_x: col * size,
            offset_y: row * size,
            visible_width: size,
            visible_height: size,
        }
    }

    /// Tile of `size` × `size + band` with a red body and a blue logo band.
    fn banded_tile(size: u32, band: u32) -> DynamicImage {
        let img = RgbImage::from_fn(size, size + band, |_, y| {
            if y < size {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_logo_band_is_cropped() {
        let mut canvas = Canvas::new(20, 20);
        canvas.paste(&banded_tile(10, 4), &spec(0, 0, 10));
        canvas.paste(&banded_tile(10, 4), &spec(0, 1, 10));

        let image = canvas.into_image();
        for y in 0..20 {
            assert_eq!(*image.get_pixel(5, y), Rgb([255, 0, 0]), "row {}", y);
        }
        assert!(image.pixels().all(|p| *p != Rgb([0, 0, 255])));
    }

    #[test]
    fn test_paste_at_offset() {
        let mut canvas = Canvas::new(20, 20);
        canvas.paste(&banded_tile(10, 4), &spec(1, 0, 10));

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(15, 5), Rgb([255, 0, 0]));
        assert_eq!(*image.get_pixel(5, 5), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(15, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_overhanging_tile_is_clipped() {
        let mut canvas = Canvas::new(15, 15);
        canvas.paste(&banded_tile(10, 4), &spec(1, 1, 10));
        assert_eq!(canvas.dimensions(), (15, 15));
        assert_eq!(*canvas.into_image().get_pixel(14, 14), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_short_tile_is_pasted_partially() {
        let mut canvas = Canvas::new(10, 10);
        let short = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 6, Rgb([0, 255, 0])));
        canvas.paste(&short, &spec(0, 0, 10));

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(0, 5), Rgb([0, 255, 0]));
        assert_eq!(*image.get_pixel(0, 6), Rgb([0, 0, 0]));
    }
}
