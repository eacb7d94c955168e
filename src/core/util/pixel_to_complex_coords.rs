use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;

/// Maps a pixel position onto the complex plane.
///
/// The image centre lands on `centre_offset` and every pixel spans `1 / zoom`
/// plane units. Pixels outside the image are mapped by the same formula, so
/// pointer positions past the edge of the window still resolve to a point.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_x: f64,
    pixel_y: f64,
    size: ImageSize,
    zoom: f64,
    centre_offset: Complex,
) -> Complex {
    let (centre_x, centre_y) = size.centre();

    Complex {
        real: (pixel_x - centre_x) / zoom + centre_offset.real,
        imag: (pixel_y - centre_y) / zoom + centre_offset.imag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_OFFSET: Complex = Complex {
        real: -3.0,
        imag: -1.5,
    };

    #[test]
    fn test_pixel_to_complex_centre() {
        let result =
            pixel_to_complex_coords(400.0, 300.0, ImageSize::new(800, 600), 150.0, DEFAULT_OFFSET);

        assert_eq!(result, DEFAULT_OFFSET);
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let result =
            pixel_to_complex_coords(0.0, 0.0, ImageSize::new(800, 600), 150.0, DEFAULT_OFFSET);

        assert!((result.real - (-400.0 / 150.0 - 3.0)).abs() < 1e-12);
        assert!((result.imag - (-3.5)).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_to_complex_bottom_right() {
        let result =
            pixel_to_complex_coords(800.0, 600.0, ImageSize::new(800, 600), 100.0, Complex::ZERO);

        assert_eq!(result, Complex::new(4.0, 3.0));
    }

    #[test]
    fn test_pixel_outside_image_still_maps() {
        let result =
            pixel_to_complex_coords(-100.0, 700.0, ImageSize::new(200, 200), 100.0, Complex::ZERO);

        assert_eq!(result, Complex::new(-2.0, 6.0));
    }

    #[test]
    fn test_zoom_scales_distance_from_centre() {
        let size = ImageSize::new(100, 100);
        let near = pixel_to_complex_coords(60.0, 50.0, size, 10.0, Complex::ZERO);
        let far = pixel_to_complex_coords(60.0, 50.0, size, 5.0, Complex::ZERO);

        assert_eq!(near.real, 1.0);
        assert_eq!(far.real, 2.0);
        assert_eq!(near.imag, 0.0);
    }
}
