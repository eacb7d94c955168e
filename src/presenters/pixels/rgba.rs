use crate::core::data::colour_grid::ColourGrid;

/// Copies the RGB grid into an RGBA framebuffer with opaque alpha.
///
/// Returns false, leaving `dst` untouched, if `dst` does not hold exactly one RGBA pixel per grid pixel.
pub fn copy_grid_to_rgba(grid: &ColourGrid, dst: &mut [u8]) -> bool {
    if dst.len() != grid.size().pixel_count() * 4 {
        return false;
    }

    for (src_pixel, dst_pixel) in grid.buffer().chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    true
}

/// Fills an RGBA framebuffer with opaque black.
pub fn clear_rgba(dst: &mut [u8]) {
    for pixel in dst.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0, 0, 0, 255]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::image_size::ImageSize;

    #[test]
    fn test_copy_known_values() {
        let mut grid = ColourGrid::new(ImageSize::new(2, 2));
        grid.set_pixel(0, 0, Colour::new(255, 0, 0)).unwrap();
        grid.set_pixel(1, 0, Colour::new(0, 255, 0)).unwrap();
        grid.set_pixel(0, 1, Colour::new(0, 0, 255)).unwrap();
        grid.set_pixel(1, 1, Colour::new(255, 255, 255)).unwrap();
        let mut dst = vec![0; 16];

        assert!(copy_grid_to_rgba(&grid, &mut dst));
        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let grid = ColourGrid::new(ImageSize::new(2, 2));
        let mut dst = vec![7; 12];

        assert!(!copy_grid_to_rgba(&grid, &mut dst));
        assert_eq!(dst, vec![7; 12]);
    }

    #[test]
    fn test_clear_is_opaque_black() {
        let mut dst = vec![9; 8];
        clear_rgba(&mut dst);

        assert_eq!(dst, vec![0, 0, 0, 255, 0, 0, 0, 255]);
    }
}
