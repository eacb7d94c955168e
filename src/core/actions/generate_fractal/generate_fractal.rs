use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::viewport::viewport_state::ViewportState;

/// Evaluates `algorithm` at the plane point of every pixel, in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    viewport: &ViewportState,
    size: ImageSize,
    algorithm: &Alg,
) -> Vec<Alg::Output> {
    match generate_fractal_cancelable(viewport, size, algorithm, &NeverCancel) {
        Ok(values) => values,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`generate_fractal`], but checks `cancel` at the start of every row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn generate_fractal_cancelable<Alg, C>(
    viewport: &ViewportState,
    size: ImageSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let mut values = Vec::with_capacity(size.pixel_count());

    for y in 0..size.height {
        for x in 0..size.width {
            if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let c = viewport.pixel_to_plane(f64::from(x), f64::from(y), size);
            values.push(algorithm.compute(c));
        }
    }

    Ok(values)
}
