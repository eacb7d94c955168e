use std::time::Duration;

use crate::controllers::interactive::ExplorerController;

/// What the overlay panel shows about the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStats {
    pub zoom: f64,
    pub centre_re: f64,
    pub centre_im: f64,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub generation: u64,
    pub last_render: Option<Duration>,
}

impl PanelStats {
    #[must_use]
    pub fn from_controller(controller: &ExplorerController) -> Self {
        let viewport = controller.viewport();
        let size = controller.image_size();
        let centre = viewport.pixel_to_plane(
            f64::from(size.width) / 2.0,
            f64::from(size.height) / 2.0,
            size,
        );

        Self {
            zoom: viewport.zoom(),
            centre_re: centre.real,
            centre_im: centre.imag,
            max_iterations: controller.max_iterations(),
            width: size.width,
            height: size.height,
            generation: controller.generation(),
            last_render: controller.latest_frame().map(|frame| frame.render_duration),
        }
    }
}

/// Draws the overlay panel; returns true when "Reset view" was clicked.
pub fn show_panel(ctx: &egui::Context, stats: &PanelStats) -> bool {
    let mut reset_requested = false;

    egui::Window::new("Mandelbrot")
        .default_pos([10.0, 10.0])
        .default_size([240.0, 180.0])
        .show(ctx, |ui| {
            ui.label(format!("Zoom: {:.3}", stats.zoom));
            ui.label(format!("Centre: {:.6} {:+.6}i", stats.centre_re, stats.centre_im));
            ui.label(format!("Max iterations: {}", stats.max_iterations));

            if ui.button("Reset view").clicked() {
                reset_requested = true;
            }

            ui.separator();
            ui.label(format!("Window size: {}x{}", stats.width, stats.height));
            ui.label(format!("Frame: {}", stats.generation));
            if let Some(render_duration) = stats.last_render {
                ui.label(format!("Last render: {} ms", render_duration.as_millis()));
            }
        });

    reset_requested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

    #[test]
    fn test_stats_for_fresh_controller() {
        let controller = ExplorerController::new(&MandelbrotConfig::default()).unwrap();
        let stats = PanelStats::from_controller(&controller);

        assert_eq!(stats.zoom, 150.0);
        assert_eq!(stats.centre_re, -3.0);
        assert_eq!(stats.centre_im, -1.5);
        assert_eq!(stats.max_iterations, 1000);
        assert_eq!((stats.width, stats.height), (800, 600));
        assert_eq!(stats.generation, 0);
        assert_eq!(stats.last_render, None);
    }
}
