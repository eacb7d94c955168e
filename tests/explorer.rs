use mandelbrot_viewer::{
    CancelFlag, Cancelled, Colour, Complex, ExplorerController, FractalAlgorithm, FractalRenderer,
    ImageSize, InputEvent, MandelbrotAlgorithm, MandelbrotConfig, ViewportState,
};

fn cheap_config(width: u32, height: u32) -> MandelbrotConfig {
    MandelbrotConfig {
        image_size: ImageSize::new(width, height),
        max_iterations: 64,
        ..MandelbrotConfig::default()
    }
}

#[test]
fn startup_view_renders_expected_pixels() {
    let mut controller = ExplorerController::new(&MandelbrotConfig::default()).unwrap();
    let size = controller.image_size();

    assert_eq!(size, ImageSize::new(800, 600));
    assert_eq!(
        controller.viewport().pixel_to_plane(400.0, 300.0, size),
        Complex::new(-3.0, -1.5)
    );

    let top_left = controller.viewport().pixel_to_plane(0.0, 0.0, size);
    assert!((top_left.real - (-400.0 / 150.0 - 3.0)).abs() < 1e-12);
    assert!((top_left.imag - (-3.5)).abs() < 1e-12);

    let frame = controller.frame().unwrap();
    let grid = &frame.grid;
    let first_step_escape = Colour::new(53, 0, 255);

    assert_eq!(grid.width(), 800);
    assert_eq!(grid.height(), 600);
    assert_eq!(grid.pixel(0, 0), Some(first_step_escape));
    assert_eq!(grid.pixel(400, 300), Some(first_step_escape));

    // c = -2 + 0i and c = -0.5 + 0i are members of the set
    assert_eq!(grid.pixel(550, 525), Some(Colour::BLACK));
    assert_eq!(grid.pixel(775, 525), Some(Colour::BLACK));
}

#[test]
fn startup_centre_escapes_on_first_step() {
    let algorithm = MandelbrotAlgorithm::default();
    let outcome = algorithm.compute(Complex::new(-3.0, -1.5));

    assert!(!outcome.is_bounded());
    assert_eq!(outcome.iterations(), 1);
}

#[test]
fn dirty_flag_lifecycle() {
    let mut controller = ExplorerController::new(&cheap_config(40, 30)).unwrap();
    assert!(controller.is_dirty());

    controller.frame();
    assert!(!controller.is_dirty());

    controller.handle_event(InputEvent::WheelScroll {
        delta: -1.0,
        x: 20.0,
        y: 15.0,
    });
    assert!(controller.is_dirty());
    controller.frame();
    assert!(!controller.is_dirty());

    controller.handle_event(InputEvent::PointerDown { x: 5.0, y: 5.0 });
    controller.handle_event(InputEvent::PointerDrag { x: 9.0, y: 1.0 });
    assert!(controller.is_dirty());
    controller.frame();
    assert!(!controller.is_dirty());

    controller.handle_event(InputEvent::Resize {
        width: 20,
        height: 10,
    });
    assert!(controller.is_dirty());
    assert_eq!(controller.frame().unwrap().grid.size(), ImageSize::new(20, 10));
    assert!(!controller.is_dirty());
}

#[test]
fn drag_keeps_anchor_point_under_cursor() {
    let mut controller = ExplorerController::new(&cheap_config(800, 600)).unwrap();
    let size = controller.image_size();
    let grabbed = controller.viewport().pixel_to_plane(100.0, 200.0, size);

    controller.handle_event(InputEvent::PointerDown { x: 100.0, y: 200.0 });
    for step in 1..=10 {
        let step = f64::from(step);
        controller.handle_event(InputEvent::PointerDrag {
            x: 100.0 + 13.0 * step,
            y: 200.0 - 7.0 * step,
        });
    }

    let under_cursor = controller.viewport().pixel_to_plane(230.0, 130.0, size);
    assert!((under_cursor.real - grabbed.real).abs() < 1e-9);
    assert!((under_cursor.imag - grabbed.imag).abs() < 1e-9);
}

#[test]
fn zoom_keeps_pointer_point_fixed() {
    let size = ImageSize::new(800, 600);
    let mut viewport = ViewportState::default();

    for (delta, x, y) in [(-3.0, 123.0, 456.0), (2.0, 700.0, 10.0), (-10.0, 0.0, 599.0)] {
        let before = viewport.pixel_to_plane(x, y, size);
        viewport.apply_zoom(delta, x, y, size);
        let after = viewport.pixel_to_plane(x, y, size);

        assert!((after.real - before.real).abs() < 1e-9);
        assert!((after.imag - before.imag).abs() < 1e-9);
    }
}

#[test]
fn grid_dimensions_match_requested_size() {
    let renderer = FractalRenderer::new(MandelbrotAlgorithm::new(16, 2.0).unwrap());
    let viewport = ViewportState::default();

    for (w, h) in [(1, 1), (1, 7), (7, 1), (33, 17), (128, 96)] {
        let grid = renderer.render(&viewport, ImageSize::new(w, h));

        assert_eq!(grid.width(), w);
        assert_eq!(grid.height(), h);
        assert_eq!(grid.buffer().len(), (w * h * 3) as usize);
    }
}

#[test]
fn identical_inputs_give_identical_grids() {
    let config = cheap_config(64, 48);
    let mut first = ExplorerController::new(&config).unwrap();
    let mut second = ExplorerController::new(&config).unwrap();
    let events = [
        InputEvent::WheelScroll {
            delta: -4.0,
            x: 40.0,
            y: 40.0,
        },
        InputEvent::PointerDown { x: 10.0, y: 10.0 },
        InputEvent::PointerDrag { x: 20.0, y: 5.0 },
    ];

    for event in events {
        first.handle_event(event);
        second.handle_event(event);
    }

    assert_eq!(first.frame().unwrap().grid, second.frame().unwrap().grid);
}

#[test]
fn cancel_flag_abandons_render() {
    let renderer = FractalRenderer::default();
    let flag = CancelFlag::new();
    flag.cancel();

    let result = renderer.render_cancelable(&ViewportState::default(), ImageSize::new(64, 64), &flag);

    assert_eq!(result, Err(Cancelled));
}
