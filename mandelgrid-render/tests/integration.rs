use std::sync::Arc;

use mandelgrid_core::{RenderLimits, RenderRequest, Viewport};
use mandelgrid_render::{render, render_with_cancel, Color, Palette, RenderCancel, RenderError};

#[test]
fn end_to_end_render_and_colorize() {
    let request = RenderRequest::new(200, 150, 500, Viewport::default()).unwrap();

    let result = render(&request).unwrap();

    assert_eq!(result.grid.width, 200);
    assert_eq!(result.grid.height, 150);
    assert_eq!(result.grid.data.len(), 200 * 150);
    assert!(result.grid.data.iter().all(|&n| n <= 500));

    let palette = Palette::build(500);
    let image = palette.colorize(&result.grid);
    assert_eq!(image.pixels.len(), 200 * 150);
    assert_eq!(image.to_rgba8().len(), 200 * 150 * 4);

    // Interior cells are black, escaped cells are not.
    for (&n, &c) in result.grid.data.iter().zip(&image.pixels) {
        if n == 500 {
            assert_eq!(c, Color::BLACK);
        } else {
            assert_ne!(c, Color::BLACK);
        }
    }
    assert!(image.pixels.iter().any(|&c| c != Color::BLACK));
    assert!(image.pixels.iter().any(|&c| c == Color::BLACK));
}

#[test]
fn four_by_four_scenario() {
    let request = RenderRequest::from_bounds(4, 4, -2.0, -2.0, 2.0, 2.0, 50).unwrap();

    let grid = render(&request).unwrap().grid;

    for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
        assert!(grid.get(x, y).unwrap() < 10);
    }
    assert_eq!(grid.get(2, 2), Some(50));

    let image = Palette::build(50).colorize(&grid);
    assert_eq!(image.get(2, 2), Some(Color::BLACK));
}

#[test]
fn render_determinism() {
    let request = RenderRequest::new(128, 96, 256, Viewport::default()).unwrap();

    let r1 = render(&request).unwrap();
    let r2 = render(&request).unwrap();

    assert_eq!(r1.grid, r2.grid, "renders must be deterministic");
}

#[test]
fn palette_rebuild_without_recompute() {
    let request = RenderRequest::new(64, 48, 200, Viewport::default()).unwrap();
    let result = render(&request).unwrap();

    // A palette built for a smaller cap still maps every cell.
    let coarse = Palette::build(50).colorize(&result.grid);
    let exact = Palette::build(200).colorize(&result.grid);

    assert_eq!(coarse.pixels.len(), exact.pixels.len());
    assert_ne!(coarse.pixels, exact.pixels);
}

#[test]
fn invalid_and_oversized_requests_are_distinguishable() {
    let request = RenderRequest::new(100, 100, 10, Viewport::default()).unwrap();
    let cancel = Arc::new(RenderCancel::new());

    let err = render_with_cancel(&request, &RenderLimits::new(50), &cancel).unwrap_err();
    assert!(!err.is_invalid_request());

    let mut bad = request;
    bad.max_iter = 0;
    let err = render(&bad).unwrap_err();
    assert!(err.is_invalid_request());
    assert!(!matches!(err, RenderError::Cancelled));
}
