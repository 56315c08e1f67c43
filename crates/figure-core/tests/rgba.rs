// File: crates/figure-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and background fill.

use figure_core::theme::palette;
use figure_core::{CurveChart, Figure, FigureOptions, Rgb};

#[test]
fn render_rgba8_buffer() {
    let mut figure = Figure::new();
    // Keep the panel away from the canvas edge so the corner pixel stays
    // pure background despite anti-aliased axis strokes.
    figure.add_chart(CurveChart::new(1.0, palette::SKY).at((0.2, 0.2)).with_steps(10));

    let opts = FigureOptions {
        width: 64,
        height: 64,
        scale: 40.0,
        background: Some(Rgb::new(1.0, 1.0, 1.0)),
        draw_labels: false, // avoid font variance
        ..Default::default()
    };
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Top-left pixel is the opaque white background (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}
