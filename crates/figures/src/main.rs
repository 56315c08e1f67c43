// File: crates/figures/src/main.rs
// Summary: Renders the gamma-correction illustrations (transfer panels, encoding diagram, large curve) to SVG and PNG.

use anyhow::Result;
use figure_core::theme::palette;
use figure_core::{Caption, ChartStyle, CurveChart, Figure, FigureOptions, QuantLadder, Rgb};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept output directory from CLI or fall back to target/out
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir)?;

    let (figure, opts) = transfer_figure();
    write_figure(&figure, &opts, &out_dir, "gamma")?;

    let (figure, opts) = encoding_figure();
    write_figure(&figure, &opts, &out_dir, "gamma-encoding")?;

    let (figure, opts) = large_figure();
    write_figure(&figure, &opts, &out_dir, "gamma-large")?;

    Ok(())
}

fn write_figure(figure: &Figure, opts: &FigureOptions, dir: &Path, name: &str) -> Result<()> {
    let svg = dir.join(format!("{name}.svg"));
    figure.render_to_svg(opts, &svg)?;
    println!("Wrote {}", svg.display());

    let png = svg.with_extension("png");
    figure.render_to_png(opts, &png)?;
    println!("Wrote {}", png.display());
    Ok(())
}

/// Three transfer-curve panels: decoding, identity, and encoding gamma.
fn transfer_figure() -> (Figure, FigureOptions) {
    let opts = FigureOptions {
        width: 490,
        height: 200,
        scale: 120.0,
        ..FigureOptions::default()
    };

    let label_yoffs = 1.35;

    let mut figure = Figure::new();
    figure.add_chart(
        CurveChart::new(1.0 / 2.2, palette::PINK)
            .at((0.17, 0.21))
            .with_caption(Caption::new("a)  ", "=1/2.2", (0.27, label_yoffs), 0.11)),
    );
    figure.add_chart(
        CurveChart::new(1.0, palette::SKY)
            .at((1.57, 0.21))
            .with_caption(Caption::new("b)  ", "=1.0", (0.31, label_yoffs), 0.11)),
    );
    figure.add_chart(
        CurveChart::new(2.2, palette::TEAL)
            .at((2.97, 0.21))
            .with_caption(Caption::new("c)  ", "=2.2", (0.30, label_yoffs), 0.11)),
    );
    (figure, opts)
}

/// Encoding diagram: one decoding curve with construction rays for 16
/// input values and two quantization ladders on the output margin.
fn encoding_figure() -> (Figure, FigureOptions) {
    let opts = FigureOptions {
        width: 620,
        height: 320,
        scale: 220.0,
        ..FigureOptions::default()
    };

    let origin = (1.2, 0.21);

    let mut figure = Figure::new();
    figure.add_chart(
        CurveChart::new(1.0 / 2.2, palette::PINK)
            .at(origin)
            .with_style(ChartStyle::compact())
            .with_input_rays(15),
    );
    figure.add_ladder(QuantLadder::new(16, -0.2, -0.4, origin));
    figure.add_ladder(QuantLadder::new(64, -0.4, -0.6, origin));
    figure.add_annotation("n=16", (origin.0 + 0.45, origin.1 + 1.08), 0.062);
    (figure, opts)
}

/// Large standalone encoding curve on a white background.
fn large_figure() -> (Figure, FigureOptions) {
    let opts = FigureOptions {
        width: 800,
        height: 800,
        scale: 500.0,
        background: Some(Rgb::new(1.0, 1.0, 1.0)),
        ..FigureOptions::default()
    };

    let mut figure = Figure::new();
    figure.add_chart(
        CurveChart::new(2.2, palette::RED)
            .at((0.2, 0.2))
            .with_style(ChartStyle::plain()),
    );
    (figure, opts)
}
