// File: crates/figure-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic two-panel figure to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares bytes for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use figure_core::theme::palette;
use figure_core::{CurveChart, Figure, FigureOptions, Rgb};

fn render_bytes() -> Vec<u8> {
    let mut figure = Figure::new();
    figure.add_chart(CurveChart::new(1.0 / 2.2, palette::PINK).at((0.17, 0.21)).with_steps(100));
    figure.add_chart(CurveChart::new(2.2, palette::TEAL).at((1.57, 0.21)).with_steps(100));

    let opts = FigureOptions {
        width: 360,
        height: 200,
        scale: 120.0,
        background: Some(Rgb::new(1.0, 1.0, 1.0)),
        draw_labels: false, // avoid text nondeterminism across platforms
        ..Default::default()
    };
    figure.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_transfer_panels() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("transfer_panels.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
