// File: crates/figure-core/src/theme.rs
// Summary: Furniture colors and the curve palette for figure rendering.

use crate::types::Rgb;

/// Curve colors used by the shipped figures.
pub mod palette {
    use crate::types::Rgb;

    pub const PINK: Rgb = Rgb::new(1.0, 0.2, 0.5);
    pub const SKY: Rgb = Rgb::new(0.3, 0.7, 0.9);
    pub const TEAL: Rgb = Rgb::new(0.0, 0.6, 0.5);
    pub const RED: Rgb = Rgb::new(0.8, 0.0, 0.0);
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// 45 degree reference line; also the dashed guides and construction rays.
    pub reference_line: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
    /// Panel captions, quantization ladders and free annotations.
    pub caption: Rgb,
}

impl Theme {
    /// Print colors matching the published figures: grays on white.
    pub fn light() -> Self {
        Self {
            name: "light",
            reference_line: Rgb::new(0.7, 0.7, 0.7),
            axis_line: Rgb::new(0.4, 0.4, 0.4),
            axis_label: Rgb::new(0.4, 0.4, 0.4),
            caption: Rgb::new(0.3, 0.3, 0.3),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            reference_line: Rgb::new(0.35, 0.35, 0.38),
            axis_line: Rgb::new(0.7, 0.7, 0.74),
            axis_label: Rgb::new(0.7, 0.7, 0.74),
            caption: Rgb::new(0.82, 0.82, 0.86),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
