// File: crates/figure-core/src/text.rs
// Summary: Text shaping via Skia textlayout; body font plus a symbol font for the gamma glyph.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::canvas::TransformGuard;
use crate::types::Rgb;

/// Family stack for running text.
const BODY: &[&str] = &["Source Sans Pro", "Segoe UI", "DejaVu Sans", "sans-serif"];
/// Family stack for the Greek gamma; the body face lacks the glyph.
const SYMBOL: &[&str] = &["Verdana", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: Rgb, symbol: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        // Sizes are in chart units; the canvas scale turns them into pixels.
        ts.set_font_size(size);
        ts.set_color(color.to_color());
        ts.set_font_families(if symbol { SYMBOL } else { BODY });
        ts
    }

    fn build(&self, runs: &[(&str, bool)], size: f32, color: Rgb) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        for &(text, symbol) in runs {
            builder.push_style(&Self::make_style(size, color, symbol));
            builder.add_text(text);
        }
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn layout(&self, text: &str, size: f32, color: Rgb) -> Paragraph {
        self.build(&[(text, false)], size, color)
    }

    /// `<prefix>γ<suffix>` as a single paragraph of three runs, with the
    /// gamma glyph shaped by the symbol family.
    pub fn layout_caption(&self, prefix: &str, suffix: &str, size: f32, color: Rgb) -> Paragraph {
        self.build(&[(prefix, false), ("\u{03b3}", true), (suffix, false)], size, color)
    }

    /// Draw with `pos` as the text baseline anchor, as the figure layout
    /// constants expect.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, pos: (f32, f32), size: f32, color: Rgb) {
        let mut p = self.layout(text, size, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (pos.0, pos.1 - size * 0.8));
    }

    pub fn draw_caption(
        &self,
        canvas: &skia::Canvas,
        prefix: &str,
        suffix: &str,
        pos: (f32, f32),
        size: f32,
        color: Rgb,
    ) {
        let mut p = self.layout_caption(prefix, suffix, size, color);
        p.paint(canvas, (pos.0, pos.1 - size * 0.8));
    }

    /// Draw rotated 90 degrees counter-clockwise around `pos`; used for the
    /// vertical axis name.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, pos: (f32, f32), size: f32, color: Rgb) {
        let _guard = TransformGuard::push(canvas);
        canvas.translate(pos);
        canvas.rotate(-90.0, None);
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (0.0, -size * 0.8));
    }
}
