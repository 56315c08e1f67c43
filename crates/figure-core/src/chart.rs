// File: crates/figure-core/src/chart.rs
// Summary: Figure model and the SVG/PNG rendering pipeline using Skia surfaces.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::canvas::TransformGuard;
use crate::curve;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{AxisOverhang, Rgb, HEIGHT, SCALE, WIDTH};

pub struct FigureOptions {
    pub width: i32,
    pub height: i32,
    /// Pixels per chart unit; charts are laid out in unit coordinates.
    pub scale: f32,
    /// Fill behind the figure; `None` leaves the canvas transparent.
    pub background: Option<Rgb>,
    pub theme: Theme,
    /// Disabled by snapshot tests to keep output font-independent.
    pub draw_labels: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: SCALE,
            background: None,
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Presentation constants for one chart panel; everything the published
/// figures tuned as inline literals. Coordinates are chart units with the
/// input axis along y = 1 and the unit square spanning (0,0)-(1,1).
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub reference_width: f32,
    pub guide_width: f32,
    pub axis_width: f32,
    pub curve_width: f32,
    /// Dash intervals for the boundary guides; `None` disables them.
    pub guide_dash: Option<[f32; 2]>,
    pub overhang: AxisOverhang,
    pub tick_size: f32,
    pub label_size: f32,
    /// Baseline anchors for the fixed labels.
    pub tick_zero: (f32, f32),
    pub tick_one_x: (f32, f32),
    pub tick_one_y: (f32, f32),
    pub in_label: (f32, f32),
    pub out_label: (f32, f32),
    pub rotated_out_label: bool,
    /// Plain charts (the large standalone curve) carry no text at all.
    pub labeled: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            reference_width: 0.006,
            guide_width: 0.006,
            axis_width: 0.01,
            curve_width: 0.016,
            guide_dash: Some([0.03, 0.02]),
            overhang: AxisOverhang::default(),
            tick_size: 0.11,
            label_size: 0.09,
            tick_zero: (-0.1, 1.11),
            tick_one_x: (0.97, 1.11),
            tick_one_y: (-0.1, 0.06),
            in_label: (0.47, 1.11),
            out_label: (-0.045, 0.58),
            rotated_out_label: true,
            labeled: true,
        }
    }
}

impl ChartStyle {
    /// Smaller furniture for the encoding diagram; boundary guides are
    /// replaced by construction rays, so no dash pattern.
    pub fn compact() -> Self {
        Self {
            reference_width: 0.006,
            guide_width: 0.004,
            axis_width: 0.007,
            curve_width: 0.010,
            guide_dash: None,
            overhang: AxisOverhang::default(),
            tick_size: 0.07,
            label_size: 0.062,
            tick_zero: (-0.06, 1.08),
            tick_one_x: (0.98, 1.08),
            tick_one_y: (-0.07, -0.03),
            in_label: (1.06, 1.02),
            out_label: (0.0, -0.08),
            rotated_out_label: false,
            labeled: true,
        }
    }

    /// Thick unlabeled furniture for the large standalone curve.
    pub fn plain() -> Self {
        Self {
            reference_width: 0.008,
            guide_width: 0.006,
            axis_width: 0.008,
            curve_width: 0.014,
            guide_dash: None,
            overhang: AxisOverhang::new(0.1, 0.06),
            labeled: false,
            ..Self::default()
        }
    }
}

/// Panel caption like `a)  γ=1/2.2`; the glyph between `prefix` and
/// `gamma_text` is supplied by the renderer.
#[derive(Clone, Debug)]
pub struct Caption {
    pub prefix: String,
    pub gamma_text: String,
    /// Baseline anchor in chart units.
    pub offset: (f32, f32),
    pub size: f32,
}

impl Caption {
    pub fn new(
        prefix: impl Into<String>,
        gamma_text: impl Into<String>,
        offset: (f32, f32),
        size: f32,
    ) -> Self {
        Self { prefix: prefix.into(), gamma_text: gamma_text.into(), offset, size }
    }
}

/// One transfer-curve panel. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct CurveChart {
    pub gamma: f64,
    pub color: Rgb,
    /// Top-left of the panel's unit square, in figure units.
    pub origin: (f32, f32),
    pub step_count: usize,
    pub style: ChartStyle,
    /// When set, draw the encoding construction rays for this many input
    /// steps (`n + 1` sampled values).
    pub input_rays: Option<usize>,
    pub caption: Option<Caption>,
}

impl CurveChart {
    pub fn new(gamma: f64, color: Rgb) -> Self {
        Self {
            gamma,
            color,
            origin: (0.0, 0.0),
            step_count: 500,
            style: ChartStyle::default(),
            input_rays: None,
            caption: None,
        }
    }

    pub fn at(mut self, origin: (f32, f32)) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_steps(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_input_rays(mut self, steps: usize) -> Self {
        self.input_rays = Some(steps);
        self
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }
}

/// Quantization tick ladder left of a panel, labeled `Q=<levels>`.
#[derive(Clone, Debug)]
pub struct QuantLadder {
    pub levels: usize,
    /// Tick span on the x axis, in chart units (both usually negative).
    pub near: f32,
    pub far: f32,
    /// Same anchor as the panel the ladder belongs to.
    pub origin: (f32, f32),
    pub tick_width: f32,
    pub label_size: f32,
}

impl QuantLadder {
    pub fn new(levels: usize, near: f32, far: f32, origin: (f32, f32)) -> Self {
        Self { levels, near, far, origin, tick_width: 0.005, label_size: 0.062 }
    }
}

/// Free-floating text in figure units.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub text: String,
    pub pos: (f32, f32),
    pub size: f32,
}

pub struct Figure {
    pub charts: Vec<CurveChart>,
    pub ladders: Vec<QuantLadder>,
    pub annotations: Vec<Annotation>,
}

impl Figure {
    pub fn new() -> Self {
        Self { charts: Vec::new(), ladders: Vec::new(), annotations: Vec::new() }
    }

    pub fn add_chart(&mut self, chart: CurveChart) {
        self.charts.push(chart);
    }

    pub fn add_ladder(&mut self, ladder: QuantLadder) {
        self.ladders.push(ladder);
    }

    pub fn add_annotation(&mut self, text: impl Into<String>, pos: (f32, f32), size: f32) {
        self.annotations.push(Annotation { text: text.into(), pos, size });
    }

    /// Render the figure to an SVG file; the primary vector output.
    pub fn render_to_svg(
        &self,
        opts: &FigureOptions,
        output_svg_path: impl AsRef<Path>,
    ) -> Result<()> {
        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let mut canvas = skia::svg::Canvas::new(bounds, None);
        self.paint(&canvas, opts)?;
        let data = canvas.end();

        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, data.as_bytes())?;
        Ok(())
    }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &FigureOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &FigureOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Raw RGBA8 pixels plus (width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &FigureOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts)?;

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let row_bytes = opts.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, row_bytes))
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &FigureOptions) -> Result<()> {
        // Validate every chart and ladder before the first draw call; a
        // partially drawn figure with bad parameters is not useful output.
        let mut sampled = Vec::with_capacity(self.charts.len());
        for chart in &self.charts {
            let points = curve::sample(chart.gamma, chart.step_count)?;
            let rays = match chart.input_rays {
                Some(steps) => Some(curve::sample(chart.gamma, steps)?),
                None => None,
            };
            sampled.push((points, rays));
        }
        for ladder in &self.ladders {
            if ladder.levels < 1 {
                return Err(curve::InvalidParameter::StepCount(ladder.levels).into());
            }
        }

        if let Some(bg) = opts.background {
            let mut paint = skia::Paint::default();
            paint.set_color(bg.to_color());
            paint.set_style(skia::paint::Style::Fill);
            canvas.draw_rect(
                skia::Rect::from_wh(opts.width as f32, opts.height as f32),
                &paint,
            );
        }

        let shaper = TextShaper::new();
        let _scale_guard = TransformGuard::push(canvas);
        canvas.scale((opts.scale, opts.scale));

        for (chart, (points, rays)) in self.charts.iter().zip(&sampled) {
            let _guard = TransformGuard::push(canvas);
            canvas.translate(chart.origin);
            draw_furniture(canvas, chart, rays.as_deref(), &opts.theme, opts.draw_labels, &shaper);
            draw_curve(canvas, points, chart.color, chart.style.curve_width);
            if opts.draw_labels && chart.style.labeled {
                if let Some(caption) = &chart.caption {
                    shaper.draw_caption(
                        canvas,
                        &caption.prefix,
                        &caption.gamma_text,
                        caption.offset,
                        caption.size,
                        opts.theme.caption,
                    );
                }
            }
        }

        for ladder in &self.ladders {
            draw_ladder(canvas, ladder, &opts.theme, opts.draw_labels, &shaper);
        }

        if opts.draw_labels {
            for a in &self.annotations {
                shaper.draw_left(canvas, &a.text, a.pos, a.size, opts.theme.caption);
            }
        }
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: Rgb, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color.to_color());
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_furniture(
    canvas: &skia::Canvas,
    chart: &CurveChart,
    rays: Option<&[(f64, f64)]>,
    theme: &Theme,
    draw_labels: bool,
    shaper: &TextShaper,
) {
    let style = &chart.style;

    // 45 deg reference line
    let reference = stroke_paint(theme.reference_line, style.reference_width);
    canvas.draw_line((0.0, 1.0), (1.0, 0.0), &reference);

    // Dashed boundary guides on the far edges of the unit square
    if let Some(dash) = style.guide_dash {
        let mut guide = stroke_paint(theme.reference_line, style.guide_width);
        guide.set_path_effect(skia::dash_path_effect::new(&dash, 0.0));
        canvas.draw_line((1.0, 1.0), (1.0, 0.0), &guide);
        canvas.draw_line((0.0, 0.0), (1.0, 0.0), &guide);
    }

    // Construction rays: vertical drop from the input axis to the curve,
    // horizontal carry from the curve to the encoded-value margin.
    if let Some(points) = rays {
        let ray = stroke_paint(theme.reference_line, style.guide_width);
        for &(x, y) in points {
            let (x, y) = (x as f32, y as f32);
            canvas.draw_line((x, 1.0), (x, y), &ray);
            canvas.draw_line((-0.2, y), (x, y), &ray);
        }
    }

    // Axes, overhanging the unit square
    let axis = stroke_paint(theme.axis_line, style.axis_width);
    let AxisOverhang { tail, head } = style.overhang;
    canvas.draw_line((0.0, 1.0 + tail), (0.0, -head), &axis);
    canvas.draw_line((-tail, 1.0), (1.0 + head, 1.0), &axis);

    if !(draw_labels && style.labeled) {
        return;
    }

    // Tick labels: input 0 and 1, output 1
    shaper.draw_left(canvas, "0", style.tick_zero, style.tick_size, theme.axis_label);
    shaper.draw_left(canvas, "1", style.tick_one_x, style.tick_size, theme.axis_label);
    shaper.draw_left(canvas, "1", style.tick_one_y, style.tick_size, theme.axis_label);

    // Axis names
    shaper.draw_left(canvas, "in", style.in_label, style.label_size, theme.axis_label);
    if style.rotated_out_label {
        shaper.draw_rotated(canvas, "out", style.out_label, style.label_size, theme.axis_label);
    } else {
        shaper.draw_left(canvas, "out", style.out_label, style.label_size, theme.axis_label);
    }
}

fn draw_curve(canvas: &skia::Canvas, points: &[(f64, f64)], color: Rgb, width: f32) {
    if points.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = points[0];
    path.move_to((x0 as f32, y0 as f32));

    for &(x, y) in points.iter().skip(1) {
        path.line_to((x as f32, y as f32));
    }

    let stroke = stroke_paint(color, width);
    canvas.draw_path(&path, &stroke);
}

fn draw_ladder(
    canvas: &skia::Canvas,
    ladder: &QuantLadder,
    theme: &Theme,
    draw_labels: bool,
    shaper: &TextShaper,
) {
    let _guard = TransformGuard::push(canvas);
    canvas.translate(ladder.origin);

    let paint = stroke_paint(theme.caption, ladder.tick_width);
    for y in curve::levels(ladder.levels) {
        let y = y as f32;
        canvas.draw_line((ladder.near, y), (ladder.far, y), &paint);
    }

    if draw_labels {
        shaper.draw_left(
            canvas,
            &format!("Q={}", ladder.levels),
            (ladder.far + 0.035, 1.08),
            ladder.label_size,
            theme.caption,
        );
    }
}
