// File: crates/figure-core/src/canvas.rs
// Summary: Scoped save/restore guard for the canvas transform stack.

use skia_safe as skia;

/// Restores the canvas matrix/clip state when dropped, so per-chart
/// translate/scale/rotate calls never leak into the next chart, even when
/// drawing bails out early.
pub struct TransformGuard<'a> {
    canvas: &'a skia::Canvas,
    count: usize,
}

impl<'a> TransformGuard<'a> {
    pub fn push(canvas: &'a skia::Canvas) -> Self {
        let count = canvas.save();
        Self { canvas, count }
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.canvas.restore_to_count(self.count);
    }
}
