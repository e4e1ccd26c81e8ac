use super::palette::{DEFAULT_ROTATION_DEGREES, DEFAULT_SIZE_FACTOR, PARTS};
use super::scale::divide_scale;
use crate::render::{Canvas, Paint, Rect, SavedCanvas};

/// Shape parameters for the bars.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BarGeometry {
    pub(crate) size_factor: f32,
    pub(crate) rotation_degrees: f32,
}

impl Default for BarGeometry {
    fn default() -> Self {
        Self { size_factor: DEFAULT_SIZE_FACTOR, rotation_degrees: DEFAULT_ROTATION_DEGREES }
    }
}

/// Draws the two mirrored bars for a node at `scale`.
///
/// At rest the halves form a vertical bar hanging from the top center. The first half of the leg
/// rotates them open into a horizontal bar as wide as the canvas, sitting just above the top
/// edge, and the second half slides that bar in from the top until it rests on the bottom edge.
pub(crate) fn draw_bar_rot_down(canvas: &mut dyn Canvas, scale: f32, paint: &Paint, geometry: &BarGeometry) {
    let w = canvas.width();
    let h = canvas.height();
    let size = w.min(h) / geometry.size_factor;
    let sc1 = divide_scale(scale, 0, PARTS);
    let sc2 = divide_scale(scale, 1, PARTS);

    // both halves pivot on this point, the passes only mirror and rotate around it
    let mut canvas = SavedCanvas::new(canvas);
    canvas.translate(w / 2.0, h * sc2);
    for j in 0..2 {
        let mut canvas = SavedCanvas::new(&mut *canvas);
        canvas.scale(1.0 - 2.0 * j as f32, 1.0);
        canvas.rotate(geometry.rotation_degrees * sc1);
        canvas.fill_rect(Rect::new(-size, 0.0, 0.0, w / 2.0), paint);
    }
}
