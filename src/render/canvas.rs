use super::color::Color;
use std::ops::{Deref, DerefMut};

/// An axis aligned rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Rect {
    pub(crate) left: f32,
    pub(crate) top: f32,
    pub(crate) right: f32,
    pub(crate) bottom: f32,
}

impl Rect {
    pub(crate) fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub(crate) fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left.min(self.right)
            && x < self.left.max(self.right)
            && y >= self.top.min(self.bottom)
            && y < self.top.max(self.bottom)
    }

    fn corners(&self) -> [(f32, f32); 4] {
        [(self.left, self.top), (self.right, self.top), (self.right, self.bottom), (self.left, self.bottom)]
    }
}

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(a * x + c * y + e, b * x + d * y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub(crate) const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Applies `other` before `self`, the way canvas operations stack up.
    pub(crate) fn then(&self, other: &Transform) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub(crate) fn translation(dx: f32, dy: f32) -> Self {
        Self { e: dx, f: dy, ..Self::IDENTITY }
    }

    pub(crate) fn scaling(sx: f32, sy: f32) -> Self {
        Self { a: sx, d: sy, ..Self::IDENTITY }
    }

    /// Clockwise on screen, since the y axis points down.
    pub(crate) fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    pub(crate) fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (self.a * x + self.c * y + self.e, self.b * x + self.d * y + self.f)
    }

    /// Returns `None` for degenerate transforms, which collapse everything into a line or a point.
    pub(crate) fn invert(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Self { a, b, c, d, e: -(a * self.e + c * self.f), f: -(b * self.e + d * self.f) })
    }

    /// The bounding box of `rect` once mapped through this transform.
    pub(crate) fn bounds(&self, rect: &Rect) -> Rect {
        let mut bounds = Rect::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        for (x, y) in rect.corners() {
            let (x, y) = self.apply(x, y);
            bounds.left = bounds.left.min(x);
            bounds.top = bounds.top.min(y);
            bounds.right = bounds.right.max(x);
            bounds.bottom = bounds.bottom.max(y);
        }
        bounds
    }
}

/// A drawable surface with a stack of affine transforms.
pub(crate) trait Canvas {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Push the current transform so a later `restore` brings it back.
    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    fn rotate(&mut self, degrees: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    /// Fill `rect`, expressed in the current transform's coordinates.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Fill the whole surface ignoring the current transform.
    fn fill(&mut self, color: Color);
}

/// Saves the canvas on creation and restores it when dropped, so every exit path (early returns
/// and unwinding included) leaves the transform stack balanced.
pub(crate) struct SavedCanvas<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> SavedCanvas<'a, C> {
    pub(crate) fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for SavedCanvas<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for SavedCanvas<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for SavedCanvas<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

/// How shapes are filled.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Paint {
    pub(crate) color: Color,
}

impl Paint {
    pub(crate) fn new(color: Color) -> Self {
        Self { color }
    }
}
