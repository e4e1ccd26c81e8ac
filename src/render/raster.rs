use super::canvas::{Canvas, Paint, Rect, Transform};
use super::color::Color;

/// An off-screen RGB pixel buffer implementing [Canvas].
#[derive(Debug)]
pub(crate) struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl Raster {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::new(0, 0, 0); width * height],
            transform: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Reallocates the buffer, dropping its contents and any saved transforms.
    pub(crate) fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub(crate) fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub(crate) fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Renders the buffer as text, one character per pixel: `.` for `background` and `#` for
    /// anything else.
    pub(crate) fn to_ascii(&self, background: Color) -> String {
        let mut output = String::with_capacity((self.width + 1) * self.height);
        for row in self.pixels.chunks(self.width.max(1)).take(self.height) {
            output.extend(row.iter().map(|pixel| if *pixel == background { '.' } else { '#' }));
            output.push('\n');
        }
        output
    }
}

impl Canvas for Raster {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.then(&Transform::translation(dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform.then(&Transform::rotation(degrees));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.then(&Transform::scaling(sx, sy));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        // a collapsed transform leaves nothing visible
        let Some(inverse) = self.transform.invert() else {
            return;
        };
        let bounds = self.transform.bounds(&rect);
        let x_start = bounds.left.floor().max(0.0) as usize;
        let y_start = bounds.top.floor().max(0.0) as usize;
        let x_end = (bounds.right.ceil().max(0.0) as usize).min(self.width);
        let y_end = (bounds.bottom.ceil().max(0.0) as usize).min(self.height);
        for y in y_start..y_end {
            for x in x_start..x_end {
                // sample at the pixel center
                let (local_x, local_y) = inverse.apply(x as f32 + 0.5, y as f32 + 0.5);
                if rect.contains(local_x, local_y) {
                    self.pixels[y * self.width + x] = paint.color;
                }
            }
        }
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    fn filled_count(raster: &Raster, color: Color) -> usize {
        let (width, height) = raster.dimensions();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| raster.pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn fill_rect_without_transform() {
        let mut raster = Raster::new(4, 4);
        raster.fill(WHITE);
        raster.fill_rect(Rect::new(1.0, 1.0, 3.0, 2.0), &Paint::new(RED));
        assert_eq!(raster.to_ascii(WHITE), "....\n.##.\n....\n....\n");
    }

    #[test]
    fn fill_rect_translated_and_mirrored() {
        let mut raster = Raster::new(4, 2);
        raster.fill(WHITE);
        raster.translate(2.0, 0.0);
        raster.scale(-1.0, 1.0);
        raster.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), &Paint::new(RED));
        assert_eq!(raster.pixel(1, 0), Some(RED));
        assert_eq!(filled_count(&raster, RED), 1);
    }

    #[test]
    fn rotated_rect_keeps_area() {
        let mut raster = Raster::new(10, 10);
        raster.fill(WHITE);
        raster.translate(5.0, 5.0);
        raster.rotate(90.0);
        raster.fill_rect(Rect::new(0.0, 0.0, 4.0, 2.0), &Paint::new(RED));
        assert_eq!(filled_count(&raster, RED), 8);
        // the rect now hangs below the origin, to its left
        assert_eq!(raster.pixel(4, 8), Some(RED));
    }

    #[test]
    fn restore_brings_back_transform() {
        let mut raster = Raster::new(3, 1);
        raster.fill(WHITE);
        raster.save();
        raster.translate(2.0, 0.0);
        raster.restore();
        raster.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), &Paint::new(RED));
        assert_eq!(raster.to_ascii(WHITE), "#..\n");
    }

    #[test]
    fn collapsed_transform_draws_nothing() {
        let mut raster = Raster::new(3, 3);
        raster.fill(WHITE);
        raster.scale(0.0, 1.0);
        raster.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), &Paint::new(RED));
        assert_eq!(filled_count(&raster, RED), 0);
    }

    #[test]
    fn zero_sized_raster_is_harmless() {
        let mut raster = Raster::new(0, 0);
        raster.fill(WHITE);
        raster.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), &Paint::new(RED));
        assert_eq!(raster.to_ascii(WHITE), "");
    }
}
