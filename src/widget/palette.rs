use crate::render::Color;
use std::time::Duration;

/// Number of staggered sub-phases (rotate, then slide) in one leg.
pub(crate) const PARTS: usize = 2;

/// Scale advanced per frame over a whole leg, before splitting it across [PARTS].
pub(crate) const DEFAULT_STEP: f32 = 0.02;

/// The bar thickness is the shortest side divided by this.
pub(crate) const DEFAULT_SIZE_FACTOR: f32 = 8.9;

pub(crate) const DEFAULT_ROTATION_DEGREES: f32 = 90.0;

pub(crate) const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(20);

pub(crate) const DEFAULT_BACKGROUND: Color = Color::from_rgb_u32(0xbdbdbd);

const DEFAULT_COLORS: [Color; 5] = [
    Color::from_rgb_u32(0xf44336),
    Color::from_rgb_u32(0x004d40),
    Color::from_rgb_u32(0xffd600),
    Color::from_rgb_u32(0x00c853),
    Color::from_rgb_u32(0x6200ea),
];

/// The per-frame gap for a leg given the configured step.
pub(crate) fn step_gap(step: f32) -> f32 {
    step / PARTS as f32
}

/// The ordered colors the widget sweeps through, one per node.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS.to_vec() }
    }
}

impl Palette {
    /// Returns `None` when `colors` is empty, as a palette needs at least one node.
    pub(crate) fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() { None } else { Some(Self { colors }) }
    }

    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }

    /// The color for node `index`, wrapping around for out of range indexes.
    pub(crate) fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}
