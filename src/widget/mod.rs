mod animator;
mod chain;
mod controller;
mod drawing;
mod palette;
mod renderer;
mod scale;
mod state;

pub(crate) use animator::RedrawScheduler;
pub(crate) use drawing::BarGeometry;
pub(crate) use palette::{
    step_gap, Palette, DEFAULT_BACKGROUND, DEFAULT_FRAME_DELAY, DEFAULT_ROTATION_DEGREES, DEFAULT_SIZE_FACTOR,
    DEFAULT_STEP,
};
pub(crate) use renderer::{Renderer, WidgetSettings};
