mod canvas;
mod color;
mod raster;
pub(crate) mod terminal;

pub(crate) use canvas::{Canvas, Paint, Rect, SavedCanvas};
pub(crate) use color::Color;
pub(crate) use raster::Raster;
