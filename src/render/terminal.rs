use super::color::Color;
use super::raster::Raster;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tracing::warn;

/// Each terminal cell shows two pixels: the top one as the foreground of this glyph, the bottom
/// one as its background.
const HALF_BLOCK: char = '▀';

/// The raster size that covers a terminal of `columns` by `rows` cells.
pub(crate) fn raster_size(columns: u16, rows: u16) -> (usize, usize) {
    (columns as usize, rows as usize * 2)
}

/// Puts the terminal in raw mode on an alternate screen with mouse capture, and undoes all of it
/// when dropped.
pub(crate) struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub(crate) fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, DisableMouseCapture, LeaveAlternateScreen) {
            warn!("failed to restore terminal screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Writes rasters to a terminal.
pub(crate) struct TerminalSurface<W: Write> {
    writer: W,
}

impl<W: Write> TerminalSurface<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }

    pub(crate) fn present(&mut self, raster: &Raster) -> io::Result<()> {
        let (width, height) = raster.dimensions();
        let mut current: Option<(Color, Color)> = None;
        for row in 0..height.div_ceil(2) {
            queue!(self.writer, cursor::MoveTo(0, row as u16))?;
            for x in 0..width {
                let Some(top) = raster.pixel(x, row * 2) else {
                    continue;
                };
                let bottom = raster.pixel(x, row * 2 + 1).unwrap_or(top);
                if current != Some((top, bottom)) {
                    queue!(self.writer, SetForegroundColor(top.into()), SetBackgroundColor(bottom.into()))?;
                    current = Some((top, bottom));
                }
                queue!(self.writer, Print(HALF_BLOCK))?;
            }
        }
        queue!(self.writer, ResetColor)?;
        self.writer.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Canvas;

    #[test]
    fn presents_two_pixels_per_cell() {
        let mut raster = Raster::new(3, 4);
        raster.fill(Color::new(1, 2, 3));
        let mut surface = TerminalSurface::new(Vec::new());
        surface.present(&raster).expect("present failed");
        let output = String::from_utf8(surface.into_inner()).expect("not utf8");
        assert_eq!(output.matches(HALF_BLOCK).count(), 6);
        // a uniform raster only needs its colors set once
        assert_eq!(output.matches("38;2;1;2;3").count(), 1);
    }

    #[test]
    fn odd_height_reuses_top_pixel() {
        let mut raster = Raster::new(2, 3);
        raster.fill(Color::new(9, 9, 9));
        let mut surface = TerminalSurface::new(Vec::new());
        surface.present(&raster).expect("present failed");
        let output = String::from_utf8(surface.into_inner()).expect("not utf8");
        assert_eq!(output.matches(HALF_BLOCK).count(), 4);
    }

    #[test]
    fn raster_covers_terminal() {
        assert_eq!(raster_size(80, 24), (80, 48));
    }
}
