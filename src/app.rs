use crate::render::terminal::{raster_size, TerminalGuard, TerminalSurface};
use crate::render::Raster;
use crate::view::BarRotDownView;
use crate::widget::WidgetSettings;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use crossterm::terminal;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long to wait for input when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a terminal event means to the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Tap,
    Resize(u16, u16),
    Quit,
}

impl Input {
    fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(KeyEvent { kind: KeyEventKind::Release, .. }) => None,
            Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers, .. })
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Self::Quit)
            }
            Event::Key(KeyEvent { code: KeyCode::Char('q') | KeyCode::Esc, .. }) => Some(Self::Quit),
            Event::Key(KeyEvent { code: KeyCode::Char(' ') | KeyCode::Enter, .. }) => Some(Self::Tap),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => Some(Self::Tap),
            Event::Resize(columns, rows) => Some(Self::Resize(columns, rows)),
            _ => None,
        }
    }
}

/// Runs the widget full screen until the user quits.
pub(crate) fn run_interactive(settings: WidgetSettings) -> anyhow::Result<()> {
    let (columns, rows) = terminal::size().context("querying terminal size")?;
    let (width, height) = raster_size(columns, rows);
    let mut raster = Raster::new(width, height);
    let mut view = BarRotDownView::new(settings);
    let _guard = TerminalGuard::enter().context("setting up terminal")?;
    let mut surface = TerminalSurface::new(io::stdout());
    info!("running interactively on a {columns}x{rows} terminal");

    view.invalidate();
    loop {
        if view.draw_if_due(&mut raster, Instant::now()) {
            surface.present(&raster).context("drawing frame")?;
        }
        let timeout = view.time_until_next_frame(Instant::now()).unwrap_or(IDLE_POLL);
        if !event::poll(timeout).context("polling terminal events")? {
            continue;
        }
        let event = event::read().context("reading terminal event")?;
        match Input::from_event(event) {
            Some(Input::Tap) => {
                view.on_tap();
            }
            Some(Input::Resize(columns, rows)) => {
                debug!("terminal resized to {columns}x{rows}");
                let (width, height) = raster_size(columns, rows);
                raster.resize(width, height);
                view.invalidate();
            }
            Some(Input::Quit) => break,
            None => {}
        }
    }
    Ok(())
}

/// Runs `taps` legs off-screen on a `width` by `height` raster, writing a line per leg and the
/// final frame as text to `output`.
pub(crate) fn run_headless<W: Write>(
    settings: WidgetSettings,
    width: usize,
    height: usize,
    taps: usize,
    output: &mut W,
) -> anyhow::Result<()> {
    let mut raster = Raster::new(width, height);
    let mut view = BarRotDownView::new(settings);
    let background = view.renderer().background();
    info!("running {taps} tap(s) headless on a {width}x{height} raster");

    view.invalidate();
    view.drain(&mut raster);
    for tap in 1..=taps {
        let node = view.renderer().controller().current();
        let frames = if view.on_tap() { view.drain(&mut raster) } else { 0 };
        let controller = view.renderer().controller();
        writeln!(
            output,
            "tap {tap}: node {node} settled at {} after {frames} frames, node {} is next ({:?})",
            controller.chain().node(node).state.previous_scale,
            controller.current(),
            controller.sweep(),
        )?;
    }
    write!(output, "{}", raster.to_ascii(background))?;
    output.flush()?;
    debug!("headless run finished on node {}", view.renderer().controller().current());
    Ok(())
}
