use crate::render::Canvas;
use crate::widget::{RedrawScheduler, Renderer, WidgetSettings};
use std::time::{Duration, Instant};
use tracing::debug;

/// A redraw the host owes the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingRedraw {
    Immediate,
    At(Instant),
}

/// Host side [RedrawScheduler] backed by a single deadline.
///
/// Only the earliest outstanding request is kept, so requests made while another one is pending
/// are coalesced into one frame.
#[derive(Debug, Default)]
pub(crate) struct FrameScheduler {
    pending: Option<PendingRedraw>,
}

impl FrameScheduler {
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How long until the pending redraw is due, `None` if there's nothing pending.
    pub(crate) fn time_until_due(&self, now: Instant) -> Option<Duration> {
        match self.pending? {
            PendingRedraw::Immediate => Some(Duration::ZERO),
            PendingRedraw::At(deadline) => Some(deadline.saturating_duration_since(now)),
        }
    }

    /// Consumes the pending redraw if it's due at `now`.
    pub(crate) fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(PendingRedraw::Immediate) => {}
            Some(PendingRedraw::At(deadline)) if deadline <= now => {}
            _ => return false,
        };
        self.pending = None;
        true
    }

    /// Consumes the pending redraw regardless of its deadline.
    pub(crate) fn take_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    fn schedule(&mut self, redraw: PendingRedraw) {
        self.pending = match (self.pending, redraw) {
            (Some(PendingRedraw::Immediate), _) | (_, PendingRedraw::Immediate) => Some(PendingRedraw::Immediate),
            (Some(PendingRedraw::At(current)), PendingRedraw::At(new)) => Some(PendingRedraw::At(current.min(new))),
            (None, redraw) => Some(redraw),
        };
    }
}

impl RedrawScheduler for FrameScheduler {
    fn request_redraw(&mut self) {
        self.schedule(PendingRedraw::Immediate);
    }

    fn request_redraw_after(&mut self, delay: Duration) {
        self.schedule(PendingRedraw::At(Instant::now() + delay));
    }
}

/// The widget as the host sees it: something to draw and something to tap.
#[derive(Debug)]
pub(crate) struct BarRotDownView {
    renderer: Renderer,
    scheduler: FrameScheduler,
}

impl BarRotDownView {
    pub(crate) fn new(settings: WidgetSettings) -> Self {
        Self { renderer: Renderer::new(settings), scheduler: FrameScheduler::default() }
    }

    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Draws the current frame.
    pub(crate) fn on_draw(&mut self, canvas: &mut dyn Canvas) {
        self.renderer.render(canvas, &mut self.scheduler);
    }

    pub(crate) fn on_tap(&mut self) -> bool {
        self.renderer.handle_tap(&mut self.scheduler)
    }

    /// Asks for a redraw without advancing anything, e.g. after the surface is resized.
    pub(crate) fn invalidate(&mut self) {
        self.scheduler.request_redraw();
    }

    /// Draws into `canvas` if a redraw is due at `now`. Returns whether anything was drawn.
    pub(crate) fn draw_if_due(&mut self, canvas: &mut dyn Canvas, now: Instant) -> bool {
        if self.scheduler.take_due(now) {
            self.on_draw(canvas);
            true
        } else {
            false
        }
    }

    /// Draws every outstanding frame back to back, ignoring deadlines. Returns how many frames
    /// were drawn.
    pub(crate) fn drain(&mut self, canvas: &mut dyn Canvas) -> usize {
        let mut frames = 0;
        while self.scheduler.take_pending() {
            self.on_draw(canvas);
            frames += 1;
        }
        frames
    }

    pub(crate) fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }
}

impl Drop for BarRotDownView {
    fn drop(&mut self) {
        if self.renderer.is_animating() || self.scheduler.is_pending() {
            debug!("view torn down mid animation, cancelling pending redraw");
        }
        self.scheduler.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Raster;
    use crate::widget::Palette;

    #[test]
    fn immediate_request_wins() {
        let mut scheduler = FrameScheduler::default();
        scheduler.request_redraw_after(Duration::from_secs(60));
        scheduler.request_redraw();
        assert_eq!(scheduler.time_until_due(Instant::now()), Some(Duration::ZERO));
        assert!(scheduler.take_due(Instant::now()));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn earliest_deadline_is_kept() {
        let mut scheduler = FrameScheduler::default();
        let now = Instant::now();
        scheduler.schedule(PendingRedraw::At(now + Duration::from_millis(50)));
        scheduler.schedule(PendingRedraw::At(now + Duration::from_millis(20)));
        assert_eq!(scheduler.time_until_due(now), Some(Duration::from_millis(20)));
        assert!(!scheduler.take_due(now));
        assert!(scheduler.take_due(now + Duration::from_millis(20)));
    }

    #[test]
    fn nothing_pending() {
        let mut scheduler = FrameScheduler::default();
        assert_eq!(scheduler.time_until_due(Instant::now()), None);
        assert!(!scheduler.take_due(Instant::now()));
        assert!(!scheduler.take_pending());
    }

    #[test]
    fn cancel_drops_request() {
        let mut scheduler = FrameScheduler::default();
        scheduler.request_redraw();
        scheduler.cancel();
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn tap_then_drain_runs_one_leg() {
        let mut view = BarRotDownView::new(WidgetSettings::default());
        let mut raster = Raster::new(20, 20);
        assert!(view.on_tap());
        // one frame per step, plus the final frame showing the settled state
        assert_eq!(view.drain(&mut raster), 101);
        assert!(!view.renderer().is_animating());
        assert!(!view.scheduler.is_pending());
        assert_eq!(view.renderer().controller().current(), 1);
    }

    #[test]
    fn draw_if_due_only_draws_when_requested() {
        let mut view = BarRotDownView::new(WidgetSettings::default());
        let mut raster = Raster::new(20, 20);
        assert!(!view.draw_if_due(&mut raster, Instant::now()));
        view.invalidate();
        assert!(view.draw_if_due(&mut raster, Instant::now()));
        assert_eq!(raster.pixel(9, 0), Some(Palette::default().color(0)));
        assert!(!view.scheduler.is_pending());
    }
}
