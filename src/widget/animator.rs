use std::time::Duration;
use tracing::trace;

/// Requests redraws from the host.
///
/// Requests coalesce: any number of them before the next frame result in a single redraw.
pub(crate) trait RedrawScheduler {
    /// Redraw as soon as possible.
    fn request_redraw(&mut self);

    /// Redraw once `delay` has elapsed.
    fn request_redraw_after(&mut self, delay: Duration);
}

/// Keeps the widget redrawing every `delay` while an animation is in flight.
#[derive(Debug)]
pub(crate) struct Animator {
    running: bool,
    delay: Duration,
}

impl Animator {
    pub(crate) fn new(delay: Duration) -> Self {
        Self { running: false, delay }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn start(&mut self, scheduler: &mut dyn RedrawScheduler) {
        if !self.running {
            trace!("animator started");
            self.running = true;
            scheduler.request_redraw();
        }
    }

    pub(crate) fn stop(&mut self) {
        if self.running {
            trace!("animator stopped");
            self.running = false;
        }
    }

    /// Runs one frame's `tick` and schedules the following frame. Does nothing when stopped.
    ///
    /// The follow-up redraw is requested even if `tick` stops the animator, so the settled state
    /// gets drawn; that frame finds the animator stopped and schedules nothing more.
    pub(crate) fn animate<F>(&mut self, scheduler: &mut dyn RedrawScheduler, tick: F)
    where
        F: FnOnce(&mut Self),
    {
        if self.running {
            tick(self);
            scheduler.request_redraw_after(self.delay);
        }
    }
}
