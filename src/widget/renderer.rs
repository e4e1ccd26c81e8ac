use super::animator::{Animator, RedrawScheduler};
use super::controller::BarRotDown;
use super::drawing::BarGeometry;
use super::palette::{step_gap, Palette, DEFAULT_BACKGROUND, DEFAULT_FRAME_DELAY, DEFAULT_STEP};
use crate::render::{Canvas, Color, Paint};
use std::time::Duration;
use tracing::{debug, trace};

/// Everything needed to build a widget.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WidgetSettings {
    pub(crate) palette: Palette,
    pub(crate) background: Color,
    /// Scale advanced per frame during a leg.
    pub(crate) gap: f32,
    pub(crate) frame_delay: Duration,
    pub(crate) geometry: BarGeometry,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            background: DEFAULT_BACKGROUND,
            gap: step_gap(DEFAULT_STEP),
            frame_delay: DEFAULT_FRAME_DELAY,
            geometry: BarGeometry::default(),
        }
    }
}

/// Draws frames and reacts to taps.
#[derive(Debug)]
pub(crate) struct Renderer {
    palette: Palette,
    background: Color,
    geometry: BarGeometry,
    paint: Paint,
    animator: Animator,
    controller: BarRotDown,
}

impl Renderer {
    pub(crate) fn new(settings: WidgetSettings) -> Self {
        let WidgetSettings { palette, background, gap, frame_delay, geometry } = settings;
        let controller = BarRotDown::new(palette.len(), gap);
        let paint = Paint::new(palette.color(0));
        Self { palette, background, geometry, paint, animator: Animator::new(frame_delay), controller }
    }

    pub(crate) fn background(&self) -> Color {
        self.background
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub(crate) fn controller(&self) -> &BarRotDown {
        &self.controller
    }

    /// Draw one frame and, while animating, advance the current node by one step.
    pub(crate) fn render(&mut self, canvas: &mut dyn Canvas, scheduler: &mut dyn RedrawScheduler) {
        trace!("rendering node {}", self.controller.current());
        canvas.fill(self.background);
        self.controller.draw(canvas, &mut self.paint, &self.palette, &self.geometry);
        let controller = &mut self.controller;
        self.animator.animate(scheduler, |animator| controller.update(|_| animator.stop()));
    }

    /// Starts a leg on the current node. Returns whether one was started, which is not the case
    /// while a leg is already in flight.
    pub(crate) fn handle_tap(&mut self, scheduler: &mut dyn RedrawScheduler) -> bool {
        let animator = &mut self.animator;
        let mut started = false;
        self.controller.start_updating(|| {
            animator.start(scheduler);
            started = true;
        });
        if started {
            debug!("tap started a leg on node {}", self.controller.current());
        } else {
            debug!("tap ignored, node {} is still animating", self.controller.current());
        }
        started
    }
}
