/// The animation state of a single node.
///
/// A leg moves `scale` one full unit away from `previous_scale`, in `direction`. A `direction` of
/// zero means the node is at rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct AnimationState {
    pub(crate) scale: f32,
    pub(crate) direction: f32,
    pub(crate) previous_scale: f32,
    /// Updates applied during the current leg.
    steps: u32,
}

/// Updates needed to cover a full unit at `gap` per update.
fn steps_per_leg(gap: f32) -> u32 {
    (1.0 / gap).ceil() as u32
}

impl AnimationState {
    pub(crate) fn is_at_rest(&self) -> bool {
        self.direction == 0.0
    }

    /// Advance by `gap`, invoking `on_settle` with the new resting scale once the leg completes.
    ///
    /// A leg completes after `ceil(1 / gap)` updates, or earlier if `scale` has already moved past
    /// a full unit. Counting updates keeps rounding in the accumulated scale from moving
    /// settlement by a frame either way.
    pub(crate) fn update<F>(&mut self, gap: f32, on_settle: F)
    where
        F: FnOnce(f32),
    {
        if self.is_at_rest() {
            return;
        }
        self.scale += gap * self.direction;
        self.steps += 1;
        if self.steps >= steps_per_leg(gap) || (self.scale - self.previous_scale).abs() > 1.0 {
            self.scale = self.previous_scale + self.direction;
            self.direction = 0.0;
            self.previous_scale = self.scale;
            self.steps = 0;
            on_settle(self.previous_scale);
        }
    }

    /// Start a leg away from the extreme the node rests at. Does nothing while a leg is running.
    pub(crate) fn start_updating<F>(&mut self, on_start: F)
    where
        F: FnOnce(),
    {
        if self.is_at_rest() {
            self.direction = 1.0 - 2.0 * self.previous_scale;
            self.steps = 0;
            on_start();
        }
    }
}
