use super::chain::{BarChain, Sweep};
use super::drawing::BarGeometry;
use super::palette::Palette;
use crate::render::{Canvas, Paint};
use tracing::debug;

/// Walks the chain one node per leg, bouncing back at either end.
#[derive(Debug)]
pub(crate) struct BarRotDown {
    chain: BarChain,
    current: usize,
    sweep: Sweep,
    gap: f32,
}

impl BarRotDown {
    pub(crate) fn new(len: usize, gap: f32) -> Self {
        Self { chain: BarChain::new(len), current: 0, sweep: Sweep::Forward, gap }
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    pub(crate) fn sweep(&self) -> Sweep {
        self.sweep
    }

    pub(crate) fn chain(&self) -> &BarChain {
        &self.chain
    }

    pub(crate) fn draw(&self, canvas: &mut dyn Canvas, paint: &mut Paint, palette: &Palette, geometry: &BarGeometry) {
        self.chain.node(self.current).draw(canvas, paint, palette, geometry);
    }

    /// Advance the current node. Once its leg settles the next node becomes current and
    /// `on_settle` receives the settled scale.
    pub(crate) fn update<F>(&mut self, on_settle: F)
    where
        F: FnOnce(f32),
    {
        let mut settled = None;
        self.chain.node_mut(self.current).state.update(self.gap, |scale| settled = Some(scale));
        let Some(scale) = settled else {
            return;
        };
        let settled_node = self.current;
        let mut sweep = self.sweep;
        self.current = self.chain.get_next(self.current, sweep, || sweep = sweep.flipped());
        if sweep != self.sweep {
            debug!("reached the end of the chain at node {settled_node}, now sweeping {sweep:?}");
            self.sweep = sweep;
        }
        debug!("node {settled_node} settled at {scale}, node {} is next", self.current);
        on_settle(scale);
    }

    pub(crate) fn start_updating<F>(&mut self, on_start: F)
    where
        F: FnOnce(),
    {
        self.chain.node_mut(self.current).state.start_updating(on_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle_current(controller: &mut BarRotDown) -> usize {
        let mut started = false;
        controller.start_updating(|| started = true);
        assert!(started, "node {} was not at rest", controller.current());
        let mut settlements = 0;
        for _ in 0..1000 {
            controller.update(|_| settlements += 1);
            if settlements > 0 {
                break;
            }
        }
        assert_eq!(settlements, 1);
        controller.current()
    }

    #[test]
    fn sweeps_forward_then_back() {
        let mut controller = BarRotDown::new(5, 0.01);
        let forward: Vec<_> = (0..5).map(|_| settle_current(&mut controller)).collect();
        assert_eq!(forward, vec![1, 2, 3, 4, 4]);
        assert_eq!(controller.sweep(), Sweep::Backward);

        let backward: Vec<_> = (0..5).map(|_| settle_current(&mut controller)).collect();
        assert_eq!(backward, vec![3, 2, 1, 0, 0]);
        assert_eq!(controller.sweep(), Sweep::Forward);
    }

    #[test]
    fn nodes_keep_their_extreme_across_sweeps() {
        let mut controller = BarRotDown::new(3, 0.1);
        for _ in 0..3 {
            settle_current(&mut controller);
        }
        // last node settled up and is current again, so its next leg goes back down
        assert_eq!(controller.current(), 2);
        assert!((0..3).all(|i| controller.chain().node(i).state.previous_scale == 1.0));
        settle_current(&mut controller);
        assert_eq!(controller.chain().node(2).state.previous_scale, 0.0);
        assert_eq!(controller.current(), 1);
    }

    #[test]
    fn update_mid_leg_stays_on_node() {
        let mut controller = BarRotDown::new(5, 0.01);
        controller.start_updating(|| {});
        let mut settled = false;
        controller.update(|_| settled = true);
        assert!(!settled);
        assert_eq!(controller.current(), 0);
        assert!((controller.chain().node(0).state.scale - 0.01).abs() < 1e-6);
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut controller = BarRotDown::new(5, 0.01);
        controller.start_updating(|| {});
        controller.update(|_| {});
        let mut started = false;
        controller.start_updating(|| started = true);
        assert!(!started);
    }
}
