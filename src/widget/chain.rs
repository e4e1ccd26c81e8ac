use super::drawing::{draw_bar_rot_down, BarGeometry};
use super::palette::Palette;
use super::state::AnimationState;
use crate::render::{Canvas, Paint};

/// Which way the sequence walks the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sweep {
    Forward,
    Backward,
}

impl Sweep {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// One palette entry in the chain.
#[derive(Clone, Debug)]
pub(crate) struct BarNode {
    pub(crate) index: usize,
    pub(crate) state: AnimationState,
    next: Option<usize>,
    prev: Option<usize>,
}

impl BarNode {
    fn new(index: usize, len: usize) -> Self {
        Self {
            index,
            state: AnimationState::default(),
            next: (index + 1 < len).then_some(index + 1),
            prev: index.checked_sub(1),
        }
    }

    pub(crate) fn draw(&self, canvas: &mut dyn Canvas, paint: &mut Paint, palette: &Palette, geometry: &BarGeometry) {
        paint.color = palette.color(self.index);
        draw_bar_rot_down(canvas, self.state.scale, paint, geometry);
    }
}

/// The nodes of the widget, one per palette color, linked to their neighbors by index.
///
/// Nodes are built once and live as long as the chain, so each keeps its resting extreme across
/// sweeps.
#[derive(Clone, Debug)]
pub(crate) struct BarChain {
    nodes: Vec<BarNode>,
}

impl BarChain {
    pub(crate) fn new(len: usize) -> Self {
        Self { nodes: (0..len).map(|index| BarNode::new(index, len)).collect() }
    }

    pub(crate) fn node(&self, index: usize) -> &BarNode {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut BarNode {
        &mut self.nodes[index]
    }

    /// The neighbor of `at` in the `sweep` direction. At either end of the chain `on_exhausted`
    /// is invoked and `at` itself is returned.
    pub(crate) fn get_next<F>(&self, at: usize, sweep: Sweep, on_exhausted: F) -> usize
    where
        F: FnOnce(),
    {
        let node = &self.nodes[at];
        let neighbor = match sweep {
            Sweep::Backward => node.prev,
            Sweep::Forward => node.next,
        };
        match neighbor {
            Some(index) => index,
            None => {
                on_exhausted();
                at
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn links() {
        let chain = BarChain::new(5);
        assert_eq!(chain.nodes.len(), 5);
        assert_eq!(chain.node(0).prev, None);
        assert_eq!(chain.node(0).next, Some(1));
        assert_eq!(chain.node(3).prev, Some(2));
        assert_eq!(chain.node(4).next, None);
        assert!(chain.nodes.iter().enumerate().all(|(i, node)| node.index == i && node.state.is_at_rest()));
    }

    #[rstest]
    #[case::forward(2, Sweep::Forward, 3, false)]
    #[case::backward(2, Sweep::Backward, 1, false)]
    #[case::last_forward(4, Sweep::Forward, 4, true)]
    #[case::first_backward(0, Sweep::Backward, 0, true)]
    #[case::first_forward(0, Sweep::Forward, 1, false)]
    fn get_next(#[case] at: usize, #[case] sweep: Sweep, #[case] expected: usize, #[case] exhausted: bool) {
        let chain = BarChain::new(5);
        let mut called = false;
        assert_eq!(chain.get_next(at, sweep, || called = true), expected);
        assert_eq!(called, exhausted);
    }

    #[test]
    fn single_node_is_both_ends() {
        let chain = BarChain::new(1);
        let mut calls = 0;
        assert_eq!(chain.get_next(0, Sweep::Forward, || calls += 1), 0);
        assert_eq!(chain.get_next(0, Sweep::Backward, || calls += 1), 0);
        assert_eq!(calls, 2);
    }

    #[test]
    fn sweep_flips() {
        assert_eq!(Sweep::Forward.flipped(), Sweep::Backward);
        assert_eq!(Sweep::Backward.flipped(), Sweep::Forward);
    }
}
