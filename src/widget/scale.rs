/// How far `value` has progressed past the start of sub-phase `i` out of `n`, never negative.
pub(crate) fn max_scale(value: f32, i: usize, n: usize) -> f32 {
    (value - i as f32 / n as f32).max(0.0)
}

/// Progress within sub-phase `i` out of `n` for a global progress `value`.
///
/// Stays at 0 until the sub-phase begins, rises linearly to 1 while `value` sweeps through
/// `[i/n, (i+1)/n)` and saturates at 1 afterwards.
pub(crate) fn divide_scale(value: f32, i: usize, n: usize) -> f32 {
    let part = 1.0 / n as f32;
    part.min(max_scale(value, i, n)) * n as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first_phase_start(0.0, 0, 2, 0.0)]
    #[case::first_phase_middle(0.25, 0, 2, 0.5)]
    #[case::first_phase_saturated(0.75, 0, 2, 1.0)]
    #[case::second_phase_not_started(0.25, 1, 2, 0.0)]
    #[case::second_phase_boundary(0.5, 1, 2, 0.0)]
    #[case::second_phase_middle(0.75, 1, 2, 0.5)]
    #[case::second_phase_end(1.0, 1, 2, 1.0)]
    #[case::single_phase(0.3, 0, 1, 0.3)]
    fn divides(#[case] value: f32, #[case] i: usize, #[case] n: usize, #[case] expected: f32) {
        assert!((divide_scale(value, i, n) - expected).abs() < 1e-6);
    }

    #[rstest]
    #[case(0, 2)]
    #[case(1, 2)]
    #[case(0, 3)]
    #[case(2, 3)]
    #[case(4, 5)]
    fn monotone_and_bounded(#[case] i: usize, #[case] n: usize) {
        let start = i as f32 / n as f32;
        let end = (i + 1) as f32 / n as f32;
        let mut last = 0.0;
        for step in 0..=1000 {
            let value = step as f32 / 1000.0;
            let scale = divide_scale(value, i, n);
            assert!(scale >= last, "not monotone at {value}");
            if value <= start {
                assert_eq!(scale, 0.0);
            }
            if value >= end {
                assert!((scale - 1.0).abs() < 1e-5, "not saturated at {value}: {scale}");
            }
            last = scale;
        }
    }

    #[test]
    fn max_scale_clamps_at_zero() {
        assert_eq!(max_scale(0.1, 1, 2), 0.0);
        assert!((max_scale(0.9, 1, 2) - 0.4).abs() < 1e-6);
    }
}
