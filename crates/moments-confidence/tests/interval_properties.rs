use moments_confidence::{
    mean_interval_known_variance, mean_interval_unknown_variance, variance_interval,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn variance_interval_widens_monotonically(
        n in 2u32..500,
        variance in 1e-3f64..1e4,
        c1 in 0.05f64..0.95,
        delta in 0.001f64..0.04,
    ) {
        let c2 = c1 + delta;
        let narrow = variance_interval(n as f64, variance, c1).unwrap();
        let wide = variance_interval(n as f64, variance, c2).unwrap();

        prop_assert!(wide.upper > narrow.upper);
        prop_assert!(wide.lower < narrow.lower);
    }

    #[test]
    fn mean_intervals_are_symmetric(
        n in 2u32..1000,
        mean in -1e3f64..1e3,
        variance in 0.0f64..1e3,
        c in 0.01f64..0.99,
    ) {
        for ci in [
            mean_interval_known_variance(n as f64, mean, variance, c).unwrap(),
            mean_interval_unknown_variance(n as f64, mean, variance, c).unwrap(),
        ] {
            prop_assert!(ci.lower <= mean && mean <= ci.upper);
            let left = mean - ci.lower;
            let right = ci.upper - mean;
            prop_assert!((left - right).abs() <= 1e-9 * left.max(1.0));
        }
    }
}
