//! Density encoding and axis helpers for plot consumers
//!
//! Stateless utilities shared by 1D bar, 2D scatter, and 3D scatter
//! consumers: exponential density-to-size interpolation, tick rounding,
//! and padded display limits. The rounding rule is round-half-even at
//! one decimal, with values above 10 rounded to the nearest integer,
//! and is reproduced exactly for test reproducibility.

/// Map a normalized density in [0, 1] to a visual size
///
/// Exponential interpolation: `min_size * (max_size / min_size)^density`.
/// A density of 1.0 yields max_size exactly and a density of 0.0 yields
/// min_size exactly.
pub fn size_for(density: f64, min_size: f64, max_size: f64) -> f64 {
    min_size * (max_size / min_size).powf(density)
}

/// Map a density slice to visual sizes over a (min, max) size range
pub fn density_sizes(densities: &[f64], size_range: (f64, f64)) -> Vec<f64> {
    let (min_size, max_size) = size_range;
    densities
        .iter()
        .map(|&d| size_for(d, min_size, max_size))
        .collect()
}

/// Round one tick value: half-even at `decimals`, then values above 10
/// to the nearest integer
fn round_tick(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round_ties_even() / scale;
    if rounded > 10.0 {
        rounded.round_ties_even()
    } else {
        rounded
    }
}

/// Round a numeric range's endpoints into display ticks
pub fn range_to_ticks(range: (f64, f64), decimals: i32) -> (f64, f64) {
    (round_tick(range.0, decimals), round_tick(range.1, decimals))
}

/// Ticks at n evenly spaced points over the range, rounded for display
pub fn linspace_ticks(range: (f64, f64), n: usize) -> Vec<f64> {
    let (low, high) = range;
    if n <= 1 {
        return vec![round_tick(low, 1)];
    }
    (0..n)
        .map(|i| low + (high - low) * i as f64 / (n - 1) as f64)
        .map(|t| round_tick(t, 1))
        .collect()
}

/// Display limits padded by 10% of the span on both sides
pub fn pad_both(range: (f64, f64)) -> (f64, f64) {
    let unit = 0.1 * (range.1 - range.0);
    (range.0 - unit, range.1 + unit)
}

/// Display limits padded by 10% of the span on the high side only
///
/// Used for the density axis of bar plots, where the baseline stays
/// anchored at the low end.
pub fn pad_high(range: (f64, f64)) -> (f64, f64) {
    let unit = 0.1 * (range.1 - range.0);
    (range.0, range.1 + unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_size_for_endpoints_exact() {
        assert_eq!(size_for(1.0, 10.0, 100.0), 100.0);
        assert_eq!(size_for(0.0, 10.0, 100.0), 10.0);
    }

    #[test]
    fn test_size_for_is_monotonic() {
        let sizes = density_sizes(&[0.0, 0.25, 0.5, 0.75, 1.0], (10.0, 100.0));
        for pair in sizes.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        // Midpoint of the exponential curve is the geometric mean
        assert_relative_eq!(sizes[2], (10.0f64 * 100.0).sqrt());
    }

    #[test]
    fn test_tick_rounding_rule() {
        // One decimal below 10
        assert_relative_eq!(round_tick(0.123, 1), 0.1);
        assert_relative_eq!(round_tick(9.96, 1), 10.0);
        // Above 10 snaps to integers
        assert_relative_eq!(round_tick(87.66, 1), 88.0);
        assert_relative_eq!(round_tick(-37.2, 1), -37.2);
        // Half-even at the decimal boundary, matching numpy around
        assert_relative_eq!(round_tick(0.25, 1), 0.2);
        assert_relative_eq!(round_tick(0.75, 1), 0.8);
    }

    #[test]
    fn test_range_to_ticks() {
        let ticks = range_to_ticks((0.04, 99.96), 1);
        assert_relative_eq!(ticks.0, 0.0);
        assert_relative_eq!(ticks.1, 100.0);
    }

    #[test]
    fn test_linspace_ticks() {
        let ticks = linspace_ticks((0.0, 1.0), 4);
        assert_eq!(ticks.len(), 4);
        assert_relative_eq!(ticks[0], 0.0);
        assert_relative_eq!(ticks[1], 0.3);
        assert_relative_eq!(ticks[2], 0.7);
        assert_relative_eq!(ticks[3], 1.0);
    }

    #[test]
    fn test_padded_limits() {
        let (low, high) = pad_both((0.0, 10.0));
        assert_relative_eq!(low, -1.0);
        assert_relative_eq!(high, 11.0);

        let (low, high) = pad_high((0.0, 1.0));
        assert_relative_eq!(low, 0.0);
        assert_relative_eq!(high, 1.1);
    }
}
