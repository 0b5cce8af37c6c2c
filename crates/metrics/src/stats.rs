//! Descriptive statistics over sample sets.
//!
//! Every function returns 0.0 for an empty set instead of NaN. `max` comes
//! from statrs; the mean sums with compensation so the last digit is stable.

use ordered_float::OrderedFloat;
use statrs::statistics::Statistics;

/// Arithmetic mean over a compensated (Kahan) sum.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    compensated_sum(values) / values.len() as f64
}

fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    let mut naive = 0.0;
    for &value in values {
        naive += value;
        let adjusted = value - compensation;
        let next = sum + adjusted;
        compensation = (next - sum) - adjusted;
        sum = next;
    }
    // compensation goes NaN once an infinity is summed
    if sum.is_nan() && naive.is_infinite() {
        naive
    } else {
        sum
    }
}

/// Largest value.
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::max(values)
}

/// Median: middle element for an odd count, mean of the two middle
/// elements for an even count.
pub fn median(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));

    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Share of `count` in `total` as a percentage, `None` when `total` is zero.
pub fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some((count as f64 / total as f64) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_rules() {
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[7.5]), 7.5);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
        assert_eq!(median(&[4.0, -1.0, 10.0, 2.0]), 3.0);
    }

    #[test]
    fn test_mean_and_max() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(max(&[]), 0.0);
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_relative_eq!(max(&[3.0, 9.5, -2.0]), 9.5);
        assert_relative_eq!(max(&[-3.0, -1.0]), -1.0);
    }

    #[test]
    fn test_mean_is_compensated() {
        assert_eq!(mean(&[0.01, 0.02, 0.01]), 0.013333333333333334);
        assert_eq!(mean(&[0.1; 10]), 0.1);
        assert_eq!(mean(&[1.0, f64::INFINITY]), f64::INFINITY);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(2, 4), Some(50.0));
        assert_eq!(percentage(3, 3), Some(100.0));
    }
}
