use serde::Serialize;

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile of a slice sorted in ascending order.
///
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.
/// - Otherwise the position within `[0, len-1]` is rounded to the nearest index.
pub fn percentile_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }

    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        sorted_values.len() - 1
    } else {
        let position = (percentile / 100.0) * (sorted_values.len() as f64 - 1.0);
        position.round() as usize
    };

    sorted_values.get(index).copied()
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DistributionSummary {
    pub mean: f64,
    pub min: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
    pub max: f64,
}

impl DistributionSummary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            mean,
            min: percentile_sorted(&sorted, 0.0)?,
            p5: percentile_sorted(&sorted, 5.0)?,
            p50: percentile_sorted(&sorted, 50.0)?,
            p95: percentile_sorted(&sorted, 95.0)?,
            max: percentile_sorted(&sorted, 100.0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn percentile_sorted_clamps_to_first_and_last() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(percentile_sorted(&values, -1.0), Some(10.0));
        assert_eq!(percentile_sorted(&values, 100.0), Some(30.0));
        assert_eq!(percentile_sorted(&values, 250.0), Some(30.0));
    }

    #[test]
    fn percentile_sorted_uses_rounded_position() {
        // len=21 => p5 sits at position 1.0, p95 at 19.0
        let values: Vec<f64> = (0..21).map(f64::from).collect();
        assert_eq!(percentile_sorted(&values, 5.0), Some(1.0));
        assert_eq!(percentile_sorted(&values, 50.0), Some(10.0));
        assert_eq!(percentile_sorted(&values, 95.0), Some(19.0));
    }

    #[test]
    fn summary_sorts_unsorted_input() {
        let summary = DistributionSummary::from_values(&[0.3, -0.1, 0.2, 0.0, 0.1]).unwrap();
        assert_eq!(summary.min, -0.1);
        assert_eq!(summary.p50, 0.1);
        assert_eq!(summary.max, 0.3);
        assert!((summary.mean - 0.1).abs() < 1e-12);
    }

    #[test]
    fn summary_of_empty_slice_is_none() {
        assert_eq!(DistributionSummary::from_values(&[]), None);
    }
}
