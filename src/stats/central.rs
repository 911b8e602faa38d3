//! Measures of central tendency.

use std::collections::HashMap;

use super::Sample;

/// Arithmetic mean, summed left to right.
pub fn mean(sample: &Sample) -> f64 {
    let mut total = 0.0;
    for value in sample.values() {
        total += value;
    }
    total / sample.len() as f64
}

/// Median of the sample.
///
/// Odd lengths return the middle element of the sorted values, even lengths
/// the average of the two middle elements.
pub fn median(sample: &Sample) -> f64 {
    let mut sorted = sample.values().to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value, or `None` when no value repeats.
///
/// When several values share the highest count, the one that first appears
/// earliest in the sample wins.
pub fn mode(sample: &Sample) -> Option<f64> {
    // Distinct values in first-occurrence order, with their counts.
    let mut tallies: Vec<(f64, usize)> = Vec::new();
    let mut positions: HashMap<u64, usize> = HashMap::new();

    for &value in sample.values() {
        let key = value_key(value);
        match positions.get(&key) {
            Some(&idx) => tallies[idx].1 += 1,
            None => {
                positions.insert(key, tallies.len());
                tallies.push((value, 1));
            }
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for &(value, count) in &tallies {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.filter(|&(_, count)| count > 1).map(|(value, _)| value)
}

/// Hash key under which equal values collide; `-0.0` and `0.0` are one value.
fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[f64]) -> Sample {
        Sample::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&sample(&[1.0, 2.0, 3.0, 4.0])), 2.5);
        assert_eq!(mean(&sample(&[-3.0])), -3.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&sample(&[9.0, 1.0, 5.0])), 5.0);
        assert_eq!(median(&sample(&[4.0, 1.0, 3.0, 2.0])), 2.5);
        assert_eq!(median(&sample(&[7.0])), 7.0);
    }

    #[test]
    fn test_median_does_not_reorder_sample() {
        let s = sample(&[3.0, 1.0, 2.0]);
        median(&s);
        assert_eq!(s.values(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mode_none_when_all_unique() {
        assert_eq!(mode(&sample(&[1.0, 2.0, 3.0])), None);
        assert_eq!(mode(&sample(&[42.0])), None);
    }

    #[test]
    fn test_mode_strict_maximum() {
        assert_eq!(mode(&sample(&[1.0, 2.0, 2.0, 3.0, 2.0, 1.0])), Some(2.0));
    }

    #[test]
    fn test_mode_tie_prefers_first_occurrence() {
        // 8, 5 and 2 all occur twice; 8 shows up first.
        let s = sample(&[4.0, 8.0, 6.0, 5.0, 3.0, 2.0, 8.0, 9.0, 2.0, 5.0]);
        assert_eq!(mode(&s), Some(8.0));

        let s = sample(&[3.0, 1.0, 1.0, 3.0]);
        assert_eq!(mode(&s), Some(3.0));
    }

    #[test]
    fn test_mode_treats_signed_zero_as_equal() {
        assert_eq!(mode(&sample(&[-0.0, 1.0, 0.0])), Some(-0.0));
    }
}
