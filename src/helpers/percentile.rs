use ordered_float::NotNan;

/// Nearest-rank percentile, `p` in `[0, 1]`.
///
/// Returns `None` for an empty sample or one containing NaN.
pub fn percentile (values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0. ..=1.).contains(&p) {
        return None;
    }
    let mut sorted = values.iter()
        .map(|&v| NotNan::new(v).ok())
        .collect::<Option<Vec<NotNan<f64>>>>()?;
    sorted.sort();

    let rank = (p * sorted.len() as f64).ceil() as usize;
    let index = rank.saturating_sub(1).min(sorted.len() - 1);
    Some(sorted[index].into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_rank() {
        let values: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        assert_eq!(percentile(&values, 0.95), Some(19.));
        assert_eq!(percentile(&values, 0.5), Some(10.));
        assert_eq!(percentile(&values, 1.), Some(20.));
        assert_eq!(percentile(&values, 0.), Some(1.));
    }

    #[test]
    fn unsorted_input() {
        assert_eq!(percentile(&[3., 1., 2.], 0.5), Some(2.));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(percentile(&[], 0.5), None);
        assert_eq!(percentile(&[1., f64::NAN], 0.5), None);
        assert_eq!(percentile(&[1.], 1.5), None);
    }
}
