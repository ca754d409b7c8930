//! Shared numeric helpers. Every rate and average in the pipeline
//! resolves a zero denominator to 0, never NaN.

/// Average of an engagement total over an item count.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn per_item(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Ratio of two totals; 0 for a non-positive denominator.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn rate(numerator: i64, denominator: i64) -> f64 {
    if denominator <= 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `part / whole * 100`; 0 when `whole` is 0.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_item_zero_count_is_zero() {
        assert!((per_item(100, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rate_zero_denominator_is_zero() {
        assert!((rate(50, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rate_can_exceed_one() {
        assert!((rate(150, 100) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_zero_whole_is_zero() {
        assert!((percentage(3, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_half() {
        assert!((percentage(1, 2) - 50.0).abs() < f64::EPSILON);
    }
}
