//! Sample and error statistics for behavior accuracy tests.

/// Mean and population variance of a sample.
///
/// An empty sample yields NaN for both.
pub fn statistics(samples: &[f32]) -> (f32, f32) {
    let n = samples.len() as f32;
    let mean = samples.iter().sum::<f32>() / n;
    let var = samples.iter().map(|y| (y - mean) * (y - mean)).sum::<f32>() / n;
    (mean, var)
}

/// Error statistics over (expected, actual) pairs.
///
/// Returns the mean absolute difference over n and the squared-difference
/// variance over n - 2. The variance divisor requires at least three
/// pairs to be meaningful; callers validate the sample count.
pub fn error_stats(pairs: &[(f32, f32)]) -> (f32, f32) {
    let n = pairs.len() as f32;
    let err_mean = pairs.iter().map(|(e, a)| (e - a).abs()).sum::<f32>() / n;
    let err_var = pairs.iter().map(|(e, a)| (e - a) * (e - a)).sum::<f32>() / (n - 2.0);
    (err_mean, err_var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_statistics() {
        let (mean, var) = statistics(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(mean, 2.5);
        assert_relative_eq!(var, 1.25);

        let (mean, var) = statistics(&[1.1, 2.1, 3.1, 4.1]);
        assert_relative_eq!(mean, 2.6);
        assert_relative_eq!(var, 1.25, epsilon = 1e-5);
    }

    #[test]
    fn test_error_stats() {
        let pairs = [(1.0, 1.1), (2.0, 2.1), (3.0, 3.1), (4.0, 4.1)];
        let (err_mean, err_var) = error_stats(&pairs);
        assert_relative_eq!(err_mean, 0.1, epsilon = 1e-5);
        assert_relative_eq!(err_var, 0.02, epsilon = 1e-5);
    }

    #[test]
    fn test_error_stats_exact_match() {
        let pairs = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
        let (err_mean, err_var) = error_stats(&pairs);
        assert_relative_eq!(err_mean, 0.0);
        assert_relative_eq!(err_var, 0.0);
    }
}
