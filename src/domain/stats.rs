use statrs::statistics::Statistics;

/// Descriptive statistics over the closes actually fed to the model.
#[derive(Debug, Clone, Copy)]
pub struct WindowStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

impl WindowStats {
    /// Describe a non-empty value slice. Spread is the population standard
    /// deviation, so a one-point window reports 0.0.
    pub fn describe(values: &[f64]) -> Self {
        Self {
            mean: values.iter().mean(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            std_dev: values.iter().population_std_dev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_values() {
        let stats = WindowStats::describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert!((stats.mean - 5.0).abs() < 1e-9);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        // Population spread of this classic set is exactly 2
        assert!((stats.std_dev - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let stats = WindowStats::describe(&[1915.0]);

        assert_eq!(stats.mean, 1915.0);
        assert_eq!(stats.min, 1915.0);
        assert_eq!(stats.max, 1915.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
