/// Min-max scaler fit on exactly the closes in play for one request.
/// The bounds never come from outside the window and are never reused
/// across requests.
#[derive(Debug, Clone, Copy)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
}

impl MinMaxScaler {
    /// Fit on a non-empty value slice.
    pub fn fit(values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { min, max }
    }

    /// A constant window collapses the scale range to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Map one value into [0, 1]. Degenerate fits map everything to 0.0
    /// instead of dividing by zero.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }

    pub fn transform(&self, values: &[f64]) -> ScaledWindow {
        ScaledWindow {
            values: values.iter().map(|v| self.scale(*v)).collect(),
        }
    }

    /// Undo the forward mapping. Degenerate fits invert to the shared value.
    pub fn inverse(&self, scaled: f64) -> f64 {
        if self.is_degenerate() {
            self.min
        } else {
            scaled * (self.max - self.min) + self.min
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Window values mapped into [0, 1], same order as the source window.
#[derive(Debug, Clone)]
pub struct ScaledWindow {
    values: Vec<f64>,
}

impl ScaledWindow {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
