use crate::domain::scaling::ScaledWindow;

/// Fixed input length the pretrained sequence model was exported with.
pub const MODEL_SEQUENCE_LEN: usize = 30;

/// Fixed-length numeric input for the sequence model, fed as a
/// (1, len, 1) tensor. A pure reshape; values are never altered.
#[derive(Debug, Clone)]
pub struct ModelInput {
    values: Vec<f64>,
}

impl ModelInput {
    /// Adapt a scaled window of any length K to exactly `target_len`:
    /// short windows are left-padded with copies of their earliest value,
    /// long windows keep only the most recent `target_len` values.
    /// Expects a non-empty window.
    pub fn from_scaled(scaled: &ScaledWindow, target_len: usize) -> Self {
        let values = scaled.values();
        let shaped = if values.len() == target_len {
            values.to_vec()
        } else if values.len() < target_len {
            let mut padded = vec![values[0]; target_len - values.len()];
            padded.extend_from_slice(values);
            padded
        } else {
            values[values.len() - target_len..].to_vec()
        };
        Self { values: shaped }
    }

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
