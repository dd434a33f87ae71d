use crate::domain::errors::ForecastError;
use crate::domain::shaping::ModelInput;

/// Interface for pretrained single-step sequence models
pub trait SequenceModel: Send + Sync {
    /// Run the model on one shaped input and return its scaled scalar
    /// output in [0, 1]
    fn predict_scaled(&self, input: &ModelInput) -> Result<f64, ForecastError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Fixed input length the model was exported with
    fn sequence_len(&self) -> usize;
}
