use super::sequence_model::SequenceModel;
use crate::domain::errors::ForecastError;
use crate::domain::shaping::{MODEL_SEQUENCE_LEN, ModelInput};
use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::info;

static SHARED_MODEL: OnceLock<Arc<OnnxSequenceModel>> = OnceLock::new();

/// Process-wide model instance, loaded on first use and held for the
/// process lifetime. Scaling state is per-request, so sharing is safe.
pub fn shared_model(model_path: &Path) -> Result<Arc<OnnxSequenceModel>, ForecastError> {
    if let Some(model) = SHARED_MODEL.get() {
        return Ok(model.clone());
    }
    let loaded = Arc::new(OnnxSequenceModel::load(model_path)?);
    Ok(SHARED_MODEL.get_or_init(|| loaded).clone())
}

/// ONNX Runtime backend for the pretrained close-price model.
pub struct OnnxSequenceModel {
    // Inference needs exclusive session access
    session: Mutex<Session>,
    model_path: PathBuf,
    sequence_len: usize,
}

impl OnnxSequenceModel {
    /// Load the model artifact. Failure here is fatal; there is no
    /// per-request recovery for a missing or corrupt model.
    pub fn load(model_path: &Path) -> Result<Self, ForecastError> {
        let session = Session::builder()
            .map_err(|e| ForecastError::ModelInference {
                reason: format!("Failed to create session builder: {}", e),
            })?
            .commit_from_file(model_path)
            .map_err(|e| ForecastError::ModelInference {
                reason: format!("Failed to load model from {:?}: {}", model_path, e),
            })?;

        info!("Loaded ONNX model from {:?}", model_path);

        Ok(Self {
            session: Mutex::new(session),
            model_path: model_path.to_path_buf(),
            sequence_len: MODEL_SEQUENCE_LEN,
        })
    }

    pub fn path(&self) -> &Path {
        &self.model_path
    }
}

impl SequenceModel for OnnxSequenceModel {
    fn predict_scaled(&self, input: &ModelInput) -> Result<f64, ForecastError> {
        let flat_data: Vec<f32> = input.values().iter().map(|v| *v as f32).collect();
        let shape = vec![1, input.len(), 1];

        let input_value = ort::value::Value::from_array((shape.as_slice(), flat_data))
            .map_err(|e| ForecastError::ModelInference {
                reason: format!("Input value creation failed: {}", e),
            })?;

        let mut session = self.session.lock().map_err(|e| ForecastError::ModelInference {
            reason: format!("Session lock failed: {}", e),
        })?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(|e| ForecastError::ModelInference {
                reason: e.to_string(),
            })?;

        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or_else(|| ForecastError::ModelInference {
                reason: "Model produced no outputs".to_string(),
            })?;

        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| ForecastError::ModelInference {
                reason: e.to_string(),
            })?;

        if data.1.len() != 1 {
            return Err(ForecastError::ModelInference {
                reason: format!("Expected a single scalar output, got shape {:?}", data.0),
            });
        }

        let scaled = data.1[0] as f64;
        if !scaled.is_finite() {
            return Err(ForecastError::ModelInference {
                reason: format!("Non-finite model output: {}", scaled),
            });
        }

        Ok(scaled)
    }

    fn name(&self) -> &str {
        "ONNX Runtime (LSTM)"
    }

    fn sequence_len(&self) -> usize {
        self.sequence_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_file_fails_to_load() {
        let result = OnnxSequenceModel::load(Path::new("non_existent.onnx"));

        let err = result.err().expect("loading a missing file must fail");
        let msg = err.to_string();
        assert!(msg.contains("Model inference failed"));
        assert!(msg.contains("non_existent.onnx"));
    }
}
