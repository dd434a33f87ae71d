// ONNX Runtime backend
pub mod onnx_model;

// Model interface
pub mod sequence_model;
