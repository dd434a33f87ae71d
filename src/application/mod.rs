// Forecast orchestration
pub mod forecast;

// Pretrained model backends
pub mod ml;
