// Trading-day arithmetic
pub mod calendar;

// Change and direction figures
pub mod change;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Predicted price for a target date
pub mod prediction;

// Per-request min-max scaling
pub mod scaling;

// Provider price series
pub mod series;

// Fixed-length model input shaping
pub mod shaping;

// Descriptive window statistics
pub mod stats;

// Trailing window selection
pub mod window;
