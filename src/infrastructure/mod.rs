pub mod mock;
pub mod yahoo;
