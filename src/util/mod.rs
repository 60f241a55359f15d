pub mod error;
pub mod vectors;
