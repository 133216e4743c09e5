pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::TransformSettings;
pub use error::{EtchError, Result};
