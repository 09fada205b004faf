//! Core building blocks shared by every layer: math, errors, logging.

#[macro_use]
pub mod log;
pub mod error;
pub mod vec2;

pub use error::{EngineError, EngineResult};
pub use vec2::Vec2;
