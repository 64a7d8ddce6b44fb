//! Inference engine adapter for the percept pipeline.
//!
//! A `Backend` turns a `ModelSource` into a loaded `Session` (the model
//! handle); the session runs one synchronous forward pass at a time and
//! unloads the model when dropped. The ONNX Runtime backend lives behind
//! the `onnx` feature (on by default).

pub mod backend;
pub mod device;
pub mod error;
pub mod session;

#[cfg(feature = "onnx")]
pub mod backends;

pub use backend::{Backend, ModelSource};
pub use device::Device;
pub use error::InferError;
pub use session::Session;

#[cfg(feature = "onnx")]
pub use backends::OnnxBackend;
