//! Single-shot image classification pipeline.
//!
//! Wires the camera, the tensor preparer, the inference session, and the
//! argmax interpreter into one linear run: acquire a frame, normalize it
//! into the model's input tensor, execute a forward pass, report the
//! highest-scoring class. One run is terminal in both success and failure;
//! there is no retry, no streaming, and no state carried across runs.

pub mod config;
pub mod error;
pub mod interpret;
pub mod pipeline;
pub mod preprocess;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use interpret::{Classification, argmax};
pub use pipeline::Pipeline;
pub use preprocess::{MODEL_FORMAT, normalize};
