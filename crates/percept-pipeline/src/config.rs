use crate::PipelineError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pipeline configuration, passed in at construction.
///
/// The input dimensions describe the tensor the model was exported with;
/// the camera must be configured to the same resolution.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineConfig {
    model_path: PathBuf,
    input_width: usize,
    input_height: usize,
    input_channels: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/best.onnx"),
            input_width: 320,
            input_height: 320,
            input_channels: 3,
        }
    }
}

impl PipelineConfig {
    /// Set the model file path.
    pub fn with_model_path(mut self, model_path: impl Into<PathBuf>) -> Self {
        self.model_path = model_path.into();
        self
    }

    /// Set the model input width in pixels.
    pub fn with_input_width(mut self, input_width: usize) -> Self {
        self.input_width = input_width;
        self
    }

    /// Set the model input height in pixels.
    pub fn with_input_height(mut self, input_height: usize) -> Self {
        self.input_height = input_height;
        self
    }

    /// Set the model input channel count.
    pub fn with_input_channels(mut self, input_channels: usize) -> Self {
        self.input_channels = input_channels;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            PipelineError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    // Getters
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn input_height(&self) -> usize {
        self.input_height
    }

    pub fn input_channels(&self) -> usize {
        self.input_channels
    }

    /// Number of elements in the model input tensor.
    pub fn input_len(&self) -> usize {
        self.input_width * self.input_height * self.input_channels
    }
}
