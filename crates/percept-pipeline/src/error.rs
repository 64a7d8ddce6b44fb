use percept_camera::CameraError;
use percept_infer::InferError;
use std::fmt;

#[derive(Debug)]
pub enum PipelineError {
    /// Configuration could not be read or parsed.
    Config(String),
    /// Camera initialization, capture, or frame-contract failure.
    Camera(CameraError),
    /// Model load or forward-pass failure.
    Infer(InferError),
}

impl PipelineError {
    /// Pipeline stage the error belongs to, used as the log target.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Config(_) => "config",
            PipelineError::Camera(CameraError::Init(_)) => "camera",
            PipelineError::Camera(CameraError::Capture(_)) => "capture",
            // Truncated/mismatched frames surface while preparing the tensor
            PipelineError::Camera(_) => "prepare",
            PipelineError::Infer(InferError::ModelLoad(_)) => "model",
            PipelineError::Infer(_) => "infer",
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Config(msg) => write!(f, "config error: {msg}"),
            PipelineError::Camera(err) => write!(f, "{err}"),
            PipelineError::Infer(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Config(_) => None,
            PipelineError::Camera(err) => Some(err),
            PipelineError::Infer(err) => Some(err),
        }
    }
}

impl From<CameraError> for PipelineError {
    fn from(err: CameraError) -> Self {
        PipelineError::Camera(err)
    }
}

impl From<InferError> for PipelineError {
    fn from(err: InferError) -> Self {
        PipelineError::Infer(err)
    }
}
