use crate::PixelFormat;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum CameraError {
    /// Device configuration or startup failure.
    Init(String),
    /// Hardware fault or stream failure while acquiring a frame.
    Capture(String),
    /// Frame buffer shorter than the dimensions it claims.
    Truncated { expected: usize, got: usize },
    /// Frame delivered in a pixel layout the consumer does not accept.
    Format {
        expected: PixelFormat,
        got: PixelFormat,
    },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Init(msg) => write!(f, "camera init error: {msg}"),
            CameraError::Capture(msg) => write!(f, "capture error: {msg}"),
            CameraError::Truncated { expected, got } => {
                write!(f, "truncated frame: expected {expected} bytes, got {got}")
            }
            CameraError::Format { expected, got } => {
                write!(f, "pixel format mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Capture(err.to_string())
    }
}
