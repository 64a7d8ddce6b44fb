//! Camera capture abstraction for the percept pipeline.
//!
//! This crate provides a blocking `Camera` trait for single-frame
//! acquisition, the `Frame` type handed to the rest of the pipeline, and a
//! V4L2 backend behind the `v4l2` feature.

pub mod config;
pub mod convert;
pub mod error;
pub mod frame;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use frame::{Frame, PixelFormat};
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
