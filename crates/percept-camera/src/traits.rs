use crate::{CameraError, Frame};

/// Blocking camera trait for single-frame acquisition.
///
/// `acquire` blocks the caller until the sensor delivers a frame or the
/// driver reports a hardware fault. It never hands out a partially-filled
/// frame: a short read surfaces as an error. Acquiring a frame advances
/// the sensor's internal buffer state.
pub trait Camera {
    /// Block until the next frame is available and return it.
    fn acquire(&mut self) -> Result<Frame, CameraError>;
}
