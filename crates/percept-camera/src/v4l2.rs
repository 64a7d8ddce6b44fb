use crate::convert::rgb565_to_rgb;
use crate::{Camera, CameraConfig, CameraError, Frame, PixelFormat};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

/// V4L2 camera implementation.
///
/// Frames are captured synchronously: `acquire` maps the driver buffers,
/// blocks on the next frame, copies it out, and tears the stream down
/// again, requeueing the buffers.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Device,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("device", &"<v4l::Device>")
            .finish()
    }
}

impl V4l2Camera {
    /// Create a new V4L2 camera with the given configuration.
    ///
    /// Opens the device at `config.device()` and sets packed RGB565 at the
    /// requested resolution. The sensor clock and encoder quality fields of
    /// the config describe the fixed sensor profile and are not negotiated
    /// over V4L2.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Init` if:
    /// - The config requests a sensor format other than RGB565
    /// - The device cannot be opened
    /// - The driver substitutes another pixel format or resolution
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        if config.format() != PixelFormat::Rgb565 {
            return Err(CameraError::Init(format!(
                "unsupported sensor format: {}",
                config.format()
            )));
        }

        let device =
            Device::with_path(config.device()).map_err(|e| CameraError::Init(e.to_string()))?;

        // Set packed RGB565 at the requested resolution
        let mut format = Format::new(config.width(), config.height(), FourCC::new(b"RGBP"));
        format =
            Capture::set_format(&device, &format).map_err(|e| CameraError::Init(e.to_string()))?;

        // Verify the driver accepted RGB565 (it might substitute a different format)
        if format.fourcc != FourCC::new(b"RGBP") {
            return Err(CameraError::Init(
                "packed RGB565 format not supported by device".to_string(),
            ));
        }
        if format.width != config.width() || format.height != config.height() {
            return Err(CameraError::Init(format!(
                "device substituted {}x{} for requested {}x{}",
                format.width,
                format.height,
                config.width(),
                config.height()
            )));
        }

        Ok(Self { config, device })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

impl Camera for V4l2Camera {
    fn acquire(&mut self) -> Result<Frame, CameraError> {
        let buffer_count = self.config.buffer_count();
        let mut stream = MmapStream::with_buffers(&self.device, Type::VideoCapture, buffer_count)?;

        // Blocks until the driver hands over the next filled buffer
        let (frame_data, _metadata) = CaptureStream::next(&mut stream)?;

        let width = self.config.width();
        let height = self.config.height();

        // Unpack to RGB888; the mmap buffer is only valid while the stream
        // lives, and the conversion copies it out
        let rgb = rgb565_to_rgb(frame_data, width, height).ok_or(CameraError::Truncated {
            expected: (width as usize) * (height as usize) * 2,
            got: frame_data.len(),
        })?;

        log::debug!(
            target: "capture",
            "captured {}x{} frame ({} bytes RGB565)",
            width,
            height,
            frame_data.len()
        );

        Ok(Frame::new(
            rgb,
            width as usize,
            height as usize,
            PixelFormat::Rgb888,
        ))
    }
}
