use crate::PixelFormat;

/// Configuration for camera capture.
///
/// Defaults match the sensor profile the classifier was tuned for:
/// 320x320 packed RGB565 with a single frame buffer, 20 MHz sensor clock,
/// encoder quality 10.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
    format: PixelFormat,
    buffer_count: u32,
    clock_hz: u32,
    quality: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 320,
            height: 320,
            format: PixelFormat::Rgb565,
            buffer_count: 1,
            clock_hz: 20_000_000,
            quality: 10,
        }
    }
}

impl CameraConfig {
    /// Set the device path (e.g., "/dev/video0").
    pub fn with_device(mut self, device: String) -> Self {
        self.device = device;
        self
    }

    /// Set the capture width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the capture height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the pixel format the sensor should deliver.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the number of frame buffers for the capture stream.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Set the sensor clock frequency in Hz.
    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    /// Set the encoder quality (lower is better, as in the sensor SDK).
    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    // Getters
    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    pub fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    pub fn quality(&self) -> u32 {
        self.quality
    }
}
