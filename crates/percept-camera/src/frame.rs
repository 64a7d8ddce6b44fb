use std::fmt;

/// Pixel layout of a frame's raw byte buffer.
///
/// Every `Frame` carries its format tag so consumers can check the
/// channel-layout contract instead of assuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16-bit packed RGB, little-endian, 2 bytes per pixel. What the
    /// sensor delivers natively.
    Rgb565,
    /// Interleaved 8-bit RGB, 3 bytes per pixel, one channel per byte.
    Rgb888,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb888 => 3,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgb565 => write!(f, "RGB565"),
            PixelFormat::Rgb888 => write!(f, "RGB888"),
        }
    }
}

/// One captured frame.
///
/// The pixel data is copied out of the driver buffer at capture time, so
/// the frame owns its bytes. Dropping the frame is the single release
/// point for them, reachable from every control path.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: usize,
    height: usize,
    format: PixelFormat,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: usize, height: usize, format: PixelFormat) -> Self {
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Raw pixel bytes in the layout described by `format()`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Byte length a full frame of these dimensions should have.
    pub fn expected_len(&self) -> usize {
        self.width * self.height * self.format.bytes_per_pixel()
    }
}
