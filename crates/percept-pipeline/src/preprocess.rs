use crate::PipelineConfig;
use percept_base::Tensor;
use percept_camera::{CameraError, Frame, PixelFormat};

/// Channel layout the model input expects. Frames must arrive already
/// unpacked to one byte per channel, interleaved.
pub const MODEL_FORMAT: PixelFormat = PixelFormat::Rgb888;

/// Normalize a frame into the model input tensor.
///
/// The frame's first `width x height x channels` bytes are taken in order
/// and each byte `b` maps to `b / 255.0`. No colour-space conversion, no
/// resizing, no channel reordering: byte `i` of the frame becomes element
/// `i` of the tensor. The output shape is `[1, height, width, channels]`
/// and every element lies in `[0.0, 1.0]`. The frame is not mutated.
///
/// # Errors
///
/// - `CameraError::Format` if the frame is not tagged `Rgb888`; the
///   layout convention between sensor and model is checked here, not
///   assumed.
/// - `CameraError::Truncated` if the frame holds fewer bytes than the
///   configured input dimensions require.
pub fn normalize(frame: &Frame, config: &PipelineConfig) -> Result<Tensor<f32>, CameraError> {
    if frame.format() != MODEL_FORMAT {
        return Err(CameraError::Format {
            expected: MODEL_FORMAT,
            got: frame.format(),
        });
    }

    let needed = config.input_len();
    let data = frame.data();
    if data.len() < needed {
        return Err(CameraError::Truncated {
            expected: needed,
            got: data.len(),
        });
    }

    let scaled: Vec<f32> = data[..needed].iter().map(|&b| b as f32 / 255.0).collect();

    let shape = vec![
        1,
        config.input_height(),
        config.input_width(),
        config.input_channels(),
    ];
    Tensor::new(shape, scaled)
        .map_err(|e| CameraError::Capture(format!("input tensor construction failed: {e}")))
}
