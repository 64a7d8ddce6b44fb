use crate::{Device, InferError, Session};
use std::fmt;
use std::path::PathBuf;

/// Where the serialized model comes from.
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::File(path) => write!(f, "{}", path.display()),
            ModelSource::Memory(bytes) => write!(f, "<{} bytes in memory>", bytes.len()),
        }
    }
}

/// Factory for loaded model sessions.
///
/// `load_model` resolves the model, parses its structure, and prepares the
/// runtime for the given device. It fails if the source is missing,
/// unreadable, or structurally invalid.
pub trait Backend {
    fn name(&self) -> &str;
    fn load_model(
        &self,
        model: ModelSource,
        device: Device,
    ) -> Result<Box<dyn Session>, InferError>;
}
