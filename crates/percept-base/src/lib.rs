pub mod logging;
pub mod tensor;

pub use logging::{StdoutLogger, format_timestamp, init_stdout_logger};
pub use tensor::{Tensor, TensorError};

// Re-export log so downstream crates can use percept_base::log::*
pub use log;
