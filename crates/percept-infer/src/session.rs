use crate::InferError;
use percept_base::Tensor;

/// A loaded model handle.
///
/// `run` performs one synchronous forward pass. Sessions are stateless
/// across calls apart from the weights fixed at load time, and support a
/// single in-flight inference at a time (hence `&mut self`). A failed run
/// leaves the input untouched. Dropping the session unloads the model.
pub trait Session {
    /// Execute a forward pass and return the class-score tensor.
    ///
    /// The output length is the model's declared class count, independent
    /// of the input dimensions.
    fn run(&mut self, input: &Tensor<f32>) -> Result<Tensor<f32>, InferError>;

    /// Name of the model's input binding.
    fn input_name(&self) -> &str;

    /// Name of the model's output binding.
    fn output_name(&self) -> &str;
}
