use crate::{Classification, PipelineConfig, PipelineError, argmax, normalize};
use percept_camera::Camera;
use percept_infer::{Backend, Device, ModelSource};

/// Single-shot classification pipeline.
///
/// `run` walks a fixed stage order: load model, acquire frame, normalize,
/// forward pass, interpret, report. A failure at any stage ends the run
/// after releasing exactly the resources acquired before it: the session
/// (the model handle) is dropped on every exit path once loaded, the
/// frame is released as soon as its tensor exists, and each tensor is
/// freed once its consumer is done with it.
///
/// The camera is constructed by the caller; a camera that fails to open
/// is an init failure that never reaches `run`. Execution is fully
/// synchronous and the pipeline holds no state across runs, so a second
/// call starts from scratch (including a fresh model load). One run at a
/// time per sensor and accelerator; nothing here locks them.
pub struct Pipeline {
    config: PipelineConfig,
    device: Device,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            device: Device::Cpu,
        }
    }

    /// Set the device the forward pass runs on (builder pattern).
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline once.
    ///
    /// Logs the stages as it goes and the failing stage on error; the
    /// returned error carries the same detail for callers that want it.
    pub fn run(
        &self,
        camera: &mut dyn Camera,
        backend: &dyn Backend,
    ) -> Result<Classification, PipelineError> {
        let cfg = &self.config;

        let source = ModelSource::File(cfg.model_path().to_path_buf());
        log::info!(target: "model", "loading {source} on {} via {}", self.device, backend.name());
        let mut session = backend
            .load_model(source, self.device.clone())
            .map_err(|e| report(e.into()))?;

        log::info!(target: "capture", "acquiring frame");
        let frame = camera.acquire().map_err(|e| report(e.into()))?;

        let input = normalize(&frame, cfg).map_err(|e| report(e.into()))?;
        // Frame buffer goes back before inference starts
        drop(frame);
        log::debug!(target: "prepare", "input tensor ready ({} elements)", input.len());

        let output = session.run(&input).map_err(|e| report(e.into()))?;
        drop(input);
        log::debug!(target: "infer", "forward pass complete ({} classes)", output.len());

        let result = argmax(&output);
        drop(output);
        log::info!(
            target: "result",
            "predicted class {} with score {:.2}",
            result.class_id,
            result.score
        );

        Ok(result)
    } // session drops here or at the failing `?`; the model is unloaded either way
}

/// Log a stage failure before handing the error up.
fn report(err: PipelineError) -> PipelineError {
    log::error!(target: err.stage(), "{err}");
    err
}
