use percept_base::Tensor;
use percept_camera::{Camera, CameraError, Frame, PixelFormat};
use percept_infer::{Backend, Device, InferError, ModelSource, Session};
use percept_pipeline::{Pipeline, PipelineConfig, PipelineError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Single-shot mock camera: hands out its prepared result once and counts
// how often it was asked.
struct MockCamera {
    result: Option<Result<Frame, CameraError>>,
    acquires: usize,
}

impl MockCamera {
    fn with_frame(frame: Frame) -> Self {
        Self {
            result: Some(Ok(frame)),
            acquires: 0,
        }
    }

    fn failing() -> Self {
        Self {
            result: Some(Err(CameraError::Capture("sensor fault".to_string()))),
            acquires: 0,
        }
    }
}

impl Camera for MockCamera {
    fn acquire(&mut self) -> Result<Frame, CameraError> {
        self.acquires += 1;
        self.result.take().expect("acquire called more than once")
    }
}

// Mock backend whose sessions return a fixed score vector and count their
// drops, so resource release can be asserted per failure stage.
struct MockBackend {
    scores: Vec<f32>,
    fail_load: bool,
    fail_run: bool,
    loads: Arc<AtomicUsize>,
    session_drops: Arc<AtomicUsize>,
    last_input_len: Arc<AtomicUsize>,
}

impl MockBackend {
    fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            fail_load: false,
            fail_run: false,
            loads: Arc::new(AtomicUsize::new(0)),
            session_drops: Arc::new(AtomicUsize::new(0)),
            last_input_len: Arc::new(AtomicUsize::new(0)),
        }
    }
}

struct MockSession {
    scores: Vec<f32>,
    fail_run: bool,
    drops: Arc<AtomicUsize>,
    last_input_len: Arc<AtomicUsize>,
}

impl Backend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn load_model(
        &self,
        _model: ModelSource,
        _device: Device,
    ) -> Result<Box<dyn Session>, InferError> {
        if self.fail_load {
            return Err(InferError::ModelLoad("model file missing".to_string()));
        }
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            scores: self.scores.clone(),
            fail_run: self.fail_run,
            drops: Arc::clone(&self.session_drops),
            last_input_len: Arc::clone(&self.last_input_len),
        }))
    }
}

impl Session for MockSession {
    fn run(&mut self, input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        if self.fail_run {
            return Err(InferError::Runtime("accelerator fault".to_string()));
        }
        self.last_input_len.store(input.len(), Ordering::SeqCst);
        Tensor::new(vec![self.scores.len()], self.scores.clone()).map_err(InferError::from)
    }

    fn input_name(&self) -> &str {
        "images"
    }

    fn output_name(&self) -> &str {
        "scores"
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

fn gray_frame(config: &PipelineConfig) -> Frame {
    Frame::new(
        vec![127u8; config.input_len()],
        config.input_width(),
        config.input_height(),
        PixelFormat::Rgb888,
    )
}

#[test]
fn test_pipeline_reports_top_class_for_gray_frame() {
    let config = PipelineConfig::default();
    let mut camera = MockCamera::with_frame(gray_frame(&config));
    let backend = MockBackend::new(vec![0.1, 0.9, 0.05]);

    let result = Pipeline::new(config).run(&mut camera, &backend).unwrap();

    assert_eq!(result.class_id, 1);
    assert_eq!(result.score, 0.9);
    assert_eq!(camera.acquires, 1);
    // The forward pass consumed a full 320x320x3 input tensor
    assert_eq!(
        backend.last_input_len.load(Ordering::SeqCst),
        320 * 320 * 3
    );
}

#[test]
fn test_pipeline_releases_session_on_success() {
    let config = PipelineConfig::default();
    let mut camera = MockCamera::with_frame(gray_frame(&config));
    let backend = MockBackend::new(vec![0.3, 0.7]);

    Pipeline::new(config).run(&mut camera, &backend).unwrap();

    assert_eq!(backend.loads.load(Ordering::SeqCst), 1);
    assert_eq!(backend.session_drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_model_load_failure_halts_before_capture() {
    let config = PipelineConfig::default();
    let mut camera = MockCamera::with_frame(gray_frame(&config));
    let mut backend = MockBackend::new(vec![]);
    backend.fail_load = true;

    let err = Pipeline::new(config)
        .run(&mut camera, &backend)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Infer(InferError::ModelLoad(_))
    ));
    assert_eq!(err.stage(), "model");
    // No frame is ever captured when the model cannot be loaded
    assert_eq!(camera.acquires, 0);
    assert_eq!(backend.session_drops.load(Ordering::SeqCst), 0);
}

#[test]
fn test_capture_failure_still_unloads_model() {
    let config = PipelineConfig::default();
    let mut camera = MockCamera::failing();
    let backend = MockBackend::new(vec![0.5]);

    let err = Pipeline::new(config)
        .run(&mut camera, &backend)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Camera(CameraError::Capture(_))
    ));
    assert_eq!(err.stage(), "capture");
    assert_eq!(camera.acquires, 1);
    // The session was loaded before the capture and must be released
    assert_eq!(backend.loads.load(Ordering::SeqCst), 1);
    assert_eq!(backend.session_drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_truncated_frame_fails_preparation() {
    let config = PipelineConfig::default();
    let short = Frame::new(vec![0u8; 16], 320, 320, PixelFormat::Rgb888);
    let mut camera = MockCamera::with_frame(short);
    let backend = MockBackend::new(vec![0.5]);

    let err = Pipeline::new(config)
        .run(&mut camera, &backend)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Camera(CameraError::Truncated { .. })
    ));
    assert_eq!(err.stage(), "prepare");
    assert_eq!(backend.session_drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_packed_frame_fails_preparation() {
    let config = PipelineConfig::default();
    let packed = Frame::new(
        vec![0u8; config.input_len()],
        320,
        320,
        PixelFormat::Rgb565,
    );
    let mut camera = MockCamera::with_frame(packed);
    let backend = MockBackend::new(vec![0.5]);

    let err = Pipeline::new(config)
        .run(&mut camera, &backend)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Camera(CameraError::Format { .. })
    ));
    assert_eq!(err.stage(), "prepare");
}

#[test]
fn test_inference_failure_surfaces_and_releases() {
    let config = PipelineConfig::default();
    let mut camera = MockCamera::with_frame(gray_frame(&config));
    let mut backend = MockBackend::new(vec![]);
    backend.fail_run = true;

    let err = Pipeline::new(config)
        .run(&mut camera, &backend)
        .unwrap_err();

    assert!(matches!(err, PipelineError::Infer(InferError::Runtime(_))));
    assert_eq!(err.stage(), "infer");
    assert_eq!(camera.acquires, 1);
    assert_eq!(backend.session_drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_pipeline_with_device_builder() {
    let pipeline = Pipeline::new(PipelineConfig::default()).with_device(Device::Cpu);
    assert_eq!(pipeline.config().input_width(), 320);
}
