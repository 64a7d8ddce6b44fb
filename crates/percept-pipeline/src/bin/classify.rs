use log::info;
use percept_base::{init_stdout_logger, log_fatal};
use percept_camera::{CameraConfig, V4l2Camera};
use percept_infer::OnnxBackend;
use percept_pipeline::{Pipeline, PipelineConfig};

fn main() {
    init_stdout_logger();

    // Optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => match PipelineConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => log_fatal!("{err}"),
        },
        None => PipelineConfig::default(),
    };

    let camera_config = CameraConfig::default()
        .with_width(config.input_width() as u32)
        .with_height(config.input_height() as u32);
    info!(
        target: "camera",
        "opening {} at {}x{}",
        camera_config.device(),
        camera_config.width(),
        camera_config.height()
    );
    let mut camera = match V4l2Camera::new(camera_config) {
        Ok(camera) => camera,
        Err(err) => log_fatal!("{err}"),
    };
    info!(target: "camera", "camera initialized");

    let pipeline = Pipeline::new(config);
    if pipeline.run(&mut camera, &OnnxBackend).is_err() {
        // The failing stage already logged the detail
        std::process::exit(1);
    }
}
