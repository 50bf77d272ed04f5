use std::path::PathBuf;
use std::process;

use clap::Parser;

use facesym_core::detection::domain::face_detector::FaceDetector;
use facesym_core::detection::infrastructure::model_resolver;
use facesym_core::detection::infrastructure::onnx_yolo_detector::{
    OnnxYoloDetector, DEFAULT_CONFIDENCE,
};
use facesym_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use facesym_core::imaging::infrastructure::source_image_reader::SourceImageReader;
use facesym_core::imaging::infrastructure::system_image_viewer::SystemImageViewer;
use facesym_core::pipeline::batch_logger::StdoutBatchLogger;
use facesym_core::pipeline::symmetrize_sources_use_case::{
    SymmetrizeOptions, SymmetrizeSourcesUseCase,
};
use facesym_core::shared::constants::{DEFAULT_SOURCES, YOLO_MODEL_NAME, YOLO_MODEL_URL};

/// Build left/right symmetrized face composites from images.
#[derive(Parser, Debug)]
#[command(name = "face-sym")]
struct Cli {
    /// Image URLs or file paths (defaults to a built-in sample list).
    sources: Vec<String>,

    /// Directory to write result images into.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also produce an overview with boxes, labels and midlines.
    #[arg(long)]
    annotate: bool,

    /// Also write one crop per detected face.
    #[arg(long)]
    crops: bool,

    /// Index of the face whose midline splits the image.
    #[arg(long, default_value = "0")]
    face_index: usize,

    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE)]
    confidence: f64,

    /// Open results in the system image viewer.
    #[arg(long)]
    show: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let sources = resolve_sources(&cli.sources);
    let detector = build_detector(cli.confidence)?;
    let options = SymmetrizeOptions {
        face_index: cli.face_index,
        annotate: cli.annotate,
        crops: cli.crops,
    };

    let mut use_case = SymmetrizeSourcesUseCase::new(
        Box::new(SourceImageReader::new()?),
        detector,
        Box::new(StdoutBatchLogger::new()),
        options,
    );
    if let Some(dir) = &cli.output {
        use_case = use_case.with_output(Box::new(ImageFileWriter::new()), dir.clone());
    }
    if cli.show {
        use_case = use_case.with_viewer(Box::new(SystemImageViewer::new()));
    }

    let summary = use_case.execute(&sources)?;
    if let Some(dir) = &cli.output {
        log::info!(
            "Wrote results for {} of {} sources to {}",
            summary.detected,
            summary.total,
            dir.display()
        );
    }
    Ok(())
}

fn build_detector(confidence: f64) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    log::info!("Resolving model: {YOLO_MODEL_NAME}");
    let model_path = model_resolver::resolve(
        YOLO_MODEL_NAME,
        YOLO_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    Ok(Box::new(OnnxYoloDetector::new(&model_path, confidence)?))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    if cli.annotate && cli.output.is_none() && !cli.show {
        log::warn!("--annotate has no effect without --output or --show");
    }
    if cli.crops && cli.output.is_none() {
        log::warn!("--crops has no effect without --output");
    }
    Ok(())
}

fn resolve_sources(sources: &[String]) -> Vec<String> {
    if sources.is_empty() {
        DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
    } else {
        sources.to_vec()
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}
