use std::path::PathBuf;

use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_viewer::ImageViewer;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::batch_logger::BatchLogger;
use crate::shared::frame::Frame;
use crate::symmetry::domain::face_sym::FaceSym;

/// Per-batch tally of sources with and without detected faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub detected: usize,
    pub not_detected: usize,
}

/// What to produce for each source with at least one face.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymmetrizeOptions {
    /// Face whose midline splits the image.
    pub face_index: usize,
    /// Also produce the annotated overview.
    pub annotate: bool,
    /// Also write one crop per detected face.
    pub crops: bool,
}

struct OutputTarget {
    writer: Box<dyn ImageWriter>,
    dir: PathBuf,
}

/// Batch driver: load → detect → symmetrize → write/show, for each source
/// in order, then report the tally.
///
/// The first error aborts the batch.
pub struct SymmetrizeSourcesUseCase {
    reader: Box<dyn ImageReader>,
    detector: Box<dyn FaceDetector>,
    logger: Box<dyn BatchLogger>,
    options: SymmetrizeOptions,
    output: Option<OutputTarget>,
    viewer: Option<Box<dyn ImageViewer>>,
}

impl SymmetrizeSourcesUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        detector: Box<dyn FaceDetector>,
        logger: Box<dyn BatchLogger>,
        options: SymmetrizeOptions,
    ) -> Self {
        Self {
            reader,
            detector,
            logger,
            options,
            output: None,
            viewer: None,
        }
    }

    /// Writes results as PNG files under `dir`.
    pub fn with_output(mut self, writer: Box<dyn ImageWriter>, dir: PathBuf) -> Self {
        self.output = Some(OutputTarget { writer, dir });
        self
    }

    /// Shows the grid (and annotated image) for every detected source.
    pub fn with_viewer(mut self, viewer: Box<dyn ImageViewer>) -> Self {
        self.viewer = Some(viewer);
        self
    }

    pub fn execute(
        &mut self,
        sources: &[String],
    ) -> Result<BatchSummary, Box<dyn std::error::Error>> {
        let mut summary = BatchSummary {
            total: sources.len(),
            ..BatchSummary::default()
        };

        for (index, source) in sources.iter().enumerate() {
            let face_sym = FaceSym::load(source, self.reader.as_ref(), self.detector.as_mut())?;
            let detected = face_sym.face_count() > 0;
            self.logger.item(index, source, detected);

            if detected {
                summary.detected += 1;
                self.emit(index, &face_sym)?;
            } else {
                summary.not_detected += 1;
            }
        }

        self.logger.summary(&summary);
        Ok(summary)
    }

    fn emit(&self, index: usize, face_sym: &FaceSym) -> Result<(), Box<dyn std::error::Error>> {
        let prefix = format!("{index:02}");
        let images = face_sym.symmetrized_images(self.options.face_index)?;
        let grid = images.grid();
        let annotated = self.options.annotate.then(|| face_sym.annotated_image());

        if let Some(output) = &self.output {
            for (name, frame) in images.named() {
                self.write(output, &format!("{prefix}_{name}"), frame)?;
            }
            self.write(output, &format!("{prefix}_grid"), &grid)?;
            if let Some(annotated) = &annotated {
                self.write(output, &format!("{prefix}_annotated"), annotated)?;
            }
            if self.options.crops {
                for (face, crop) in face_sym.cropped_face_images().iter().enumerate() {
                    if crop.width() == 0 || crop.height() == 0 {
                        log::warn!("Skipping empty crop for face {face} of {}", face_sym.location());
                        continue;
                    }
                    self.write(output, &format!("{prefix}_face_{face:02}"), crop)?;
                }
            }
        }

        if let Some(viewer) = &self.viewer {
            viewer.show(&format!("{prefix}_grid"), &grid)?;
            if let Some(annotated) = &annotated {
                viewer.show(&format!("{prefix}_annotated"), annotated)?;
            }
        }

        Ok(())
    }

    fn write(
        &self,
        output: &OutputTarget,
        stem: &str,
        frame: &Frame,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let path = output.dir.join(format!("{stem}.png"));
        output.writer.write(&path, frame)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}
