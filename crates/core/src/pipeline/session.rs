use std::time::Instant;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::capture::domain::frame_source::FrameSource;
use crate::detection::domain::classifier_set::ClassifierSet;
use crate::display::domain::frame_display::FrameDisplay;
use crate::pipeline::backend::{Backend, SourceSpec};
use crate::pipeline::errors::{InitError, RuntimeError, Termination};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::preprocessing::domain::frame_preprocessor::FramePreprocessor;
use crate::shared::app_config::AppConfig;
use crate::shared::frame::Frame;
use crate::shared::gray_frame::GrayFrame;
use crate::shared::region::Region;

/// An initialized detection loop: window open, classifiers loaded, source
/// ready. Dropping the session releases all three.
pub struct Session {
    display: Box<dyn FrameDisplay>,
    classifiers: ClassifierSet,
    source: Box<dyn FrameSource>,
    preprocessor: Box<dyn FramePreprocessor>,
    annotator: Box<dyn FrameAnnotator>,
    exit_key: i32,
    logger: Box<dyn PipelineLogger>,
}

/// Validates `config`, builds the processing stages, then opens every
/// collaborator in order: display, classifiers, source. The first failure
/// is returned and nothing after it is attempted.
pub fn initialize(
    config: &AppConfig,
    backend: &dyn Backend,
    mut logger: Box<dyn PipelineLogger>,
) -> Result<Session, InitError> {
    config.validate()?;

    let preprocessor = backend
        .preprocessor(&config.preprocessing)
        .map_err(InitError::Processing)?;
    let annotator = backend
        .annotator(&config.annotation)
        .map_err(InitError::Processing)?;

    let display = backend
        .open_display(&config.window_title)
        .map_err(InitError::Display)?;

    let classifiers = ClassifierSet::load(&config.classifiers, |path| {
        backend.load_classifier(path, &config.detection)
    })?;
    logger.info(&format!(
        "Loaded {} classifier(s): {}",
        classifiers.len(),
        classifiers.names().join(", ")
    ));

    let spec = match &config.input {
        Some(path) => SourceSpec::File(path.clone()),
        None => SourceSpec::Camera(config.camera_index),
    };
    let source = backend
        .open_source(&spec)
        .map_err(|source| InitError::SourceOpen {
            source_desc: spec.to_string(),
            source,
        })?;
    logger.info(&format!("Opened {}", source.metadata()));

    Ok(Session {
        display,
        classifiers,
        source,
        preprocessor,
        annotator,
        exit_key: config.exit_key,
        logger,
    })
}

impl Session {
    /// Runs the capture → preprocess → detect → display loop until the
    /// source ends or the user exits.
    pub fn run(&mut self) -> Result<Termination, RuntimeError> {
        let total = self.source.metadata().total_frames.unwrap_or(0);
        let mut detections = Vec::new();
        let mut processed = 0usize;

        let termination = loop {
            let t0 = Instant::now();
            let frame = self.source.read().map_err(RuntimeError::Capture)?;
            let mut frame = match frame {
                Some(frame) if !frame.is_empty() => frame,
                _ => break Termination::EndOfStream,
            };
            self.logger.timing("capture", elapsed_ms(t0));

            let t1 = Instant::now();
            let gray = self
                .preprocessor
                .preprocess(&frame)
                .map_err(RuntimeError::Preprocess)?;
            self.logger.timing("preprocess", elapsed_ms(t1));

            let t2 = Instant::now();
            process_frame(
                &mut self.classifiers,
                self.annotator.as_ref(),
                &gray,
                &mut frame,
                &mut detections,
            )?;
            self.logger.timing("detect", elapsed_ms(t2));
            self.logger.metric("detections", detections.len() as f64);

            let t3 = Instant::now();
            self.display.show(&frame).map_err(RuntimeError::Display)?;
            self.logger.timing("display", elapsed_ms(t3));

            processed += 1;
            self.logger.progress(processed, total);

            if let Some(termination) = self.exit_requested()? {
                break termination;
            }
        };

        self.logger
            .info(&format!("Stopped after {processed} frames: {termination}"));
        self.logger.summary();
        Ok(termination)
    }

    pub fn classifier_names(&self) -> Vec<&str> {
        self.classifiers.names()
    }

    fn exit_requested(&mut self) -> Result<Option<Termination>, RuntimeError> {
        let key = self.display.poll_key().map_err(RuntimeError::Display)?;
        if key == Some(self.exit_key) {
            return Ok(Some(Termination::EscapePressed));
        }
        if !self.display.is_visible().map_err(RuntimeError::Display)? {
            return Ok(Some(Termination::WindowClosed));
        }
        Ok(None)
    }
}

/// Runs every classifier over `gray` and outlines what each finds on
/// `frame`, in classifier order.
///
/// `detections` is cleared first and holds every region found, across all
/// classifiers, when this returns.
pub fn process_frame(
    classifiers: &mut ClassifierSet,
    annotator: &dyn FrameAnnotator,
    gray: &GrayFrame,
    frame: &mut Frame,
    detections: &mut Vec<Region>,
) -> Result<(), RuntimeError> {
    detections.clear();
    for classifier in classifiers.iter_mut() {
        let found = classifier
            .detect(gray)
            .map_err(|source| RuntimeError::Detection {
                classifier: classifier.name().to_string(),
                source,
            })?;
        annotator
            .annotate(frame, &found)
            .map_err(RuntimeError::Annotation)?;
        detections.extend(found);
    }
    Ok(())
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
