use opencv::core::{AlgorithmHint, Mat, Ptr, Size};
use opencv::imgproc::{self, CLAHE};
use opencv::prelude::*;

use crate::preprocessing::domain::frame_preprocessor::FramePreprocessor;
use crate::preprocessing::domain::preprocess_params::PreprocessParams;
use crate::shared::frame::Frame;
use crate::shared::gray_frame::GrayFrame;
use crate::shared::opencv_mat::{mat_to_gray, with_frame_mat};

/// Grayscale → global histogram equalization → CLAHE, through `imgproc`.
///
/// Normalizes brightness before detection so classifiers see similar
/// contrast regardless of scene lighting. The intermediate matrices are
/// reused between frames; no pixel data carries over.
pub struct OpenCvPreprocessor {
    equalize_histogram: bool,
    clahe: Ptr<CLAHE>,
    gray: Mat,
    equalized: Mat,
    enhanced: Mat,
}

impl OpenCvPreprocessor {
    pub fn new(params: &PreprocessParams) -> opencv::Result<Self> {
        let (cols, rows) = params.tile_grid;
        let clahe = imgproc::create_clahe(params.clip_limit, Size::new(cols as i32, rows as i32))?;
        Ok(Self {
            equalize_histogram: params.equalize_histogram,
            clahe,
            gray: Mat::default(),
            equalized: Mat::default(),
            enhanced: Mat::default(),
        })
    }
}

impl FramePreprocessor for OpenCvPreprocessor {
    fn preprocess(&mut self, frame: &Frame) -> Result<GrayFrame, Box<dyn std::error::Error>> {
        let conversion = match frame.channels() {
            1 => None,
            3 => Some(imgproc::COLOR_BGR2GRAY),
            4 => Some(imgproc::COLOR_BGRA2GRAY),
            n => return Err(format!("unsupported channel count {n} (expected 1, 3 or 4)").into()),
        };

        let gray = &mut self.gray;
        with_frame_mat(frame, |src| match conversion {
            Some(code) => imgproc::cvt_color(src, gray, code, 0, AlgorithmHint::ALGO_HINT_DEFAULT),
            None => src.copy_to(gray),
        })?;

        let contrast_input = if self.equalize_histogram {
            imgproc::equalize_hist(&self.gray, &mut self.equalized)?;
            &self.equalized
        } else {
            &self.gray
        };
        self.clahe.apply(contrast_input, &mut self.enhanced)?;

        mat_to_gray(&self.enhanced)
    }
}
