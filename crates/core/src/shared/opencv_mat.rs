//! Conversions between pipeline buffers and OpenCV matrices.

use opencv::core::{self, AlgorithmHint, Mat};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::Frame;
use crate::shared::gray_frame::GrayFrame;

/// Copies a captured `Mat` into a BGR [`Frame`].
///
/// 8-bit gray and BGRA captures are converted to BGR. Any other pixel type
/// is rejected rather than reinterpreted.
pub fn mat_to_frame(mat: &Mat, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
    let conversion = match mat.typ() {
        core::CV_8UC3 => None,
        core::CV_8UC1 => Some(imgproc::COLOR_GRAY2BGR),
        core::CV_8UC4 => Some(imgproc::COLOR_BGRA2BGR),
        other => {
            return Err(format!(
                "unsupported pixel type {other} with {} channel(s); expected 8-bit gray, BGR or BGRA",
                mat.channels()
            )
            .into())
        }
    };

    let converted;
    let bgr = match conversion {
        Some(code) => {
            let mut out = Mat::default();
            imgproc::cvt_color(mat, &mut out, code, 0, AlgorithmHint::ALGO_HINT_DEFAULT)?;
            converted = out;
            &converted
        }
        None if mat.is_continuous() => mat,
        None => {
            converted = mat.try_clone()?;
            &converted
        }
    };

    Ok(Frame::new(
        bgr.data_bytes()?.to_vec(),
        bgr.cols() as u32,
        bgr.rows() as u32,
        3,
        index,
    ))
}

/// Wraps a frame as a borrowed `Mat` and hands it to `f`.
pub fn with_frame_mat<R>(
    frame: &Frame,
    f: impl FnOnce(&Mat) -> opencv::Result<R>,
) -> opencv::Result<R> {
    let rows = frame.height() as i32;
    let flat = Mat::new_rows_cols_with_data(rows, frame.stride() as i32, frame.data())?;
    let mat = flat.reshape(i32::from(frame.channels()), rows)?;
    f(&mat)
}

/// Runs `f` on a `Mat` copy of the frame and writes the result back.
pub fn edit_frame_mat(
    frame: &mut Frame,
    f: impl FnOnce(&mut Mat) -> opencv::Result<()>,
) -> opencv::Result<()> {
    let mut mat = with_frame_mat(frame, |m| m.try_clone())?;
    f(&mut mat)?;
    frame.data_mut().copy_from_slice(mat.data_bytes()?);
    Ok(())
}

/// Wraps a gray frame as a borrowed single-channel `Mat` and hands it to `f`.
pub fn with_gray_mat<R>(
    gray: &GrayFrame,
    f: impl FnOnce(&Mat) -> opencv::Result<R>,
) -> opencv::Result<R> {
    let mat = Mat::new_rows_cols_with_data(gray.height() as i32, gray.width() as i32, gray.data())?;
    f(&mat)
}

/// Copies an 8-bit single-channel `Mat` into a [`GrayFrame`].
pub fn mat_to_gray(mat: &Mat) -> Result<GrayFrame, Box<dyn std::error::Error>> {
    if mat.typ() != core::CV_8UC1 {
        return Err(format!("expected an 8-bit single-channel image, got type {}", mat.typ()).into());
    }
    let owned;
    let mat = if mat.is_continuous() {
        mat
    } else {
        owned = mat.try_clone()?;
        &owned
    };
    Ok(GrayFrame::new(
        mat.data_bytes()?.to_vec(),
        mat.cols() as u32,
        mat.rows() as u32,
    ))
}
