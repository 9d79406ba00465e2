#[cfg(feature = "opencv")]
pub mod rectangle_annotator;
