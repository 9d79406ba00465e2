/// What a frame source reports about its stream once opened.
///
/// Live cameras have no known length, so `total_frames` is `None`; still
/// images are a single-frame stream with `fps == 0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: Option<usize>,
    pub description: String,
}

impl std::fmt::Display for VideoMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{}", self.description, self.width, self.height)?;
        if self.fps > 0.0 {
            write!(f, " @ {:.1} fps", self.fps)?;
        }
        if let Some(total) = self.total_frames {
            write!(f, ", {total} frames")?;
        }
        write!(f, ")")
    }
}
