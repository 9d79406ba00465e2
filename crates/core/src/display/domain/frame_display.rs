use crate::shared::frame::Frame;

/// The single user-facing surface: shows frames and reports exit signals.
pub trait FrameDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Key pressed since the last poll, if any. Never blocks.
    fn poll_key(&mut self) -> Result<Option<i32>, Box<dyn std::error::Error>>;

    /// `false` once the user has closed the window.
    fn is_visible(&self) -> Result<bool, Box<dyn std::error::Error>>;
}
