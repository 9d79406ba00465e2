use crate::display::domain::frame_display::FrameDisplay;
use crate::shared::frame::Frame;

/// Display that shows nothing and never asks to exit.
///
/// Lets the loop run over files on machines without a window system; the
/// run ends when the source runs out of frames.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    frames_shown: usize,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }
}

impl FrameDisplay for HeadlessDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        self.frames_shown += 1;
        log::trace!("Headless display skipped frame {}", frame.index());
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<i32>, Box<dyn std::error::Error>> {
        Ok(None)
    }

    fn is_visible(&self) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_signals_exit() {
        let mut display = HeadlessDisplay::new();
        display.show(&Frame::filled(2, 2, [0, 0, 0], 0)).unwrap();
        display.show(&Frame::filled(2, 2, [0, 0, 0], 1)).unwrap();
        assert_eq!(display.poll_key().unwrap(), None);
        assert!(display.is_visible().unwrap());
        assert_eq!(display.frames_shown(), 2);
    }
}
