use opencv::highgui;

use crate::display::domain::frame_display::FrameDisplay;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::with_frame_mat;

/// An auto-sized OpenCV HighGUI window.
///
/// The window is created on construction and destroyed on drop.
pub struct HighGuiDisplay {
    title: String,
}

impl HighGuiDisplay {
    pub fn open(title: &str) -> Result<Self, Box<dyn std::error::Error>> {
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
        log::debug!("Opened window '{title}'");
        Ok(Self {
            title: title.to_string(),
        })
    }
}

impl FrameDisplay for HighGuiDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        with_frame_mat(frame, |mat| highgui::imshow(&self.title, mat))?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<i32>, Box<dyn std::error::Error>> {
        let key = highgui::poll_key()?;
        Ok((key >= 0).then_some(key))
    }

    fn is_visible(&self) -> Result<bool, Box<dyn std::error::Error>> {
        let visible = highgui::get_window_property(&self.title, highgui::WND_PROP_VISIBLE)?;
        Ok(visible != 0.0)
    }
}

impl Drop for HighGuiDisplay {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.title) {
            log::debug!("Failed to destroy window '{}': {e}", self.title);
        }
    }
}
