//! Session display configuration

use eframe::egui::Color32;

use crate::domain::session::Session;

/// Injectable mapping from session to its background-band color.
///
/// The pipeline takes this by reference rather than reading a global, so a
/// host can swap in its own theme without touching the compose stage.
#[derive(Clone, Copy)]
pub struct SessionPalette {
    pub asia_open: Color32,
    pub asia_close: Color32,
    pub uk_open: Color32,
    pub uk_close: Color32,
    pub us_open: Color32,
    pub us_close: Color32,
}

impl SessionPalette {
    pub fn color(&self, session: Session) -> Color32 {
        match session {
            Session::AsiaOpen => self.asia_open,
            Session::AsiaClose => self.asia_close,
            Session::UkOpen => self.uk_open,
            Session::UkClose => self.uk_close,
            Session::UsOpen => self.us_open,
            Session::UsClose => self.us_close,
        }
    }
}

pub const SESSION_PALETTE: SessionPalette = SessionPalette {
    asia_open: Color32::from_rgb(255, 244, 210),  // Pale gold
    asia_close: Color32::from_rgb(255, 229, 173), // Amber
    uk_open: Color32::from_rgb(217, 248, 196),    // Pale green
    uk_close: Color32::from_rgb(154, 222, 123),   // Leaf green
    us_open: Color32::from_rgb(180, 212, 255),    // Pale blue
    us_close: Color32::from_rgb(142, 184, 255),   // Cornflower blue
};
