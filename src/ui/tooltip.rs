//! Cursor tooltip with a display-delay timer

use std::time::Duration;

use glam::IVec2;
use instant::Instant;

use crate::world::ScreenPoint;

/// Delay between the cursor settling over an element and the tooltip
/// becoming visible
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(700);

/// Tooltip shown next to the cursor for elements that carry tooltip text
pub struct Tooltip {
    text: String,
    position: ScreenPoint,
    visible: bool,
    shown_at: Option<Instant>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            position: ScreenPoint::ZERO,
            visible: false,
            shown_at: None,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rendered size of the tooltip box for the current text
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.text.chars().count() as i32 * 8 + 8, 18)
    }

    pub fn set_position(&mut self, position: ScreenPoint) {
        self.position = position;
    }

    pub fn position(&self) -> ScreenPoint {
        self.position
    }

    /// Show or hide the tooltip; hiding also cancels the delay timer
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.shown_at = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// (Re)start the display-delay timer
    pub fn start_timer(&mut self) {
        self.shown_at = Some(Instant::now());
    }

    /// Whether the renderer should draw the tooltip this frame
    pub fn should_draw(&self) -> bool {
        self.visible
            && self
                .shown_at
                .is_some_and(|shown_at| shown_at.elapsed() >= TOOLTIP_DELAY)
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}
