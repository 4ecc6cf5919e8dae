//! Raw input events as consumed by the event core

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::world::ScreenPoint;

/// One raw platform input event, immutable per dispatch cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
    MouseButtonDown { pos: ScreenPoint, button: MouseButton },
    MouseButtonUp { pos: ScreenPoint, button: MouseButton },
    MouseMotion { pos: ScreenPoint },
    MouseWheel { delta: f32 },
}

impl InputEvent {
    /// Screen position for events that carry one
    pub fn screen_position(&self) -> Option<ScreenPoint> {
        match *self {
            InputEvent::MouseButtonDown { pos, .. }
            | InputEvent::MouseButtonUp { pos, .. }
            | InputEvent::MouseMotion { pos } => Some(pos),
            _ => None,
        }
    }
}
