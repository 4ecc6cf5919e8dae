//! # Isopolis - input-event core for an isometric city builder
//!
//! Routes raw platform input (mouse, keyboard, wheel) to either the UI
//! layer or the world simulation, with Z-ordered hit testing, hover and
//! tooltip tracking, and gesture exclusivity between the two layers.

pub mod app;
pub mod input;
pub mod settings;
pub mod ui;
pub mod world;

pub use app::App;

/// Common imports for internal use
pub mod prelude {
    pub use crate::input::{EventManager, InputEvent};
    pub use crate::settings::{Settings, TerrainEditMode};
    pub use crate::ui::{Rect, UiAction, UiElement, UiManager};
    pub use crate::world::{Layers, ScreenPoint, World, WorldPoint};
}
