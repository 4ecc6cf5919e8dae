//! UI element registry, hit testing and tooltip

pub mod element;
pub mod manager;
pub mod tooltip;

pub use element::{Rect, UiAction, UiElement, UiElementKind};
pub use manager::{ElementKey, UiManager};
pub use tooltip::Tooltip;
