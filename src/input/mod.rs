//! Input events and the event-routing core

pub mod event;
pub mod event_manager;

pub use event::InputEvent;
pub use event_manager::{run_elevation_benchmark, EventManager};
