//! Screen-space and isometric world-space coordinates

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A point in screen space (pixels, origin at the top-left corner)
pub type ScreenPoint = IVec2;

/// A point in isometric world space
///
/// `x`/`y` address a map cell, `z` is the stacking layer and `height` the
/// cell elevation the point was sampled at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub height: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            z: 0,
            height: 0,
        }
    }
}
