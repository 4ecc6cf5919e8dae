//! World state: terrain grid, camera, render layers and session flags

pub mod camera;
pub mod coords;
pub mod map;

pub use camera::Camera;
pub use coords::{ScreenPoint, WorldPoint};
pub use map::Map;

use bitflags::bitflags;

use crate::settings::Settings;

bitflags! {
    /// Render layers that can be toggled at runtime
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Layers: u8 {
        const GRID = 1 << 0;
        const FLOOR = 1 << 1;
        const BUILDINGS = 1 << 2;
        const SELECTION = 1 << 3;
    }
}

/// The simulated world as seen by the input core
pub struct World {
    pub map: Map,
    pub camera: Camera,
    visible_layers: Layers,
    fullscreen: bool,
    quit_requested: bool,
}

impl World {
    pub fn new(settings: &Settings) -> Self {
        let center = WorldPoint::new(settings.map_size / 2, settings.map_size / 2);
        Self {
            map: Map::new(settings.map_size),
            camera: Camera::new(settings.screen_width, settings.screen_height, center),
            visible_layers: Layers::all(),
            fullscreen: settings.fullscreen,
            quit_requested: false,
        }
    }

    /// Ask the host loop to terminate the session
    pub fn request_quit(&mut self) {
        log::info!("quit requested");
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn toggle_layer(&mut self, layer: Layers) {
        self.visible_layers.toggle(layer);
        log::debug!("visible layers: {:?}", self.visible_layers);
    }

    pub fn is_layer_visible(&self, layer: Layers) -> bool {
        self.visible_layers.contains(layer)
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        log::debug!("fullscreen: {}", self.fullscreen);
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_point_within_boundaries(&self, point: WorldPoint) -> bool {
        self.map.is_point_within_bounds(point)
    }

    pub fn increase_height_of_cell(&mut self, point: WorldPoint, max_height: u32) {
        if self.map.raise_cell(point, max_height) {
            log::debug!(
                "raised cell ({}, {}) to {}",
                point.x,
                point.y,
                self.map.elevation(point)
            );
        }
    }

    pub fn decrease_height_of_cell(&mut self, point: WorldPoint) {
        if self.map.lower_cell(point) {
            log::debug!(
                "lowered cell ({}, {}) to {}",
                point.x,
                point.y,
                self.map.elevation(point)
            );
        }
    }

    pub fn center_screen_on_point(&mut self, point: WorldPoint) {
        self.camera.center_on(point);
    }

    pub fn increase_zoom_level(&mut self) {
        self.camera.increase_zoom();
    }

    pub fn decrease_zoom_level(&mut self) {
        self.camera.decrease_zoom();
    }

    pub fn screen_to_iso(&self, screen: ScreenPoint) -> WorldPoint {
        self.camera.screen_to_iso(screen)
    }

    /// Cells drawn in front of `point` that would hide it at its elevation
    ///
    /// The renderer draws these transparent while the cell is highlighted.
    pub fn cells_obscuring(&self, point: WorldPoint) -> Vec<WorldPoint> {
        let own = self.map.elevation(point);
        [(1, 0), (0, 1), (1, 1)]
            .iter()
            .map(|&(dx, dy)| WorldPoint::new(point.x + dx, point.y + dy))
            .filter(|&front| {
                self.map.is_point_within_bounds(front) && self.map.elevation(front) > own
            })
            .collect()
    }
}
