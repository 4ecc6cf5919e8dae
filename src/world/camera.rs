//! Camera with discrete zoom steps and screen/iso coordinate conversion

use glam::Vec2;

use super::coords::{ScreenPoint, WorldPoint};

/// Base tile footprint at zoom 1.0, in pixels
pub const TILE_WIDTH: f32 = 32.0;
pub const TILE_HEIGHT: f32 = 16.0;

const ZOOM_STEP: f32 = 0.25;
const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 4.0;

/// Viewpoint onto the isometric map
pub struct Camera {
    center: WorldPoint,
    zoom: f32,
    viewport: Vec2,
}

impl Camera {
    pub fn new(viewport_width: u32, viewport_height: u32, center: WorldPoint) -> Self {
        Self {
            center,
            zoom: 1.0,
            viewport: Vec2::new(viewport_width as f32, viewport_height as f32),
        }
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom
    }

    pub fn center(&self) -> WorldPoint {
        self.center
    }

    /// Zoom in by one step, clamped
    pub fn increase_zoom(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        log::debug!("zoom level: {:.2}", self.zoom);
    }

    /// Zoom out by one step, clamped
    pub fn decrease_zoom(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        log::debug!("zoom level: {:.2}", self.zoom);
    }

    /// Move the view so `point` sits at the viewport center
    pub fn center_on(&mut self, point: WorldPoint) {
        self.center = point;
        log::debug!("camera centered on iso ({}, {})", point.x, point.y);
    }

    /// Screen position of the viewport origin for the current center/zoom
    fn origin(&self) -> Vec2 {
        let half_w = TILE_WIDTH * self.zoom / 2.0;
        let half_h = TILE_HEIGHT * self.zoom / 2.0;
        let cx = self.center.x as f32;
        let cy = self.center.y as f32;
        self.viewport / 2.0 - Vec2::new((cx - cy) * half_w, (cx + cy) * half_h)
    }

    /// Convert a screen position to the isometric cell under it
    pub fn screen_to_iso(&self, screen: ScreenPoint) -> WorldPoint {
        let half_w = TILE_WIDTH * self.zoom / 2.0;
        let half_h = TILE_HEIGHT * self.zoom / 2.0;
        let rel = Vec2::new(screen.x as f32, screen.y as f32) - self.origin();
        let a = rel.x / half_w;
        let b = rel.y / half_h;
        WorldPoint::new(
            ((a + b) / 2.0).round() as i32,
            ((b - a) / 2.0).round() as i32,
        )
    }

    /// Screen position of an isometric cell's anchor point
    pub fn iso_to_screen(&self, point: WorldPoint) -> ScreenPoint {
        let half_w = TILE_WIDTH * self.zoom / 2.0;
        let half_h = TILE_HEIGHT * self.zoom / 2.0;
        let origin = self.origin();
        let x = point.x as f32;
        let y = point.y as f32;
        ScreenPoint::new(
            (origin.x + (x - y) * half_w).round() as i32,
            (origin.y + (x + y) * half_h).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(1280, 720, WorldPoint::new(64, 64))
    }

    #[test]
    fn test_zoom_steps_and_clamping() {
        let mut cam = camera();

        cam.increase_zoom();
        assert_eq!(cam.zoom_level(), 1.25);
        for _ in 0..50 {
            cam.increase_zoom();
        }
        assert_eq!(cam.zoom_level(), MAX_ZOOM);
        for _ in 0..50 {
            cam.decrease_zoom();
        }
        assert_eq!(cam.zoom_level(), MIN_ZOOM);
    }

    #[test]
    fn test_center_maps_to_viewport_center() {
        let cam = camera();
        let screen = cam.iso_to_screen(WorldPoint::new(64, 64));
        assert_eq!(screen, ScreenPoint::new(640, 360));
    }

    #[test]
    fn test_screen_iso_round_trip() {
        let mut cam = camera();
        for &(x, y) in &[(0, 0), (64, 64), (10, 120), (127, 3)] {
            let cell = WorldPoint::new(x, y);
            assert_eq!(cam.screen_to_iso(cam.iso_to_screen(cell)), cell);
        }

        cam.increase_zoom();
        cam.center_on(WorldPoint::new(12, 90));
        let cell = WorldPoint::new(30, 40);
        assert_eq!(cam.screen_to_iso(cam.iso_to_screen(cell)), cell);
    }
}
