//! Square grid of terrain cells with per-cell elevation

use super::coords::WorldPoint;

/// The terrain grid
///
/// Cells are addressed by the `x`/`y` components of a [`WorldPoint`] and
/// store a single elevation value each.
pub struct Map {
    size: i32,
    /// Elevation per cell, row-major order
    elevations: Vec<u32>,
}

impl Map {
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "map size must be positive");
        Self {
            size,
            elevations: vec![0; (size * size) as usize],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether the point addresses a cell inside the grid
    pub fn is_point_within_bounds(&self, point: WorldPoint) -> bool {
        (0..self.size).contains(&point.x) && (0..self.size).contains(&point.y)
    }

    /// Elevation of the cell at `point`, or 0 for out-of-bounds points
    pub fn elevation(&self, point: WorldPoint) -> u32 {
        if !self.is_point_within_bounds(point) {
            return 0;
        }
        self.elevations[(point.y * self.size + point.x) as usize]
    }

    /// Raise the cell by one unit, clamped to `max_height`
    ///
    /// Returns true if the elevation changed.
    pub fn raise_cell(&mut self, point: WorldPoint, max_height: u32) -> bool {
        if !self.is_point_within_bounds(point) {
            return false;
        }
        let idx = (point.y * self.size + point.x) as usize;
        if self.elevations[idx] >= max_height {
            return false;
        }
        self.elevations[idx] += 1;
        true
    }

    /// Lower the cell by one unit, clamped to 0
    ///
    /// Returns true if the elevation changed.
    pub fn lower_cell(&mut self, point: WorldPoint) -> bool {
        if !self.is_point_within_bounds(point) {
            return false;
        }
        let idx = (point.y * self.size + point.x) as usize;
        if self.elevations[idx] == 0 {
            return false;
        }
        self.elevations[idx] -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_check() {
        let map = Map::new(128);

        assert!(map.is_point_within_bounds(WorldPoint::new(0, 0)));
        assert!(map.is_point_within_bounds(WorldPoint::new(64, 64)));
        assert!(map.is_point_within_bounds(WorldPoint::new(127, 127)));
        assert!(!map.is_point_within_bounds(WorldPoint::new(128, 0)));
        assert!(!map.is_point_within_bounds(WorldPoint::new(-1, 5)));
    }

    #[test]
    fn test_raise_and_lower_cell() {
        let mut map = Map::new(16);
        let cell = WorldPoint::new(3, 7);

        assert!(map.raise_cell(cell, 4));
        assert_eq!(map.elevation(cell), 1);
        assert!(map.lower_cell(cell));
        assert_eq!(map.elevation(cell), 0);
    }

    #[test]
    fn test_raise_clamps_at_max_height() {
        let mut map = Map::new(16);
        let cell = WorldPoint::new(0, 0);

        for _ in 0..10 {
            map.raise_cell(cell, 4);
        }
        assert_eq!(map.elevation(cell), 4);
        assert!(!map.raise_cell(cell, 4));
    }

    #[test]
    fn test_lower_clamps_at_zero() {
        let mut map = Map::new(16);
        let cell = WorldPoint::new(1, 1);

        assert!(!map.lower_cell(cell));
        assert_eq!(map.elevation(cell), 0);
    }

    #[test]
    fn test_out_of_bounds_edits_are_rejected() {
        let mut map = Map::new(16);
        let outside = WorldPoint::new(16, 16);

        assert!(!map.raise_cell(outside, 4));
        assert!(!map.lower_cell(outside));
        assert_eq!(map.elevation(outside), 0);
    }
}
