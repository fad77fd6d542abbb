//! Pointer/touch to table coordinate mapping

use glam::Vec2;

use crate::{Aabb, Side, Table};

/// Maps display-space pointer positions onto the logical table.
///
/// The table is always simulated at its logical size; the canvas showing it
/// may be scaled to any on-screen size and placed at any origin.
#[derive(Debug, Clone)]
pub struct PointerMapper {
    logical: Vec2,
    display: Vec2,
    origin: Vec2,
    bounds: Aabb,
}

impl PointerMapper {
    pub fn new(table: &Table) -> Self {
        let logical = Vec2::new(table.width, table.height);
        Self {
            logical,
            display: logical,
            origin: Vec2::ZERO,
            bounds: table.paddle_bounds(Side::Human),
        }
    }

    /// Update the on-screen size of the canvas
    pub fn resize(&mut self, display: Vec2) {
        self.display = display;
    }

    /// Update the on-screen position of the canvas' top-left corner
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn display(&self) -> Vec2 {
        self.display
    }

    /// Logical units per display pixel, per axis
    pub fn scale(&self) -> Option<Vec2> {
        if self.display.x > 0.0 && self.display.y > 0.0 && self.display.is_finite() {
            Some(self.logical / self.display)
        } else {
            None
        }
    }

    /// Convert a client coordinate to table units without clamping
    pub fn to_logical(&self, client: Vec2) -> Option<Vec2> {
        let logical = (client - self.origin) * self.scale()?;
        logical.is_finite().then_some(logical)
    }

    /// Convert a client coordinate to a legal human paddle target
    pub fn map(&self, client: Vec2) -> Option<Vec2> {
        self.to_logical(client).map(|p| self.bounds.clamp(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn mapper() -> PointerMapper {
        PointerMapper::new(&Table::new(&Config::new()))
    }

    #[test]
    fn test_identity_at_logical_size() {
        let m = mapper();
        assert_eq!(m.map(Vec2::new(100.0, 500.0)), Some(Vec2::new(100.0, 500.0)));
    }

    #[test]
    fn test_scales_half_size_canvas() {
        let mut m = mapper();
        m.resize(Vec2::new(200.0, 350.0));
        assert_eq!(m.to_logical(Vec2::new(50.0, 300.0)), Some(Vec2::new(100.0, 600.0)));
    }

    #[test]
    fn test_subtracts_origin() {
        let mut m = mapper();
        m.resize(Vec2::new(800.0, 1400.0));
        m.set_origin(Vec2::new(40.0, 10.0));
        assert_eq!(m.to_logical(Vec2::new(440.0, 1010.0)), Some(Vec2::new(200.0, 500.0)));
    }

    #[test]
    fn test_clamps_into_human_half() {
        let m = mapper();
        assert_eq!(m.map(Vec2::new(-30.0, 50.0)), Some(Vec2::new(28.0, 378.0)));
        assert_eq!(m.map(Vec2::new(900.0, 900.0)), Some(Vec2::new(372.0, 672.0)));
    }

    #[test]
    fn test_degenerate_display_is_rejected() {
        let mut m = mapper();
        m.resize(Vec2::new(0.0, 700.0));
        assert_eq!(m.map(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_non_finite_pointer_is_rejected() {
        let m = mapper();
        assert_eq!(m.map(Vec2::new(f32::INFINITY, 10.0)), None);
    }
}
