//! Container geometry and protected content zones
//!
//! Exclusion zones are stored as fractions of the container so they survive
//! resizes unchanged; they only become pixels when checked against a concrete
//! `ContainerBounds`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current width/height of the hosting surface in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Host layout rect for the container, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Stand-in rect for a container that cannot be measured yet
    pub fn from_viewport(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn bounds(&self) -> ContainerBounds {
        ContainerBounds::new(self.width, self.height)
    }

    /// Check if a viewport-space point lies inside the rect
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }

    /// Translate a viewport-space point into container space
    #[inline]
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - Vec2::new(self.left, self.top)
    }
}

/// Rectangular region icons must avoid at rest, as fractions of container size
///
/// All four fields are in `[0, 1]`; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ExclusionZone {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a container-space point falls inside this zone
    pub fn contains(&self, point: Vec2, bounds: ContainerBounds) -> bool {
        let left = self.x * bounds.width;
        let top = self.y * bounds.height;
        point.x >= left
            && point.x <= left + self.width * bounds.width
            && point.y >= top
            && point.y <= top + self.height * bounds.height
    }
}

/// Check a container-space point against every zone
pub fn in_any_zone(point: Vec2, zones: &[ExclusionZone], bounds: ContainerBounds) -> bool {
    zones.iter().any(|zone| zone.contains(point, bounds))
}

/// Clamp a container-space point into the padded interior
///
/// Degenerate containers (smaller than twice the padding) collapse to a single
/// valid coordinate instead of producing an inverted range.
pub fn clamp_to_padded(point: Vec2, bounds: ContainerBounds, padding: f32) -> Vec2 {
    let max = Vec2::new(
        (bounds.width - padding).max(padding),
        (bounds.height - padding).max(padding),
    );
    point.clamp(Vec2::splat(padding), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_contains_scales_with_bounds() {
        let zone = ExclusionZone::new(0.25, 0.25, 0.5, 0.5);
        let bounds = ContainerBounds::new(800.0, 600.0);

        // Zone in pixels: x 200..600, y 150..450
        assert!(zone.contains(Vec2::new(400.0, 300.0), bounds));
        assert!(zone.contains(Vec2::new(200.0, 150.0), bounds));
        assert!(!zone.contains(Vec2::new(199.0, 300.0), bounds));
        assert!(!zone.contains(Vec2::new(400.0, 451.0), bounds));
    }

    #[test]
    fn test_in_any_zone() {
        let zones = [
            ExclusionZone::new(0.0, 0.0, 0.25, 0.25),
            ExclusionZone::new(0.75, 0.75, 0.25, 0.25),
        ];
        let bounds = ContainerBounds::new(400.0, 400.0);

        assert!(in_any_zone(Vec2::new(50.0, 50.0), &zones, bounds));
        assert!(in_any_zone(Vec2::new(350.0, 350.0), &zones, bounds));
        assert!(!in_any_zone(Vec2::new(200.0, 200.0), &zones, bounds));
        assert!(!in_any_zone(Vec2::new(200.0, 200.0), &[], bounds));
    }

    #[test]
    fn test_rect_contains_and_to_local() {
        let rect = ContainerRect::new(100.0, 50.0, 800.0, 600.0);

        assert!(rect.contains(Vec2::new(100.0, 50.0)));
        assert!(rect.contains(Vec2::new(900.0, 650.0)));
        assert!(!rect.contains(Vec2::new(99.0, 300.0)));
        assert!(!rect.contains(Vec2::new(500.0, 651.0)));

        let local = rect.to_local(Vec2::new(150.0, 80.0));
        assert_eq!(local, Vec2::new(50.0, 30.0));
    }

    #[test]
    fn test_clamp_to_padded() {
        let bounds = ContainerBounds::new(800.0, 600.0);
        let clamped = clamp_to_padded(Vec2::new(-20.0, 900.0), bounds, 80.0);
        assert_eq!(clamped, Vec2::new(80.0, 520.0));

        // Interior points pass through untouched
        let inside = Vec2::new(400.0, 300.0);
        assert_eq!(clamp_to_padded(inside, bounds, 80.0), inside);
    }

    #[test]
    fn test_clamp_degenerate_container() {
        // Container narrower than twice the padding collapses to one column
        let bounds = ContainerBounds::new(100.0, 600.0);
        let clamped = clamp_to_padded(Vec2::new(90.0, 300.0), bounds, 80.0);
        assert_eq!(clamped.x, 80.0);
        assert_eq!(clamped.y, 300.0);
    }
}
