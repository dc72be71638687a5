//! Geometric primitives: Point, Size, Rect, `TrackGeometry`.

use serde::{Deserialize, Serialize};

/// A 2D point in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Axis-aligned rectangle in client coordinates, as returned by a bounding
/// client rect query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Rectangle at `(x, y)` with the given extent.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `point` lies inside, edges included.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        (self.x..=self.right()).contains(&point.x)
            && (self.y..=self.y + self.height).contains(&point.y)
    }
}

/// Horizontal measurement of a slider track.
///
/// A width of zero means the track is not attached (or not yet measured) and
/// every position derived from it collapses to 0%.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// On-screen width of the track in pixels (never negative).
    pub width: f64,
    /// Client X coordinate of the track's left edge.
    pub offset_x: f64,
}

impl TrackGeometry {
    /// Geometry of a track that is not attached.
    pub const DETACHED: Self = Self {
        width: 0.0,
        offset_x: 0.0,
    };

    /// Create a geometry, clamping negative or non-finite widths to zero.
    #[must_use]
    pub fn new(width: f64, offset_x: f64) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let offset_x = if offset_x.is_finite() { offset_x } else { 0.0 };
        Self { width, offset_x }
    }

    /// Geometry from the bounding rectangle of the track element.
    #[must_use]
    pub fn from_rect(rect: &Rect) -> Self {
        Self::new(rect.width, rect.x)
    }

    /// Whether positions can be derived from this geometry.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0
    }

    /// Pixel offset of a client X coordinate relative to the track's left edge.
    #[must_use]
    pub fn relative_x(&self, client_x: f64) -> f64 {
        client_x - self.offset_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(4.0, 5.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_rect_contains_point() {
        let rect = Rect::new(10.0, 10.0, 100.0, 20.0);
        assert!(rect.contains_point(&Point::new(10.0, 10.0)));
        assert!(rect.contains_point(&Point::new(110.0, 30.0)));
        assert!(!rect.contains_point(&Point::new(9.9, 15.0)));
        assert!(!rect.contains_point(&Point::new(50.0, 31.0)));
    }

    #[test]
    fn test_rect_center_and_right() {
        let rect = Rect::new(10.0, 0.0, 200.0, 20.0);
        assert_eq!(rect.center(), Point::new(110.0, 10.0));
        assert_eq!(rect.right(), 210.0);
        assert_eq!(rect.size(), Size::new(200.0, 20.0));
    }

    #[test]
    fn test_track_geometry_from_rect() {
        let geometry = TrackGeometry::from_rect(&Rect::new(40.0, 5.0, 200.0, 24.0));
        assert_eq!(geometry.width, 200.0);
        assert_eq!(geometry.offset_x, 40.0);
        assert!(geometry.is_valid());
        assert_eq!(geometry.relative_x(140.0), 100.0);
    }

    #[test]
    fn test_track_geometry_clamps_bad_width() {
        assert_eq!(TrackGeometry::new(-5.0, 0.0).width, 0.0);
        assert_eq!(TrackGeometry::new(f64::NAN, 0.0).width, 0.0);
        assert_eq!(TrackGeometry::new(f64::INFINITY, f64::NAN).offset_x, 0.0);
        assert!(!TrackGeometry::DETACHED.is_valid());
    }
}
