//! Screen-space geometric primitives shared by the plotting pipeline.
//!
//! Coordinates carry `f32` pixel values, matching what render backends
//! consume; math-space values stay `f64` and live in [`crate::view`].

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its origin and size.
    pub fn from_origin_size(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self {
            min: origin,
            max: ScreenPoint::new(origin.x + width, origin.y + height),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether a point lies strictly inside the rectangle.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_exclusive_at_edges() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(10.0, 10.0), 100.0, 50.0);
        assert!(rect.contains(ScreenPoint::new(50.0, 30.0)));
        assert!(!rect.contains(ScreenPoint::new(10.0, 30.0)));
        assert!(!rect.contains(ScreenPoint::new(50.0, 60.0)));
    }
}
