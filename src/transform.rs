//! Coordinate transform between math space and screen space.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::view::Viewport;

/// Transform from math coordinates into screen coordinates.
///
/// Built per frame from the current viewport and plot rectangle.
/// Construction fails when the viewport or plot rectangle is invalid or a
/// derived scale factor is non-finite; callers treat that as degenerate
/// geometry and skip axis/curve/overlay drawing for the frame.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    viewport: Viewport,
    plot: ScreenRect,
    scale_x: f64,
    scale_y: f64,
}

impl Transform {
    /// Create a transform for the given viewport and plot rectangle.
    pub fn new(viewport: Viewport, plot: ScreenRect) -> Option<Self> {
        if !viewport.is_valid() || !plot.is_valid() {
            return None;
        }
        let scale_x = plot.width() as f64 / viewport.x.span();
        let scale_y = plot.height() as f64 / viewport.y.span();
        if !scale_x.is_finite() || !scale_y.is_finite() || scale_x <= 0.0 || scale_y <= 0.0 {
            return None;
        }
        Some(Self {
            viewport,
            plot,
            scale_x,
            scale_y,
        })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the plot rectangle.
    pub fn plot(&self) -> ScreenRect {
        self.plot
    }

    /// Horizontal pixels per math unit.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Vertical pixels per math unit.
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Map a math X value to a screen X coordinate.
    pub fn screen_x(&self, math_x: f64) -> f32 {
        (self.plot.min.x as f64 + (math_x - self.viewport.x.min) * self.scale_x) as f32
    }

    /// Map a math Y value to a screen Y coordinate.
    ///
    /// Y is flipped: increasing math Y moves up the screen.
    pub fn screen_y(&self, math_y: f64) -> f32 {
        (self.plot.min.y as f64 + (self.viewport.y.max - math_y) * self.scale_y) as f32
    }

    /// Map a math point to a screen point.
    pub fn screen_point(&self, math_x: f64, math_y: f64) -> ScreenPoint {
        ScreenPoint::new(self.screen_x(math_x), self.screen_y(math_y))
    }

    /// Map a screen X coordinate back into math space.
    pub fn math_x(&self, screen_x: f32) -> f64 {
        self.viewport.x.min + (screen_x as f64 - self.plot.min.x as f64) / self.scale_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    fn transform() -> Transform {
        let viewport = Viewport::new(Range::new(-5.0, 5.0), Range::new(-1.5, 1.5));
        let plot = ScreenRect::new(ScreenPoint::new(80.0, 120.0), ScreenPoint::new(720.0, 430.0));
        Transform::new(viewport, plot).expect("valid transform")
    }

    #[test]
    fn screen_x_roundtrip() {
        let transform = transform();
        for sx in [80.0_f32, 200.0, 400.0, 719.0] {
            let roundtrip = transform.screen_x(transform.math_x(sx));
            assert!((roundtrip - sx).abs() < 1e-3, "{sx} -> {roundtrip}");
        }
    }

    #[test]
    fn y_axis_is_flipped() {
        let transform = transform();
        assert!(transform.screen_y(1.0) < transform.screen_y(-1.0));
        assert!((transform.screen_y(1.5) - 120.0).abs() < 1e-3);
        assert!((transform.screen_y(-1.5) - 430.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_viewport_is_rejected() {
        let plot = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0));
        let collapsed = Viewport::new(Range::new(1.0, 1.0), Range::new(0.0, 1.0));
        assert!(Transform::new(collapsed, plot).is_none());
        let unbounded = Viewport::new(Range::new(0.0, f64::INFINITY), Range::new(0.0, 1.0));
        assert!(Transform::new(unbounded, plot).is_none());
        let swapped = ScreenRect::new(ScreenPoint::new(100.0, 0.0), ScreenPoint::new(0.0, 100.0));
        let viewport = Viewport::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0));
        assert!(Transform::new(viewport, swapped).is_none());
    }
}
