//! Pointer interaction state machine.
//!
//! Pointer events are reduced to an explicit state, making hover and pan
//! transitions auditable and unit-testable without a live canvas. The
//! session object in [`explorer`](crate::explorer) drives the transitions;
//! viewport mutation during a pan happens through [`pan_viewport`].

use crate::geom::ScreenPoint;
use crate::transform::Transform;
use crate::view::{Range, Viewport};

/// Pointer input consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved to a position.
    Moved(ScreenPoint),
    /// The primary button went down at a position.
    Pressed(ScreenPoint),
    /// The primary button was released at a position.
    Released(ScreenPoint),
}

/// Live readout at the hovered math position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSample {
    /// Pointer position in screen space.
    pub cursor: ScreenPoint,
    /// Hovered math X.
    pub x: f64,
    /// Function value at the hovered X.
    pub y: f64,
    /// Derivative at the hovered X.
    pub slope: f64,
}

/// Anchors captured when a pan starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at press.
    pub cursor: ScreenPoint,
    /// Viewport x-minimum at press.
    pub x_min: f64,
    /// Viewport y-minimum at press.
    pub y_min: f64,
}

/// Interaction mode, owned exclusively by the session object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Pointer outside the plot, no buttons down.
    #[default]
    Idle,
    /// Pointer inside the plot with a live readout.
    Hovering(HoverSample),
    /// Panning the viewport from the captured anchors.
    Dragging(DragAnchor),
}

impl InteractionState {
    /// The current hover readout, if any.
    pub fn hover(&self) -> Option<&HoverSample> {
        match self {
            Self::Hovering(sample) => Some(sample),
            _ => None,
        }
    }

    /// Whether a pan is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Pan the viewport from its drag anchors to the current pointer position.
///
/// The viewport origin shifts by the pixel delta converted into math
/// units; width and height are preserved (pan, no zoom). Returns `None`
/// when the transform is degenerate, which aborts the drag.
pub fn pan_viewport(
    anchor: DragAnchor,
    cursor: ScreenPoint,
    transform: &Transform,
) -> Option<Viewport> {
    let scale_x = transform.scale_x();
    let scale_y = transform.scale_y();
    if scale_x <= 0.0 || scale_y <= 0.0 {
        return None;
    }
    let dx_math = (cursor.x - anchor.cursor.x) as f64 / scale_x;
    let dy_math = (cursor.y - anchor.cursor.y) as f64 / scale_y;
    let plot = transform.plot();
    let x_min = anchor.x_min - dx_math;
    let y_min = anchor.y_min + dy_math;
    Some(Viewport::new(
        Range::new(x_min, x_min + plot.width() as f64 / scale_x),
        Range::new(y_min, y_min + plot.height() as f64 / scale_y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenRect;

    #[test]
    fn pan_shifts_origin_and_preserves_span() {
        let viewport = Viewport::new(Range::new(-5.0, 5.0), Range::new(-1.5, 1.5));
        let plot = ScreenRect::new(ScreenPoint::new(80.0, 120.0), ScreenPoint::new(720.0, 430.0));
        let transform = Transform::new(viewport, plot).expect("valid transform");
        let anchor = DragAnchor {
            cursor: ScreenPoint::new(400.0, 300.0),
            x_min: viewport.x.min,
            y_min: viewport.y.min,
        };

        let next = pan_viewport(anchor, ScreenPoint::new(450.0, 320.0), &transform)
            .expect("pan succeeds");
        let expected_x_min = -5.0 - 50.0 / transform.scale_x();
        let expected_y_min = -1.5 + 20.0 / transform.scale_y();
        assert!((next.x.min - expected_x_min).abs() < 1e-9);
        assert!((next.y.min - expected_y_min).abs() < 1e-9);
        assert!((next.x.span() - viewport.x.span()).abs() < 1e-9);
        assert!((next.y.span() - viewport.y.span()).abs() < 1e-9);
    }

    #[test]
    fn default_state_is_idle() {
        let state = InteractionState::default();
        assert_eq!(state, InteractionState::Idle);
        assert!(state.hover().is_none());
        assert!(!state.is_dragging());
    }
}
