//! The explorer session: active function, viewport, controls, and
//! interaction state in one owned object.
//!
//! Pointer handlers and the range fitter are the only writers; the frame
//! builder reads. Everything is an explicit, owned context so sessions can
//! be driven in tests without a window.

use crate::functions::{Activation, UnknownFunction};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::{DragAnchor, HoverSample, InteractionState, PointerEvent, pan_viewport};
use crate::layout::{Control, ControlAction, TextMeasurer, layout_controls, plot_area};
use crate::range::fit_viewport;
use crate::transform::Transform;
use crate::view::Viewport;

/// Interactive function-plotting session.
#[derive(Debug, Clone)]
pub struct Explorer {
    activation: Activation,
    viewport: Viewport,
    plot: ScreenRect,
    pub(crate) controls: Vec<Control>,
    state: InteractionState,
    last_cursor: Option<ScreenPoint>,
}

impl Explorer {
    /// Create a session showing the sigmoid over the default viewport.
    ///
    /// The plot area and control rectangles are computed once here; the
    /// canvas size is fixed, so they never change afterwards.
    pub fn new(measurer: &impl TextMeasurer) -> Self {
        let activation = Activation::Sigmoid;
        let plot = plot_area();
        Self {
            activation,
            viewport: fit_viewport(activation),
            plot,
            controls: layout_controls(measurer, plot),
            state: InteractionState::default(),
            last_cursor: None,
        }
    }

    /// The active function.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// The current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The plot rectangle.
    pub fn plot(&self) -> ScreenRect {
        self.plot
    }

    /// The laid-out controls, in hit-test order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The current interaction state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Last observed pointer position, used for control hover visuals.
    pub fn last_cursor(&self) -> Option<ScreenPoint> {
        self.last_cursor
    }

    /// The frame transform, or `None` while geometry is degenerate.
    pub fn transform(&self) -> Option<Transform> {
        Transform::new(self.viewport, self.plot)
    }

    /// Switch the active function and reset the view.
    pub fn select(&mut self, activation: Activation) {
        self.activation = activation;
        self.reset_view();
    }

    /// Switch the active function by display name.
    ///
    /// An unknown name aborts the switch; the prior function stays active.
    pub fn select_by_name(&mut self, name: &str) -> Result<(), UnknownFunction> {
        let activation = Activation::from_label(name)?;
        self.select(activation);
        Ok(())
    }

    /// Restore the default viewport for the active function.
    pub fn reset_view(&mut self) {
        self.viewport = fit_viewport(self.activation);
    }

    /// Feed one pointer event through the state machine.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(cursor) => self.pointer_moved(cursor),
            PointerEvent::Pressed(cursor) => self.pointer_pressed(cursor),
            PointerEvent::Released(cursor) => self.pointer_released(cursor),
        }
    }

    fn pointer_moved(&mut self, cursor: ScreenPoint) {
        self.last_cursor = Some(cursor);
        if let InteractionState::Dragging(anchor) = self.state {
            match self
                .transform()
                .and_then(|transform| pan_viewport(anchor, cursor, &transform))
            {
                Some(next) => self.viewport = next,
                None => self.state = self.hover_or_idle(cursor),
            }
            return;
        }
        self.state = self.hover_or_idle(cursor);
    }

    fn pointer_pressed(&mut self, cursor: ScreenPoint) {
        self.last_cursor = Some(cursor);
        // Controls take priority over the plot, in layout order.
        if let Some(action) = self
            .controls
            .iter()
            .find(|control| control.rect.contains(cursor))
            .map(|control| control.action)
        {
            match action {
                ControlAction::Select(activation) => self.select(activation),
                ControlAction::ResetView => self.reset_view(),
            }
            return;
        }
        if self.plot.contains(cursor) {
            self.state = InteractionState::Dragging(DragAnchor {
                cursor,
                x_min: self.viewport.x.min,
                y_min: self.viewport.y.min,
            });
        }
    }

    fn pointer_released(&mut self, cursor: ScreenPoint) {
        self.last_cursor = Some(cursor);
        self.state = self.hover_or_idle(cursor);
    }

    #[cfg(test)]
    pub(crate) fn force_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn hover_or_idle(&self, cursor: ScreenPoint) -> InteractionState {
        if !self.plot.contains(cursor) {
            return InteractionState::Idle;
        }
        let Some(transform) = self.transform() else {
            return InteractionState::Idle;
        };
        let x = transform.math_x(cursor.x);
        InteractionState::Hovering(HoverSample {
            cursor,
            x,
            y: self.activation.evaluate(x),
            slope: self.activation.derivative(x),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Activation;
    use crate::layout::test_support::FixedMeasurer;
    use crate::view::Range;

    fn explorer() -> Explorer {
        Explorer::new(&FixedMeasurer)
    }

    fn center_of(rect: ScreenRect) -> ScreenPoint {
        ScreenPoint::new(
            (rect.min.x + rect.max.x) * 0.5,
            (rect.min.y + rect.max.y) * 0.5,
        )
    }

    #[test]
    fn starts_hover_inside_plot() {
        let mut explorer = explorer();
        explorer.handle_event(PointerEvent::Moved(ScreenPoint::new(400.0, 300.0)));
        let sample = explorer.state().hover().copied().expect("hovering");
        assert!(explorer.viewport().x.contains(sample.x));
        assert!((sample.y - Activation::Sigmoid.evaluate(sample.x)).abs() < 1e-12);

        explorer.handle_event(PointerEvent::Moved(ScreenPoint::new(10.0, 10.0)));
        assert_eq!(*explorer.state(), InteractionState::Idle);
    }

    #[test]
    fn drag_pans_without_rescaling() {
        let mut explorer = explorer();
        let before = explorer.viewport();
        explorer.handle_event(PointerEvent::Pressed(ScreenPoint::new(400.0, 300.0)));
        assert!(explorer.state().is_dragging());
        explorer.handle_event(PointerEvent::Moved(ScreenPoint::new(450.0, 320.0)));
        let after = explorer.viewport();

        let transform = Transform::new(before, explorer.plot()).expect("transform");
        assert!((after.x.min - (before.x.min - 50.0 / transform.scale_x())).abs() < 1e-9);
        assert!((after.y.min - (before.y.min + 20.0 / transform.scale_y())).abs() < 1e-9);
        assert!((after.x.span() - before.x.span()).abs() < 1e-9);
        assert!((after.y.span() - before.y.span()).abs() < 1e-9);

        explorer.handle_event(PointerEvent::Released(ScreenPoint::new(450.0, 320.0)));
        assert!(explorer.state().hover().is_some());
    }

    #[test]
    fn release_outside_plot_goes_idle() {
        let mut explorer = explorer();
        explorer.handle_event(PointerEvent::Pressed(ScreenPoint::new(400.0, 300.0)));
        explorer.handle_event(PointerEvent::Released(ScreenPoint::new(5.0, 5.0)));
        assert_eq!(*explorer.state(), InteractionState::Idle);
    }

    #[test]
    fn control_press_switches_function_and_never_drags() {
        let mut explorer = explorer();
        let relu = explorer
            .controls()
            .iter()
            .find(|control| control.label == "ReLU")
            .expect("ReLU control")
            .rect;
        explorer.handle_event(PointerEvent::Pressed(center_of(relu)));
        assert_eq!(explorer.activation(), Activation::ReLU);
        assert!(!explorer.state().is_dragging());
        assert_eq!(explorer.viewport().x, Range::new(-5.0, 5.0));
        assert!((explorer.viewport().y.min + 0.5).abs() < 1e-9);
        assert!(explorer.viewport().y.max >= 4.5);
    }

    #[test]
    fn overlapping_control_still_wins_over_plot() {
        let mut explorer = explorer();
        // Move a control on top of the plot area; the press must hit the
        // control, not start a drag.
        let inside_plot = ScreenPoint::new(400.0, 300.0);
        explorer.controls[0].rect =
            ScreenRect::from_origin_size(ScreenPoint::new(380.0, 280.0), 60.0, 40.0);
        explorer.handle_event(PointerEvent::Pressed(inside_plot));
        assert!(!explorer.state().is_dragging());
        assert_eq!(explorer.activation(), Activation::Sigmoid);
        assert_eq!(explorer.viewport(), fit_viewport(Activation::Sigmoid));
    }

    #[test]
    fn reset_restores_panned_view() {
        let mut explorer = explorer();
        explorer.handle_event(PointerEvent::Pressed(ScreenPoint::new(400.0, 300.0)));
        explorer.handle_event(PointerEvent::Moved(ScreenPoint::new(600.0, 150.0)));
        explorer.handle_event(PointerEvent::Released(ScreenPoint::new(600.0, 150.0)));
        assert_ne!(explorer.viewport(), fit_viewport(Activation::Sigmoid));

        let reset = explorer
            .controls()
            .iter()
            .find(|control| control.label == "Reset View")
            .expect("reset control")
            .rect;
        explorer.handle_event(PointerEvent::Pressed(center_of(reset)));
        assert_eq!(explorer.viewport(), fit_viewport(Activation::Sigmoid));
    }

    #[test]
    fn unknown_name_keeps_prior_function() {
        let mut explorer = explorer();
        explorer.select(Activation::Tanh);
        let panned = explorer.viewport();
        assert!(explorer.select_by_name("Swish").is_err());
        assert_eq!(explorer.activation(), Activation::Tanh);
        assert_eq!(explorer.viewport(), panned);
    }
}
