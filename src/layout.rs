//! Fixed canvas layout: plot area and control placement.
//!
//! The widget renders into a fixed-size canvas. The plot rectangle and the
//! control rectangles are derived once at startup from the canvas size,
//! the padding constants, and measured label widths.

use crate::functions::Activation;
use crate::geom::{ScreenPoint, ScreenRect};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: f32 = 550.0;

pub(crate) const SIDE_PADDING: f32 = 80.0;
pub(crate) const TOP_BAR_HEIGHT: f32 = 80.0;
pub(crate) const BOTTOM_PADDING: f32 = 60.0;

pub(crate) const BUTTON_PADDING: f32 = 10.0;
pub(crate) const BUTTON_SPACING: f32 = 10.0;
pub(crate) const BUTTON_HEIGHT: f32 = 35.0;
pub(crate) const BUTTON_MIN_WIDTH: f32 = 80.0;
pub(crate) const SMALL_BUTTON_HEIGHT: f32 = 28.0;
pub(crate) const SMALL_BUTTON_PADDING: f32 = 8.0;

pub(crate) const TITLE_TEXT_SIZE: f32 = 24.0;
pub(crate) const LABEL_TEXT_SIZE: f32 = 12.0;
pub(crate) const BUTTON_TEXT_SIZE: f32 = 14.0;
pub(crate) const SMALL_BUTTON_TEXT_SIZE: f32 = 12.0;
pub(crate) const INFO_TEXT_SIZE: f32 = 13.0;

pub(crate) const RESET_LABEL: &str = "Reset View";

/// Measures rendered text, implemented by the host backend.
///
/// Control layout and the hover readout box need label extents before
/// anything is painted.
pub trait TextMeasurer {
    /// Width and height of `text` at the given font size, in pixels.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// What pressing a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Switch the active function and reset the view.
    Select(Activation),
    /// Reset the view for the current function.
    ResetView,
}

/// A clickable control with a fixed rectangle.
#[derive(Debug, Clone)]
pub struct Control {
    /// Hit rectangle in screen space.
    pub rect: ScreenRect,
    /// Display label.
    pub label: &'static str,
    /// Action invoked on press.
    pub action: ControlAction,
}

/// Compute the plot rectangle from the canvas size and paddings.
pub fn plot_area() -> ScreenRect {
    ScreenRect::from_origin_size(
        ScreenPoint::new(SIDE_PADDING, TOP_BAR_HEIGHT + SIDE_PADDING * 0.5),
        CANVAS_WIDTH - 2.0 * SIDE_PADDING,
        CANVAS_HEIGHT - TOP_BAR_HEIGHT - SIDE_PADDING - BOTTOM_PADDING,
    )
}

/// Lay out one selection control per function plus the reset control.
///
/// Function controls flow left to right along the top bar with measured
/// widths; the reset control sits right-aligned under the plot.
pub fn layout_controls(measurer: &impl TextMeasurer, plot: ScreenRect) -> Vec<Control> {
    let mut controls = Vec::with_capacity(Activation::ALL.len() + 1);
    let mut x = BUTTON_PADDING;
    let y = 25.0 + BUTTON_PADDING;
    for activation in Activation::ALL {
        let label = activation.label();
        let (text_width, _) = measurer.measure(label, BUTTON_TEXT_SIZE);
        let width = (text_width + BUTTON_PADDING * 2.0).max(BUTTON_MIN_WIDTH);
        controls.push(Control {
            rect: ScreenRect::from_origin_size(ScreenPoint::new(x, y), width, BUTTON_HEIGHT),
            label,
            action: ControlAction::Select(activation),
        });
        x += width + BUTTON_SPACING;
    }

    let (reset_width, _) = measurer.measure(RESET_LABEL, SMALL_BUTTON_TEXT_SIZE);
    let width = reset_width + SMALL_BUTTON_PADDING * 2.0;
    controls.push(Control {
        rect: ScreenRect::from_origin_size(
            ScreenPoint::new(
                plot.max.x - width,
                plot.max.y + BUTTON_SPACING + 5.0,
            ),
            width,
            SMALL_BUTTON_HEIGHT,
        ),
        label: RESET_LABEL,
        action: ControlAction::ResetView,
    });
    controls
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::TextMeasurer;

    /// Deterministic measurer for layout and frame tests.
    pub(crate) struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, size: f32) -> (f32, f32) {
            (text.chars().count() as f32 * size * 0.6, size * 1.2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FixedMeasurer;
    use super::*;

    #[test]
    fn plot_area_matches_canvas_constants() {
        let plot = plot_area();
        assert_eq!(plot.min, ScreenPoint::new(80.0, 120.0));
        assert_eq!(plot.width(), 640.0);
        assert_eq!(plot.height(), 330.0);
    }

    #[test]
    fn controls_do_not_overlap() {
        let controls = layout_controls(&FixedMeasurer, plot_area());
        assert_eq!(controls.len(), Activation::ALL.len() + 1);
        for pair in controls.windows(2) {
            let (a, b) = (&pair[0].rect, &pair[1].rect);
            let disjoint = a.max.x <= b.min.x
                || b.max.x <= a.min.x
                || a.max.y <= b.min.y
                || b.max.y <= a.min.y;
            assert!(disjoint, "controls overlap: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn short_labels_get_minimum_width() {
        let controls = layout_controls(&FixedMeasurer, plot_area());
        let elu = controls
            .iter()
            .find(|control| control.label == "ELU")
            .expect("ELU control");
        assert_eq!(elu.rect.width(), BUTTON_MIN_WIDTH);
    }

    #[test]
    fn reset_control_sits_under_plot_right_edge() {
        let plot = plot_area();
        let controls = layout_controls(&FixedMeasurer, plot);
        let reset = controls.last().expect("reset control");
        assert_eq!(reset.action, ControlAction::ResetView);
        assert_eq!(reset.rect.max.x, plot.max.x);
        assert!(reset.rect.min.y > plot.max.y);
    }
}
