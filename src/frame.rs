//! Per-frame model computation.
//!
//! [`build_frame`] turns the explorer session into a [`RenderList`]:
//! background, title, controls, axes, the sampled curve, and the hover
//! overlay. It performs no drawing itself, so frame geometry is testable
//! without a surface; backends replay the list.

use crate::explorer::Explorer;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::HoverSample;
use crate::layout::{
    BUTTON_SPACING, BUTTON_TEXT_SIZE, CANVAS_WIDTH, Control, ControlAction, INFO_TEXT_SIZE,
    LABEL_TEXT_SIZE, SMALL_BUTTON_TEXT_SIZE, TITLE_TEXT_SIZE, TextMeasurer,
};
use crate::render::{
    LineSegment, LineStyle, RectStyle, RenderCommand, RenderList, TextAlign, TextStyle,
};
use crate::style::Theme;
use crate::ticks;
use crate::transform::Transform;

const TITLE: &str = "Activation Function Visualizer";

const AXIS_STROKE_WIDTH: f32 = 1.5;
const CURVE_STROKE_WIDTH: f32 = 2.5;
const TANGENT_STROKE_WIDTH: f32 = 1.5;
const TICK_HALF_LENGTH: f32 = 3.0;
const TICK_TEXT_SIZE: f32 = LABEL_TEXT_SIZE - 2.0;
const MARKER_DIAMETER: f32 = 8.0;
const BUTTON_CORNER_RADIUS: f32 = 8.0;
const READOUT_PADDING: f32 = 8.0;
const READOUT_LINE_GAP: f32 = 3.0;
const READOUT_OFFSET: f32 = 15.0;
const READOUT_MARGIN: f32 = 10.0;
const ZERO_EPS: f64 = 1e-9;

/// Build the render list for one frame.
pub fn build_frame(explorer: &Explorer, theme: &Theme, measurer: &impl TextMeasurer) -> RenderList {
    let mut render = RenderList::new();
    render.push(RenderCommand::Background(theme.background));
    build_title(&mut render, theme);
    build_controls(&mut render, explorer, theme);

    build_caption(&mut render, explorer, theme);

    // Degenerate geometry skips everything that needs the transform, for
    // this frame only.
    if let Some(transform) = explorer.transform() {
        build_axes(&mut render, &transform, theme);
        build_curve(&mut render, explorer, &transform, theme);
        if let Some(sample) = explorer.state().hover() {
            build_hover(&mut render, sample, &transform, theme, measurer);
        }
    }
    render
}

fn build_title(render: &mut RenderList, theme: &Theme) {
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(CANVAS_WIDTH * 0.5, 10.0),
        text: TITLE.to_string(),
        style: TextStyle {
            color: theme.primary_text,
            size: TITLE_TEXT_SIZE,
            align: TextAlign::Center,
        },
    });
}

fn build_controls(render: &mut RenderList, explorer: &Explorer, theme: &Theme) {
    for control in explorer.controls() {
        build_control(render, explorer, control, theme);
    }
}

fn build_control(render: &mut RenderList, explorer: &Explorer, control: &Control, theme: &Theme) {
    let active = control.action == ControlAction::Select(explorer.activation());
    let hovered = explorer
        .last_cursor()
        .is_some_and(|cursor| control.rect.contains(cursor));
    let (fill, stroke) = if active {
        (theme.button_active_fill, theme.button_active_fill)
    } else if hovered {
        (theme.button_hover_fill, theme.button_stroke)
    } else {
        (theme.button_fill, theme.button_stroke)
    };
    render.push(RenderCommand::Rect {
        rect: control.rect,
        style: RectStyle {
            fill,
            stroke,
            stroke_width: 1.0,
            corner_radius: BUTTON_CORNER_RADIUS,
        },
    });

    let size = match control.action {
        ControlAction::Select(_) => BUTTON_TEXT_SIZE,
        ControlAction::ResetView => SMALL_BUTTON_TEXT_SIZE,
    };
    let center = ScreenPoint::new(
        (control.rect.min.x + control.rect.max.x) * 0.5,
        (control.rect.min.y + control.rect.max.y - size) * 0.5,
    );
    render.push(RenderCommand::Text {
        position: center,
        text: control.label.to_string(),
        style: TextStyle {
            color: if active {
                theme.button_active_text
            } else {
                theme.button_text
            },
            size,
            align: TextAlign::Center,
        },
    });
}

fn build_axes(render: &mut RenderList, transform: &Transform, theme: &Theme) {
    let plot = transform.plot();
    let viewport = transform.viewport();
    let axis_style = LineStyle {
        color: theme.axis,
        width: AXIS_STROKE_WIDTH,
    };

    // Zero lines, when inside the plot.
    let zero_y = transform.screen_y(0.0);
    let x_axis_visible = zero_y >= plot.min.y && zero_y <= plot.max.y;
    let zero_x = transform.screen_x(0.0);
    let y_axis_visible = zero_x >= plot.min.x && zero_x <= plot.max.x;

    let mut axis_lines = Vec::new();
    if x_axis_visible {
        axis_lines.push(LineSegment::new(
            ScreenPoint::new(plot.min.x, zero_y),
            ScreenPoint::new(plot.max.x, zero_y),
        ));
    }
    if y_axis_visible {
        axis_lines.push(LineSegment::new(
            ScreenPoint::new(zero_x, plot.min.y),
            ScreenPoint::new(zero_x, plot.max.y),
        ));
    }
    if !axis_lines.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments: axis_lines,
            style: axis_style,
        });
    }

    // X ticks sit on the zero line when visible, otherwise on the bottom
    // edge. The zero label is dropped while the crossing axis shows it.
    let x_baseline = if x_axis_visible { zero_y } else { plot.max.y };
    let mut tick_marks = Vec::new();
    for tick in ticks::plan(viewport.x) {
        let sx = transform.screen_x(tick.value);
        if sx < plot.min.x - 1.0 || sx > plot.max.x + 1.0 {
            continue;
        }
        tick_marks.push(LineSegment::new(
            ScreenPoint::new(sx, x_baseline - TICK_HALF_LENGTH),
            ScreenPoint::new(sx, x_baseline + TICK_HALF_LENGTH),
        ));
        if tick.value.abs() > ZERO_EPS || !y_axis_visible {
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(sx, x_baseline + 5.0),
                text: tick.label,
                style: TextStyle {
                    color: theme.secondary_text,
                    size: TICK_TEXT_SIZE,
                    align: TextAlign::Center,
                },
            });
        }
    }

    let y_baseline = if y_axis_visible { zero_x } else { plot.min.x };
    for tick in ticks::plan(viewport.y) {
        let sy = transform.screen_y(tick.value);
        if sy < plot.min.y - 1.0 || sy > plot.max.y + 1.0 {
            continue;
        }
        tick_marks.push(LineSegment::new(
            ScreenPoint::new(y_baseline - TICK_HALF_LENGTH, sy),
            ScreenPoint::new(y_baseline + TICK_HALF_LENGTH, sy),
        ));
        if tick.value.abs() > ZERO_EPS || !x_axis_visible {
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(y_baseline - 5.0, sy - TICK_TEXT_SIZE * 0.5),
                text: tick.label,
                style: TextStyle {
                    color: theme.secondary_text,
                    size: TICK_TEXT_SIZE,
                    align: TextAlign::Right,
                },
            });
        }
    }
    if !tick_marks.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments: tick_marks,
            style: axis_style,
        });
    }

    // Axis letters follow the axis lines, clamped to the plot edges.
    let x_letter_y = clamp(zero_y, plot.min.y, plot.max.y - 20.0) + 15.0;
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(plot.max.x - 10.0, x_letter_y),
        text: "x".to_string(),
        style: TextStyle {
            color: theme.primary_text,
            size: LABEL_TEXT_SIZE,
            align: TextAlign::Center,
        },
    });
    let y_letter_x = clamp(zero_x, plot.min.x + 20.0, plot.max.x) - 15.0;
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(y_letter_x, plot.min.y + 10.0 - LABEL_TEXT_SIZE * 0.5),
        text: "y".to_string(),
        style: TextStyle {
            color: theme.primary_text,
            size: LABEL_TEXT_SIZE,
            align: TextAlign::Right,
        },
    });
}

fn build_curve(render: &mut RenderList, explorer: &Explorer, transform: &Transform, theme: &Theme) {
    let plot = transform.plot();
    let activation = explorer.activation();
    let columns = plot.width().round() as u32;
    let mut points = Vec::with_capacity(columns as usize + 1);
    // One sample per pixel column; runaway values clamp to the plot's
    // vertical bounds instead of escaping the frame.
    for column in 0..=columns {
        let math_x = transform.viewport().x.min + column as f64 / transform.scale_x();
        let math_y = activation.evaluate(math_x);
        let sy = clamp(transform.screen_y(math_y), plot.min.y, plot.max.y);
        points.push(ScreenPoint::new(plot.min.x + column as f32, sy));
    }
    render.push(RenderCommand::Polyline {
        points,
        style: LineStyle {
            color: theme.curve,
            width: CURVE_STROKE_WIDTH,
        },
    });
}

fn build_caption(render: &mut RenderList, explorer: &Explorer, theme: &Theme) {
    let plot = explorer.plot();
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(
            (plot.min.x + plot.max.x) * 0.5,
            plot.max.y + BUTTON_SPACING + 2.0,
        ),
        text: explorer.activation().label().to_string(),
        style: TextStyle {
            color: theme.accent,
            size: LABEL_TEXT_SIZE + 4.0,
            align: TextAlign::Center,
        },
    });
}

fn build_hover(
    render: &mut RenderList,
    sample: &HoverSample,
    transform: &Transform,
    theme: &Theme,
    measurer: &impl TextMeasurer,
) {
    let plot = transform.plot();
    let viewport = transform.viewport();

    // Tangent segment spanning a tenth of the visible domain on each side.
    let span = viewport.x.span() / 10.0;
    let x1 = sample.x - span;
    let x2 = sample.x + span;
    let y1 = sample.y + sample.slope * (x1 - sample.x);
    let y2 = sample.y + sample.slope * (x2 - sample.x);
    render.push(RenderCommand::LineSegments {
        segments: vec![LineSegment::new(
            transform.screen_point(x1, y1),
            transform.screen_point(x2, y2),
        )],
        style: LineStyle {
            color: theme.tangent,
            width: TANGENT_STROKE_WIDTH,
        },
    });

    let marker = ScreenPoint::new(
        clamp(transform.screen_x(sample.x), plot.min.x, plot.max.x),
        clamp(transform.screen_y(sample.y), plot.min.y, plot.max.y),
    );
    render.push(RenderCommand::Circle {
        center: marker,
        diameter: MARKER_DIAMETER,
        color: theme.marker,
    });

    build_readout(render, sample, theme, measurer);
}

fn build_readout(
    render: &mut RenderList,
    sample: &HoverSample,
    theme: &Theme,
    measurer: &impl TextMeasurer,
) {
    let lines = [
        format!("x: {:.2}", sample.x),
        format!("y: {:.2}", sample.y),
        format!("dy/dx: {:.3}", sample.slope),
    ];
    let mut text_width: f32 = 0.0;
    for line in &lines {
        text_width = text_width.max(measurer.measure(line, INFO_TEXT_SIZE).0);
    }
    let line_height = INFO_TEXT_SIZE + READOUT_LINE_GAP;
    let width = text_width + READOUT_PADDING * 2.0;
    let height = line_height * lines.len() as f32 + READOUT_PADDING * 2.0 - READOUT_LINE_GAP;

    // Box above-right of the cursor, flipping sides near canvas edges.
    let cursor = sample.cursor;
    let mut x = cursor.x + READOUT_OFFSET;
    let mut y = cursor.y - READOUT_OFFSET - height;
    if x + width > CANVAS_WIDTH - READOUT_MARGIN {
        x = cursor.x - READOUT_OFFSET - width;
    }
    if y < READOUT_MARGIN {
        y = cursor.y + READOUT_OFFSET;
    }
    if x < READOUT_MARGIN {
        x = READOUT_MARGIN;
    }

    render.push(RenderCommand::Rect {
        rect: ScreenRect::from_origin_size(ScreenPoint::new(x, y), width, height),
        style: RectStyle {
            fill: theme.readout_fill,
            stroke: theme.axis,
            stroke_width: 1.0,
            corner_radius: 5.0,
        },
    });
    for (index, line) in lines.into_iter().enumerate() {
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                x + READOUT_PADDING,
                y + READOUT_PADDING + index as f32 * line_height,
            ),
            text: line,
            style: TextStyle {
                color: theme.readout_text,
                size: INFO_TEXT_SIZE,
                align: TextAlign::Left,
            },
        });
    }
}

fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
