use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, LineSegment, LineStyle, RectStyle, RenderCommand, TextAlign, TextStyle};

use super::view::ExplorerFrame;

/// Replay a frame's render commands at the canvas origin.
pub(crate) fn paint_frame(frame: &ExplorerFrame, window: &mut Window, cx: &mut App) {
    let origin = frame.origin;
    for command in frame.render.commands() {
        match command {
            RenderCommand::Background(color) => {
                paint_background(window, origin, frame.size, *color);
            }
            RenderCommand::Rect { rect, style } => {
                paint_rect(window, offset_rect(*rect, origin), *style);
            }
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, segments, origin, *style);
            }
            RenderCommand::Polyline { points, style } => {
                paint_polyline(window, points, origin, *style);
            }
            RenderCommand::Circle {
                center,
                diameter,
                color,
            } => {
                paint_circle(window, offset_point(*center, origin), *diameter, *color);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, offset_point(*position, origin), text, style);
            }
        }
    }
}

fn paint_background(window: &mut Window, origin: ScreenPoint, size: (f32, f32), color: Color) {
    let bounds = Bounds::from_corners(
        point(px(origin.x), px(origin.y)),
        point(px(origin.x + size.0), px(origin.y + size.1)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_rect(window: &mut Window, rect: ScreenRect, style: RectStyle) {
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(style.corner_radius)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn paint_lines(window: &mut Window, segments: &[LineSegment], origin: ScreenPoint, style: LineStyle) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    for segment in segments {
        let start = offset_point(segment.start, origin);
        let end = offset_point(segment.end, origin);
        builder.move_to(point(px(start.x), px(start.y)));
        builder.line_to(point(px(end.x), px(end.y)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_polyline(
    window: &mut Window,
    points: &[ScreenPoint],
    origin: ScreenPoint,
    style: LineStyle,
) {
    if points.len() < 2 {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    let first = offset_point(points[0], origin);
    builder.move_to(point(px(first.x), px(first.y)));
    for vertex in &points[1..] {
        let vertex = offset_point(*vertex, origin);
        builder.line_to(point(px(vertex.x), px(vertex.y)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_circle(window: &mut Window, center: ScreenPoint, diameter: f32, color: Color) {
    let radius = diameter.max(2.0) * 0.5;
    let bounds = Bounds::from_corners(
        point(px(center.x - radius), px(center.y - radius)),
        point(px(center.x + radius), px(center.y + radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped =
        window
            .text_system()
            .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let width = f32::from(shaped.width);
    let x = match style.align {
        TextAlign::Left => position.x,
        TextAlign::Center => position.x - width * 0.5,
        TextAlign::Right => position.x - width,
    };
    let line_height = shaped.ascent + shaped.descent;
    let _ = shaped.paint(point(px(x), px(position.y)), line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}

fn offset_point(point: ScreenPoint, origin: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(point.x + origin.x, point.y + origin.y)
}

fn offset_rect(rect: ScreenRect, origin: ScreenPoint) -> ScreenRect {
    ScreenRect::new(offset_point(rect.min, origin), offset_point(rect.max, origin))
}
