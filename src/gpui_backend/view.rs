use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window, canvas, div,
};

use crate::explorer::Explorer;
use crate::frame::build_frame;
use crate::geom::ScreenPoint;
use crate::interaction::PointerEvent;
use crate::layout;
use crate::render::RenderList;
use crate::style::Theme;

use super::paint::{paint_frame, to_hsla};
use super::text::GpuiTextMeasurer;

/// One computed frame, handed from the canvas prepaint step to painting.
pub(crate) struct ExplorerFrame {
    pub(crate) render: RenderList,
    pub(crate) origin: ScreenPoint,
    pub(crate) size: (f32, f32),
}

/// A GPUI view hosting the interactive activation-function explorer.
///
/// The session is created lazily on the first frame, when a window is
/// available to measure control labels. Mouse handlers feed the session's
/// pointer state machine; each frame rebuilds the render list from it.
/// Listeners and the canvas element drop with the view, so teardown needs
/// no explicit release step.
#[derive(Clone)]
pub struct GpuiExplorerView {
    explorer: Arc<RwLock<Option<Explorer>>>,
    origin: Arc<RwLock<ScreenPoint>>,
    theme: Theme,
}

impl GpuiExplorerView {
    /// Create a view with the default light theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::light())
    }

    /// Create a view with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            explorer: Arc::new(RwLock::new(None)),
            origin: Arc::new(RwLock::new(ScreenPoint::new(0.0, 0.0))),
            theme,
        }
    }

    /// Get a handle for reading or mutating the hosted session.
    pub fn handle(&self) -> ExplorerHandle {
        ExplorerHandle {
            explorer: Arc::clone(&self.explorer),
        }
    }

    fn forward(&mut self, event: PointerEvent, cx: &mut Context<Self>) {
        if let Ok(mut guard) = self.explorer.write() {
            if let Some(explorer) = guard.as_mut() {
                explorer.handle_event(event);
            }
        }
        cx.notify();
    }

    fn local_point(&self, position: Point<Pixels>) -> ScreenPoint {
        let origin = self
            .origin
            .read()
            .map(|origin| *origin)
            .unwrap_or(ScreenPoint::new(0.0, 0.0));
        ScreenPoint::new(
            f32::from(position.x) - origin.x,
            f32::from(position.y) - origin.y,
        )
    }
}

impl Default for GpuiExplorerView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for GpuiExplorerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let explorer = Arc::clone(&self.explorer);
        let origin = Arc::clone(&self.origin);
        let theme = self.theme.clone();

        div()
            .size_full()
            .bg(to_hsla(theme.background))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let canvas_origin = ScreenPoint::new(
                            f32::from(bounds.origin.x),
                            f32::from(bounds.origin.y),
                        );
                        if let Ok(mut origin) = origin.write() {
                            *origin = canvas_origin;
                        }
                        let measurer = GpuiTextMeasurer::new(window);
                        let mut explorer = explorer.write().expect("explorer lock");
                        let explorer =
                            explorer.get_or_insert_with(|| Explorer::new(&measurer));
                        ExplorerFrame {
                            render: build_frame(explorer, &theme, &measurer),
                            origin: canvas_origin,
                            size: (layout::CANVAS_WIDTH, layout::CANVAS_HEIGHT),
                        }
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseDownEvent, _, cx| {
                    let pos = this.local_point(ev.position);
                    this.forward(PointerEvent::Pressed(pos), cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev: &MouseMoveEvent, _, cx| {
                let pos = this.local_point(ev.position);
                this.forward(PointerEvent::Moved(pos), cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseUpEvent, _, cx| {
                    let pos = this.local_point(ev.position);
                    this.forward(PointerEvent::Released(pos), cx);
                }),
            )
    }
}

/// A handle for the session hosted inside a [`GpuiExplorerView`].
///
/// The handle clones cheaply and can be moved into async tasks. Callbacks
/// return `None` until the first frame has created the session.
#[derive(Clone)]
pub struct ExplorerHandle {
    explorer: Arc<RwLock<Option<Explorer>>>,
}

impl ExplorerHandle {
    /// Read the session state.
    pub fn read<R>(&self, f: impl FnOnce(&Explorer) -> R) -> Option<R> {
        let explorer = self.explorer.read().expect("explorer lock");
        explorer.as_ref().map(f)
    }

    /// Mutate the session state.
    pub fn write<R>(&self, f: impl FnOnce(&mut Explorer) -> R) -> Option<R> {
        let mut explorer = self.explorer.write().expect("explorer lock");
        explorer.as_mut().map(f)
    }
}
