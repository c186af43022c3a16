use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_funcplot::{GpuiExplorerView, layout};

fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(layout::CANVAS_WIDTH), px(layout::CANVAS_HEIGHT)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_, cx| cx.new(|_| GpuiExplorerView::new()))
            .unwrap();
    });
}
