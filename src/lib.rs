//! gpui_funcplot is an interactive activation-function explorer built for
//! GPUI. It plots a closed set of functions with click-to-select controls,
//! drag-to-pan navigation, and a live value/derivative/tangent readout
//! following the pointer.

#![forbid(unsafe_code)]

pub mod explorer;
pub mod frame;
pub mod functions;
pub mod geom;
pub mod gpui_backend;
pub mod interaction;
pub mod layout;
pub mod range;
pub mod render;
pub mod style;
pub mod ticks;
pub mod transform;
pub mod view;

pub use explorer::Explorer;
pub use frame::build_frame;
pub use functions::{Activation, Family, UnknownFunction};
pub use geom::{ScreenPoint, ScreenRect};
pub use gpui_backend::{ExplorerHandle, GpuiExplorerView};
pub use interaction::{DragAnchor, HoverSample, InteractionState, PointerEvent};
pub use layout::{Control, ControlAction, TextMeasurer};
pub use render::{
    Color, LineSegment, LineStyle, RectStyle, RenderCommand, RenderList, TextAlign, TextStyle,
};
pub use style::Theme;
pub use ticks::{Tick, plan, tick_step};
pub use transform::Transform;
pub use view::{Range, Viewport};
