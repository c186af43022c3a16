//! GPUI integration for gpui_funcplot.
//!
//! This module provides a GPUI view that hosts an [`Explorer`](crate::Explorer)
//! session, forwards mouse events into its pointer state machine, and paints
//! the computed frame with GPUI primitives.

mod paint;
mod text;
mod view;

pub use view::{ExplorerHandle, GpuiExplorerView};
