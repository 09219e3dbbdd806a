//! GPUI integration for gpui_clockface.
//!
//! This module provides a GPUI view that paints a [`Clock`](crate::clock::Clock)
//! into its bounds and redraws it on the clock's refresh interval.

mod paint;
mod text;
mod view;

pub use paint::GpuiRenderer;
pub use text::GpuiTextMeasurer;
pub use view::{ClockHandle, GpuiClockView};
