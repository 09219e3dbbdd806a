use std::sync::{Arc, RwLock};
use std::time::Instant;

use gpui::prelude::*;
use gpui::{App, AsyncWindowContext, Bounds, Entity, Pixels, Timer, Window, canvas, div};

use crate::clock::Clock;
use crate::geom::FaceSpec;
use crate::reading::ClockReading;
use crate::render::RenderList;

use super::paint::{GpuiRenderer, to_hsla};
use super::text::GpuiTextMeasurer;

/// A GPUI view that paints a [`Clock`] centered in its bounds.
///
/// The face is the largest circle that fits the bounds. Call
/// [`GpuiClockView::start_ticking`] once the view is in a window to redraw
/// it on the clock's refresh interval.
#[derive(Clone)]
pub struct GpuiClockView {
    clock: Arc<RwLock<Clock>>,
}

impl GpuiClockView {
    /// Create a view for a clock with default configuration.
    pub fn new() -> Self {
        Self::with_clock(Clock::new())
    }

    /// Create a view for the given clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock: Arc::new(RwLock::new(clock)),
        }
    }

    /// Get a handle for mutating the underlying clock.
    pub fn clock_handle(&self) -> ClockHandle {
        ClockHandle {
            clock: Arc::clone(&self.clock),
        }
    }

    /// Redraw `view` every refresh interval until its window closes.
    pub fn start_ticking(window: &mut Window, cx: &mut App, view: Entity<GpuiClockView>) {
        let handle = view.read(cx).clock_handle();
        window
            .spawn(cx, move |cx: &mut AsyncWindowContext| {
                let mut cx = cx.clone();
                async move {
                    loop {
                        let (interval, deadline) = handle.read(|clock| {
                            (clock.refresh_interval(), clock.next_refresh(Instant::now()))
                        });
                        if deadline.is_none() {
                            log::warn!("refresh interval {interval:?} overflows, not redrawing");
                            break;
                        }
                        Timer::after(interval).await;
                        let updated = cx.update(|_, cx| {
                            view.update(cx, |_view, view_cx| view_cx.notify());
                        });
                        if updated.is_err() {
                            log::debug!("clock window closed, stopping redraw loop");
                            break;
                        }
                    }
                }
            })
            .detach();
    }
}

impl Default for GpuiClockView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for GpuiClockView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let clock = Arc::clone(&self.clock);
        let background = clock.read().expect("clock lock").style().background;

        div().size_full().bg(to_hsla(background)).child(
            canvas(
                move |bounds, window, _| build_frame(&clock, bounds, window),
                move |_, frame, window, cx| {
                    if let Some(frame) = frame {
                        frame.replay(&mut GpuiRenderer::new(window, cx));
                    }
                },
            )
            .size_full(),
        )
    }
}

/// A handle for mutating a [`Clock`] held inside a `GpuiClockView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct ClockHandle {
    clock: Arc<RwLock<Clock>>,
}

impl ClockHandle {
    /// Read the clock state.
    ///
    /// The clock is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Clock) -> R) -> R {
        let clock = self.clock.read().expect("clock lock");
        f(&clock)
    }

    /// Mutate the clock state.
    ///
    /// The clock is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Clock) -> R) -> R {
        let mut clock = self.clock.write().expect("clock lock");
        f(&mut clock)
    }
}

fn build_frame(
    clock: &RwLock<Clock>,
    bounds: Bounds<Pixels>,
    window: &Window,
) -> Option<RenderList> {
    let face = FaceSpec::fit(
        f64::from(f32::from(bounds.origin.x)),
        f64::from(f32::from(bounds.origin.y)),
        f64::from(f32::from(bounds.size.width)),
        f64::from(f32::from(bounds.size.height)),
    );
    let measurer = GpuiTextMeasurer::new(window);
    let clock = clock.read().expect("clock lock");
    match clock.frame(&ClockReading::now(), &face, &measurer) {
        Ok(frame) => Some(frame),
        Err(err) => {
            log::warn!("skipping clock frame: {err}");
            None
        }
    }
}
