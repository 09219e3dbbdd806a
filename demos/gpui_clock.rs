use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_clockface::{Clock, GpuiClockView, StyleConfig};

fn main() {
    env_logger::init();

    let show_analog = std::env::var("CLOCK_DIGITAL").is_err();

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(480.0), px(480.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let clock = Clock::builder()
                .show_analog(show_analog)
                .style(StyleConfig::default())
                .build()
                .expect("default refresh interval is valid");
            let view = cx.new(|_| GpuiClockView::with_clock(clock));
            GpuiClockView::start_ticking(window, cx, view.clone());
            view
        })
        .unwrap();
    });
}
