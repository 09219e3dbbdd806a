use std::time::{Duration, Instant};

use gpui_clockface::{
    Clock, ClockReading, FaceSpec, Point, ProportionalMetrics, RenderCommand,
    format_digital_reading,
};

fn main() {
    env_logger::init();

    let duration_secs: u64 = std::env::var("DURATION_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(5);

    let clock = Clock::new();
    let face = FaceSpec::new(Point::new(100.0, 100.0), 100.0);
    let metrics = ProportionalMetrics::default();
    let start = Instant::now();
    let mut next = start;

    while start.elapsed() < Duration::from_secs(duration_secs) {
        let reading = ClockReading::now();
        match clock.frame(&reading, &face, &metrics) {
            Ok(frame) => {
                let needles: Vec<String> = frame
                    .commands()
                    .iter()
                    .filter_map(|command| match command {
                        RenderCommand::Line { segment, .. } if !segment.role.is_tick() => {
                            let end = segment.end;
                            Some(format!("{:?}->({:.1}, {:.1})", segment.role, end.x, end.y))
                        }
                        _ => None,
                    })
                    .collect();
                println!("{}  {}", format_digital_reading(&reading), needles.join("  "));
            }
            Err(err) => eprintln!("frame failed: {err}"),
        }

        let Some(deadline) = clock.next_refresh(next) else {
            break;
        };
        next = deadline;
        std::thread::sleep(next.saturating_duration_since(Instant::now()));
    }
}
