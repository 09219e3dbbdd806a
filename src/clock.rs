//! Clock entry points and builders.

use std::time::{Duration, Instant};

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::face::TextMeasurer;
use crate::geom::FaceSpec;
use crate::reading::ClockReading;
use crate::render::{RenderList, build_analog_face, build_digital_face};
use crate::style::StyleConfig;

/// Which presentation a clock draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Ticks, hour labels, needles and center dot.
    Analog,
    /// Formatted `HH:MM:SSAM` readout.
    Digital,
}

/// A clock face widget, independent of any UI toolkit.
///
/// Holds configuration only; every frame is computed fresh from a reading.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    config: ClockConfig,
}

impl Clock {
    /// Create a clock with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a clock with custom configuration.
    pub fn builder() -> ClockBuilder {
        ClockBuilder::default()
    }

    /// Create a clock from a loaded configuration.
    ///
    /// Fails with `InvalidArgument` when the refresh interval is zero.
    pub fn from_config(config: ClockConfig) -> Result<Self, ClockError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Access the style.
    pub fn style(&self) -> &StyleConfig {
        &self.config.style
    }

    /// Time between redraws.
    pub fn refresh_interval(&self) -> Duration {
        self.config.refresh_interval
    }

    /// Whether the analog face is drawn.
    pub fn is_show_analog(&self) -> bool {
        self.config.show_analog
    }

    /// Select the analog (true) or digital (false) presentation.
    pub fn set_show_analog(&mut self, show_analog: bool) {
        self.config.show_analog = show_analog;
    }

    /// Switch between analog and digital presentation.
    pub fn toggle_mode(&mut self) -> ClockMode {
        self.config.show_analog = !self.config.show_analog;
        self.mode()
    }

    /// Current presentation.
    pub fn mode(&self) -> ClockMode {
        if self.config.show_analog {
            ClockMode::Analog
        } else {
            ClockMode::Digital
        }
    }

    /// Build one frame for a reading.
    pub fn frame(
        &self,
        reading: &ClockReading,
        face: &FaceSpec,
        measurer: &dyn TextMeasurer,
    ) -> Result<RenderList, ClockError> {
        let render = match self.mode() {
            ClockMode::Analog => build_analog_face(reading, face, &self.config.style, measurer)?,
            ClockMode::Digital => build_digital_face(reading, face, &self.config.style)?,
        };
        log::debug!(
            "built {:?} clock frame at {:?} (radius {})",
            self.mode(),
            reading,
            face.radius
        );
        log::trace!("frame has {} commands", render.len());
        Ok(render)
    }

    /// Build one frame from the local system clock.
    pub fn frame_now(
        &self,
        face: &FaceSpec,
        measurer: &dyn TextMeasurer,
    ) -> Result<RenderList, ClockError> {
        self.frame(&ClockReading::now(), face, measurer)
    }

    /// Deadline for the redraw following one at `now`.
    ///
    /// `None` when the deadline is not representable as an `Instant`.
    pub fn next_refresh(&self, now: Instant) -> Option<Instant> {
        now.checked_add(self.config.refresh_interval)
    }
}

/// Builder for configuring a clock before construction.
#[derive(Debug, Default)]
pub struct ClockBuilder {
    config: ClockConfig,
}

impl ClockBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ClockConfig) -> Self {
        self.config = config;
        self
    }

    /// Choose analog (true) or digital (false) presentation.
    pub fn show_analog(mut self, show_analog: bool) -> Self {
        self.config.show_analog = show_analog;
        self
    }

    /// Set the visual style.
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.config.style = style;
        self
    }

    /// Set the redraw cadence.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.config.refresh_interval = interval;
        self
    }

    /// Build the clock, rejecting a zero refresh interval.
    pub fn build(self) -> Result<Clock, ClockError> {
        Clock::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::ProportionalMetrics;
    use crate::geom::Point;
    use crate::reading::Meridiem;
    use crate::render::RenderCommand;

    fn face() -> FaceSpec {
        FaceSpec::fit(0.0, 0.0, 400.0, 300.0)
    }

    #[test]
    fn defaults_to_analog() {
        let clock = Clock::new();
        assert!(clock.is_show_analog());
        assert_eq!(clock.mode(), ClockMode::Analog);
        assert_eq!(clock.refresh_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn toggles_between_modes() {
        let mut clock = Clock::new();
        assert_eq!(clock.toggle_mode(), ClockMode::Digital);
        assert!(!clock.is_show_analog());
        clock.set_show_analog(true);
        assert_eq!(clock.mode(), ClockMode::Analog);
    }

    #[test]
    fn frame_follows_mode() {
        let reading = ClockReading::new(1, 2, 3, Meridiem::Am).expect("valid reading");
        let metrics = ProportionalMetrics::default();

        let analog = Clock::new()
            .frame(&reading, &face(), &metrics)
            .expect("analog frame");
        assert_eq!(analog.len(), 77);

        let digital = Clock::builder()
            .show_analog(false)
            .build()
            .expect("valid clock")
            .frame(&reading, &face(), &metrics)
            .expect("digital frame");
        assert_eq!(digital.len(), 1);
        assert!(matches!(
            &digital.commands()[0],
            RenderCommand::Text { anchor, .. } if *anchor == Point::new(200.0, 150.0)
        ));
    }

    #[test]
    fn frame_rejects_empty_bounds() {
        let empty = FaceSpec::fit(0.0, 0.0, 0.0, 300.0);
        let result = Clock::new().frame_now(&empty, &ProportionalMetrics::default());
        assert!(matches!(result, Err(ClockError::InvalidArgument(_))));
    }

    #[test]
    fn builder_sets_refresh_cadence() {
        let clock = Clock::builder()
            .refresh_interval(Duration::from_millis(250))
            .build()
            .expect("valid clock");
        let now = Instant::now();
        let next = clock.next_refresh(now).expect("representable deadline");
        assert_eq!(next - now, Duration::from_millis(250));
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        let built = Clock::builder().refresh_interval(Duration::ZERO).build();
        assert!(matches!(built, Err(ClockError::InvalidArgument(_))));

        let config = ClockConfig {
            refresh_interval: Duration::ZERO,
            ..ClockConfig::default()
        };
        assert!(matches!(
            Clock::from_config(config),
            Err(ClockError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unrepresentable_deadline_is_none() {
        let clock = Clock::builder()
            .refresh_interval(Duration::MAX)
            .build()
            .expect("valid clock");
        assert_eq!(clock.next_refresh(Instant::now()), None);
    }
}
