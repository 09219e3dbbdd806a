//! Wall-clock snapshots.

use chrono::{Local, Timelike};

use crate::error::ClockError;

/// Ante or post meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl Meridiem {
    /// Suffix shown by the digital presentation.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// A 12-hour clock reading.
///
/// Take one snapshot per frame so all needles and the digital label agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    second: u8,
    meridiem: Meridiem,
}

impl ClockReading {
    /// Create a reading, rejecting out-of-range fields.
    ///
    /// `hour` is in `0..=11`; twelve o'clock is hour 0.
    pub fn new(hour: u8, minute: u8, second: u8, meridiem: Meridiem) -> Result<Self, ClockError> {
        if hour > 11 {
            return Err(ClockError::invalid(format!("hour {hour} is outside 0..=11")));
        }
        if minute > 59 {
            return Err(ClockError::invalid(format!("minute {minute} is outside 0..=59")));
        }
        if second > 59 {
            return Err(ClockError::invalid(format!("second {second} is outside 0..=59")));
        }
        Ok(Self {
            hour,
            minute,
            second,
            meridiem,
        })
    }

    /// Build a reading from any chrono time value.
    ///
    /// chrono reports a leap second as second 59 with an oversized
    /// nanosecond field, so it reads as second 59.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let hour24 = time.hour();
        Self {
            hour: (hour24 % 12) as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            meridiem: if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm },
        }
    }

    /// Snapshot the local system clock.
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    /// Hour on the 12-hour dial, `0..=11`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, `0..=59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second, `0..=59`.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// AM or PM.
    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(ClockReading::new(12, 0, 0, Meridiem::Am).is_err());
        assert!(ClockReading::new(0, 60, 0, Meridiem::Am).is_err());
        assert!(ClockReading::new(0, 0, 60, Meridiem::Pm).is_err());
        assert!(ClockReading::new(11, 59, 59, Meridiem::Pm).is_ok());
    }

    #[test]
    fn converts_24_hour_time() {
        let noon = NaiveTime::from_hms_opt(12, 5, 9).expect("valid time");
        let reading = ClockReading::from_time(&noon);
        assert_eq!(reading.hour(), 0);
        assert_eq!(reading.minute(), 5);
        assert_eq!(reading.second(), 9);
        assert_eq!(reading.meridiem(), Meridiem::Pm);

        let morning = NaiveTime::from_hms_opt(9, 30, 0).expect("valid time");
        let reading = ClockReading::from_time(&morning);
        assert_eq!(reading.hour(), 9);
        assert_eq!(reading.meridiem(), Meridiem::Am);

        let evening = NaiveTime::from_hms_opt(23, 59, 59).expect("valid time");
        let reading = ClockReading::from_time(&evening);
        assert_eq!(reading.hour(), 11);
        assert_eq!(reading.meridiem(), Meridiem::Pm);
    }

    #[test]
    fn leap_second_reads_as_59() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).expect("valid leap time");
        assert_eq!(ClockReading::from_time(&leap).second(), 59);
    }
}
