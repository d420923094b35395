/// Common utility functions.
use crate::{field::FieldValueType, CronError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::{fmt::Display, str::FromStr};

/// Converts string into unsigned number with bounds validation.
///
/// Only plain ASCII digits are accepted, so signs and whitespace are rejected.
pub(crate) fn parse_digital_value(input: &str, min: FieldValueType, max: FieldValueType) -> Option<FieldValueType> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value = input.parse::<FieldValueType>();
    if let Ok(value) = value {
        if value < min || value > max {
            None
        } else {
            Some(value)
        }
    } else {
        None
    }
}

/// Returns midnight (00:00) of the specified day.
#[inline]
pub(crate) fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Hour and minute of the reference day to look for the next run from.
///
/// Parsed from the `HH:MM` (24-hour) form.
///
/// ```rust
/// use cron_next::TestTime;
///
/// let time: TestTime = "23:59".parse().unwrap();
/// assert_eq!((time.hour(), time.minute()), (23, 59));
/// assert!("24:00".parse::<TestTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestTime(NaiveTime);

impl TestTime {
    /// Constructs test time from hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| CronError::InvalidTestTime(format!("{hour:02}:{minute:02}")))
    }

    /// Hour part.
    pub fn hour(&self) -> u32 {
        chrono::Timelike::hour(&self.0)
    }

    /// Minute part.
    pub fn minute(&self) -> u32 {
        chrono::Timelike::minute(&self.0)
    }

    /// Returns timestamp of this time on the specified day.
    #[inline]
    pub fn on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.0)
    }
}

impl FromStr for TestTime {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CronError::InvalidTestTime(s.to_owned());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = parse_digital_value(hour, 0, 23).ok_or_else(invalid)?;
        let minute = parse_digital_value(minute, 0, 59).ok_or_else(invalid)?;

        Self::new(hour as u32, minute as u32)
    }
}

impl From<TestTime> for NaiveTime {
    fn from(value: TestTime) -> Self {
        value.0
    }
}

impl Display for TestTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
