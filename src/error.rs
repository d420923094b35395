use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Invalid or out of range minute value specified.
    #[error("invalid minute value: {0}")]
    InvalidMinuteValue(String),
    /// Invalid or out of range hour value specified.
    #[error("invalid hour value: {0}")]
    InvalidHourValue(String),
    /// Schedule line doesn't consist of minute, hour and command.
    #[error("invalid schedule line: {0}")]
    InvalidScheduleLine(String),
    /// Test time isn't a valid `HH:MM` value.
    #[error("invalid test time: {0}")]
    InvalidTestTime(String),
    /// Requested time isn't within the reference day of the entry.
    #[error("time is out of the reference day: {0}")]
    OutOfReferenceDay(String),
    /// There is no candidate at or after the requested time.
    ///
    /// This indicates an inconsistent set of candidates and should never happen.
    #[error("no run time found at or after {0}")]
    NoCandidate(String),
}

impl CronError {
    /// Returns `true` if the error is caused by malformed or out of range minute or hour field.
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Self::InvalidMinuteValue(_) | Self::InvalidHourValue(_))
    }
}
