use crate::{
    candidates,
    field::{FieldType, ScheduleField},
    utils::{self, TestTime},
    CronError, Result,
};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt::Display;
use tracing::{debug, trace};

/// Single cron task: minute and hour fields with the command to run.
///
/// Run times are calculated once, at construction, for the reference day
/// and reused by every [`resolve()`](ScheduleEntry::resolve) call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleEntry {
    minute: ScheduleField,
    hour: ScheduleField,
    command: String,
    reference_midnight: NaiveDateTime,
    candidates: Vec<NaiveDateTime>,
}

impl ScheduleEntry {
    /// Validates fields and constructs [`ScheduleEntry`] anchored at midnight of `reference_day`.
    ///
    /// Returns [`CronError::InvalidMinuteValue`] or [`CronError::InvalidHourValue`]
    /// if `minute` or `hour` is a field of another [`FieldType`].
    pub fn new(
        minute: ScheduleField,
        hour: ScheduleField,
        command: impl Into<String>,
        reference_day: NaiveDate,
    ) -> Result<Self> {
        let reference_midnight = utils::midnight(reference_day);
        let candidates = candidates::generate(minute, hour, reference_midnight)?;
        let command = command.into();

        debug!(%minute, %hour, command = command.as_str(), candidates = candidates.len(), "schedule entry created");

        Ok(Self {
            minute,
            hour,
            command,
            reference_midnight,
            candidates,
        })
    }

    /// Parses schedule line in the `<minute> <hour> <command...>` form.
    ///
    /// Minute and hour are either decimal values or `*`; the rest of the line,
    /// with surrounding whitespace trimmed, is the command.
    pub fn parse_line(line: &str, reference_day: NaiveDate) -> Result<Self> {
        let invalid = || CronError::InvalidScheduleLine(line.trim_end().to_owned());

        let (minute, rest) = line.trim().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let (hour, command) = rest.trim_start().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let command = command.trim();
        if command.is_empty() {
            return Err(invalid());
        }

        Self::new(
            ScheduleField::parse(FieldType::Minutes, minute)?,
            ScheduleField::parse(FieldType::Hours, hour)?,
            command,
            reference_day,
        )
    }

    /// Returns the upcoming run at or after `test_time` of the reference day.
    #[inline]
    pub fn resolve(&self, test_time: TestTime) -> Result<ResolvedRun> {
        self.resolve_at(&test_time.on(self.reference_midnight.date()))
    }

    /// Returns the upcoming run at or after (inclusively) the provided timestamp.
    ///
    /// Returns [`CronError::OutOfReferenceDay`] if `current` isn't within the reference day.
    pub fn resolve_at(&self, current: &NaiveDateTime) -> Result<ResolvedRun> {
        let next_midnight = self.reference_midnight + TimeDelta::days(1);
        if *current < self.reference_midnight || *current >= next_midnight {
            return Err(CronError::OutOfReferenceDay(current.to_string()));
        }

        let next_run = self
            .upcoming(current)
            .ok_or_else(|| CronError::NoCandidate(current.to_string()))?;
        let is_tomorrow = next_run >= next_midnight;

        trace!(%current, %next_run, is_tomorrow, command = %self.command, "resolved next run");

        Ok(ResolvedRun { next_run, is_tomorrow })
    }

    /// Resolves the upcoming run and formats it as `HH:MM <today|tomorrow> - <command>\n`.
    pub fn display_next_run(&self, test_time: TestTime) -> Result<String> {
        Ok(self.resolve(test_time)?.display(&self.command).to_string())
    }

    /// The smallest candidate not less than `current`.
    fn upcoming(&self, current: &NaiveDateTime) -> Option<NaiveDateTime> {
        let index = self.candidates.partition_point(|candidate| candidate < current);
        self.candidates.get(index).copied()
    }

    /// Minute field.
    #[inline]
    pub fn minute(&self) -> ScheduleField {
        self.minute
    }

    /// Hour field.
    #[inline]
    pub fn hour(&self) -> ScheduleField {
        self.hour
    }

    /// Command to run.
    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Midnight of the reference day.
    #[inline]
    pub fn reference_midnight(&self) -> NaiveDateTime {
        self.reference_midnight
    }

    /// Ascending run times of the reference day and the nearest one of the following day.
    #[inline]
    pub fn candidates(&self) -> &[NaiveDateTime] {
        &self.candidates
    }
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.minute, self.hour, self.command)
    }
}

/// Time of the upcoming run of a [`ScheduleEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedRun {
    next_run: NaiveDateTime,
    is_tomorrow: bool,
}

impl ResolvedRun {
    /// Timestamp of the run.
    #[inline]
    pub fn next_run(&self) -> NaiveDateTime {
        self.next_run
    }

    /// `true` if the run falls on the day after the reference one.
    #[inline]
    pub fn is_tomorrow(&self) -> bool {
        self.is_tomorrow
    }

    /// Returns `"today"` or `"tomorrow"`.
    pub fn day_label(&self) -> &'static str {
        if self.is_tomorrow {
            "tomorrow"
        } else {
            "today"
        }
    }

    /// Returns printable representation of the run of the `command`.
    pub fn display<'a>(&self, command: &'a str) -> RunDisplay<'a> {
        RunDisplay { run: *self, command }
    }
}

/// Formats [`ResolvedRun`] with its command as a single output line, newline included.
#[derive(Debug, Clone, Copy)]
pub struct RunDisplay<'a> {
    run: ResolvedRun,
    command: &'a str,
}

impl Display for RunDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} - {}",
            self.run.next_run.format("%H:%M"),
            self.run.day_label(),
            self.command
        )
    }
}
