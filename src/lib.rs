//! Next run time calculator for simple cron entries.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to answer a single question:
//! when will a cron entry fire next, starting from some time of the current day?
//!
//! _This is not a cron jobs scheduler or runner._ It doesn't execute anything,
//! it just calculates the time of the next theoretical run.
//!
//! ## Schedule format
//!
//! Each entry consists of two time fields and a command:
//!
//! | Field  | Allowed values | Allowed special characters |
//! |--------|----------------|----------------------------|
//! | Minute | 0-59           | *                          |
//! | Hour   | 0-23           | *                          |
//!
//! `*` means each possible value of the field. Lists, ranges and repeating patterns
//! (`1,2`, `1-5`, `*/10`) as well as day, month and day of week fields are not supported.
//!
//! Example of the schedule:
//! ```text
//! 30 1 /bin/run_me_daily
//! 45 * /bin/run_me_hourly
//! * * /bin/run_me_every_minute
//! * 19 /bin/run_me_sixty_times
//! ```
//!
//! ## How to use
//!
//! The main entity of the crate is a [`ScheduleEntry`] structure:
//! - [new()](ScheduleEntry::new) or [parse_line()](ScheduleEntry::parse_line): constructors to validate the entry
//!   and calculate all run times of the reference day;
//! - [resolve()](ScheduleEntry::resolve): returns the next run at or after the provided [`TestTime`] of the reference day;
//! - [display_next_run()](ScheduleEntry::display_next_run): returns the next run formatted as `HH:MM <today|tomorrow> - <command>`.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cron_next::{Result, ScheduleEntry, TestTime};
//!
//! fn next_run() -> Result<()> {
//!     let today = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
//!     let entry = ScheduleEntry::parse_line("30 * /bin/run_me_hourly", today)?;
//!     let time: TestTime = "23:45".parse()?;
//!
//!     let run = entry.resolve(time)?;
//!     assert!(run.is_tomorrow());
//!     assert_eq!(run.next_run().to_string(), "2016-01-02 00:30:00");
//!
//!     assert_eq!(entry.display_next_run(time)?, "00:30 tomorrow - /bin/run_me_hourly\n");
//!
//!     Ok(())
//! }
//! # next_run().unwrap();
//! ```
//!
//! ## Command line tool
//!
//! With the `cli` feature (enabled by default) the `cron-next` binary is built.
//! It reads schedule lines from the standard input and prints the next run of each one:
//! ```text
//! $ echo "30 11 /bin/run_me" | cron-next --time 00:00
//! 11:30 today - /bin/run_me
//! ```
//!
//! # Feature flags
//! * `cli`: builds the `cron-next` binary.
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`ScheduleField`]
//!   and [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) for [`ResolvedRun`].

mod candidates;
/// Schedule entry and its next run resolution.
pub mod entry;
/// Crate specific Error implementation.
pub mod error;
/// Minute and hour fields of the schedule entry.
pub mod field;
mod series;
mod utils;

// Re-export of public entities.
pub use entry::{ResolvedRun, RunDisplay, ScheduleEntry};
pub use error::CronError;
pub use field::{FieldType, FieldValueType, ScheduleField};
pub use utils::TestTime;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
