use std::fmt;
use thiserror::Error;
use time::{
    format_description::FormatItem,
    macros::{format_description, time},
    Date, PrimitiveDateTime, Time,
};

pub use time::Duration;

/// Local, zone-less point in time.
///
/// The crawled calendars publish wall-clock times without any
/// offset, so no time zone conversion takes place anywhere.
pub type DateTime = PrimitiveDateTime;

/// Implicit time of a date without a start time.
pub const START_OF_DAY: Time = time!(0:00);

/// Implicit time of a date without an end time.
pub const END_OF_DAY: Time = time!(23:59);

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute][optional [:[second]]]");

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Invalid date '{0}'")]
    Date(String),
    #[error("Invalid time '{0}'")]
    Time(String),
    #[error("Invalid timestamp '{0}'")]
    Timestamp(String),
}

/// Parses dates like `2024-06-01`.
pub fn parse_date(s: &str) -> Result<Date, TimeParseError> {
    Date::parse(s.trim(), DATE_FORMAT).map_err(|_| TimeParseError::Date(s.to_owned()))
}

/// Parses times like `18:30` or `18:30:00`.
pub fn parse_time(s: &str) -> Result<Time, TimeParseError> {
    Time::parse(s.trim(), TIME_FORMAT).map_err(|_| TimeParseError::Time(s.to_owned()))
}

/// Parses download timestamps like `2024-05-30 06:12:01`.
pub fn parse_timestamp(s: &str) -> Result<DateTime, TimeParseError> {
    PrimitiveDateTime::parse(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| TimeParseError::Timestamp(s.to_owned()))
}

/// Renders a date and an optional time as `YYYY-MM-DD[ HH:MM]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLabel {
    pub date: Date,
    pub time: Option<Time>,
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let Self { date, time } = self;
        write!(
            f,
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )?;
        if let Some(time) = time {
            write!(f, " {:02}:{:02}", time.hour(), time.minute())?;
        }
        Ok(())
    }
}
