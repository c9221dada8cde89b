use eventmap_entities::time::{DateTime, Duration, END_OF_DAY, START_OF_DAY};
use time::{Date, Time};

/// Occurrences lasting at least this many (rounded) weeks are long-term.
pub const LONG_TERM_MIN_WEEKS: i64 = 3;

const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Absolute distance between two instants, rounded to whole weeks.
pub fn duration_in_weeks(a: DateTime, b: DateTime) -> i64 {
    let seconds = (b - a).whole_seconds().abs();
    (seconds as f64 / SECONDS_PER_WEEK).round() as i64
}

pub fn is_long_term(start: DateTime, end: DateTime) -> bool {
    duration_in_weeks(start, end) >= LONG_TERM_MIN_WEEKS
}

/// How an occurrence has to relate to the searched time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapMode {
    /// Start and end must both lie inside the window.
    #[default]
    Contained,
    /// Any intersection with the window suffices.
    Ongoing,
}

/// Searched time range, `end == None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime,
    pub end: Option<DateTime>,
}

impl TimeWindow {
    /// Builds a window from picker values, a missing start time means
    /// the start of the day and a missing end time the end of the day.
    pub fn new(start_date: Date, start_time: Option<Time>, end: Option<(Date, Option<Time>)>) -> Self {
        let start = DateTime::new(start_date, start_time.unwrap_or(START_OF_DAY));
        let end = end.map(|(date, time)| DateTime::new(date, time.unwrap_or(END_OF_DAY)));
        Self { start, end }
    }

    /// Everything from now on.
    pub fn future(now: DateTime) -> Self {
        Self {
            start: truncate_to_minutes(now),
            end: None,
        }
    }

    /// The rest of the current day.
    pub fn today(now: DateTime) -> Self {
        Self {
            start: truncate_to_minutes(now),
            end: Some(DateTime::new(now.date(), END_OF_DAY)),
        }
    }

    /// The whole next day.
    pub fn tomorrow(now: DateTime) -> Self {
        let tomorrow = now.date().saturating_add(Duration::days(1));
        Self::new(tomorrow, None, Some((tomorrow, None)))
    }

    /// From `start` until the end of the day `days` days later.
    pub fn next_days(start: DateTime, days: u16) -> Self {
        let last_day = start.date().saturating_add(Duration::days(i64::from(days)));
        Self {
            start: truncate_to_minutes(start),
            end: Some(DateTime::new(last_day, END_OF_DAY)),
        }
    }

    pub fn contains(&self, start: DateTime, end: DateTime) -> bool {
        start >= self.start && self.end.map_or(true, |window_end| end <= window_end)
    }

    pub fn overlaps(&self, start: DateTime, end: DateTime) -> bool {
        end >= self.start && self.end.map_or(true, |window_end| start <= window_end)
    }

    pub fn admits(&self, start: DateTime, end: DateTime, mode: OverlapMode) -> bool {
        match mode {
            OverlapMode::Contained => self.contains(start, end),
            OverlapMode::Ongoing => self.overlaps(start, end),
        }
    }
}

fn truncate_to_minutes(dt: DateTime) -> DateTime {
    let minutes = i64::from(dt.hour()) * 60 + i64::from(dt.minute());
    DateTime::new(dt.date(), Time::MIDNIGHT + Duration::minutes(minutes))
}
