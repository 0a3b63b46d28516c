//! Launch window validation and its conversion into the local time

use std::fmt;

use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime};
use hazard_coords_types::{OutOfRange, ParseWindowError, TimeWindow, WindowToken};
use log::debug;

use crate::consts::LOCAL_UTC_OFFSET_HOURS;

const SECONDS_IN_HOUR: i32 = 3600;
const CLOCK_12H_FORMAT: &str = "%-I:%M %p";

/// Is the token a valid `HHMM` (3 or 4 digits, not more than 2359)?
///
/// ```
/// # use hazard_coords::is_valid_window_token;
/// assert!(is_valid_window_token("745"));
/// assert!(!is_valid_window_token("2400"));
/// ```
pub fn is_valid_window_token(token: &str) -> bool {
    token.parse::<WindowToken>().is_ok()
}

/// Build the `HHMM-HHMM UTC` window from its raw ends.
///
/// # Errors
/// When any of the ends is not a valid [`WindowToken`].
pub fn time_window(start: &str, end: &str) -> Result<TimeWindow, ParseWindowError> {
    Ok(TimeWindow::new(start.parse()?, end.parse()?))
}

/// The launch window moved from UTC to the local time
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocalWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl LocalWindow {
    /// The local opening time
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The local closing time
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// How long the window stays open
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The window closes on a later day than it opens (in the local time)
    pub fn crosses_midnight(&self) -> bool {
        self.end.date() > self.start.date()
    }
}

impl fmt::Display for LocalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(CLOCK_12H_FORMAT),
            self.end.format(CLOCK_12H_FORMAT)
        )
    }
}

/// Converts the UTC launch windows into the local time with the fixed offset
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowTimeConverter {
    offset: FixedOffset,
}

impl Default for WindowTimeConverter {
    fn default() -> Self {
        Self::with_offset_hours(LOCAL_UTC_OFFSET_HOURS).expect("Default offset is valid")
    }
}

impl WindowTimeConverter {
    /// Construct a converter to the time zone with the given offset
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Construct a converter to the time zone `UTC+hours`.
    ///
    /// # Errors
    /// When the offset is not less than a day in any direction.
    pub fn with_offset_hours(hours: i32) -> Result<Self, OutOfRange> {
        hours
            .checked_mul(SECONDS_IN_HOUR)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or(OutOfRange::Hours)
    }

    /// The offset of the local time against UTC
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Move the window into the local time.
    /// The overnight window (the end is not after the start) ends on the next day.
    ///
    /// # Errors
    /// When the minutes of any end are not valid (e.g. `0775`).
    pub fn convert(&self, window: TimeWindow) -> Result<LocalWindow, ParseWindowError> {
        let day = NaiveDate::from_ymd_opt(1900, 1, 1).expect("Reference day is valid");

        let start = day.and_time(window.start().time_of_day()?);
        let mut end = day.and_time(window.end().time_of_day()?);
        if window.is_overnight() {
            end += Duration::days(1);
        }

        let shift = Duration::seconds(i64::from(self.offset.local_minus_utc()));
        Ok(LocalWindow {
            start: start + shift,
            end: end + shift,
        })
    }

    /// The local 12-hour label of the `HHMM-HHMM UTC` window, e.g. `3:45 PM - 4:10 PM`.
    ///
    /// The text that is not a valid window is returned unchanged.
    pub fn utc_window_to_local(&self, window_text: &str) -> String {
        match window_text
            .parse()
            .and_then(|window| self.convert(window))
        {
            Ok(local) => local.to_string(),
            Err(err) => {
                debug!("Window {window_text:?} is kept as is: {err}");
                window_text.to_owned()
            }
        }
    }
}
