use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{OutOfRange, ParseWindowError};

const MAX_WINDOW_VALUE: u16 = 2359;
const UTC_SUFFIX: &str = "UTC";

lazy_static! {
    static ref RE_HHMM: Regex = Regex::new(r"^\d{3,4}$").expect("HHMM regex is valid");
}

/// One end of a launch window: the 24-hour `HHMM` time in UTC.
///
/// Three digits are accepted and padded with zero on the left,
/// so `745` is `0745` and `045` is `0045`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowToken {
    hhmm: u16,
}

impl WindowToken {
    /// The `HHMM` digits as a number (e.g. 745 for `0745`)
    pub const fn value(self) -> u16 {
        self.hhmm
    }

    /// The hours part
    pub const fn hours(self) -> u16 {
        self.hhmm / 100
    }

    /// The minutes part
    pub const fn minutes(self) -> u16 {
        self.hhmm % 100
    }

    /// The time of the day the token stands for.
    ///
    /// # Errors
    /// The token only guarantees the value is not more than 2359,
    /// so the minutes can still be out of range (e.g. `0775`).
    pub fn time_of_day(self) -> Result<NaiveTime, ParseWindowError> {
        if self.hours() >= 24 {
            return Err(OutOfRange::Hours.into());
        }

        if self.minutes() >= 60 {
            return Err(OutOfRange::Minutes.into());
        }

        NaiveTime::from_hms_opt(u32::from(self.hours()), u32::from(self.minutes()), 0)
            .ok_or(ParseWindowError::Range(OutOfRange::Minutes))
    }
}

impl FromStr for WindowToken {
    type Err = ParseWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseWindowError::EmptyString);
        }

        if !RE_HHMM.is_match(s) {
            return Err(ParseWindowError::Shape);
        }

        let hhmm: u16 = s.parse()?;
        if hhmm > MAX_WINDOW_VALUE {
            return Err(OutOfRange::WindowValue.into());
        }

        Ok(Self { hhmm })
    }
}

impl fmt::Display for WindowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.hhmm)
    }
}

/// The launch window in UTC, written as `HHMM-HHMM UTC`.
///
/// The end is allowed to be earlier than the start:
/// such a window is an overnight one and ends on the next day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeWindow {
    start: WindowToken,
    end: WindowToken,
}

impl TimeWindow {
    /// Construct a window from its ends
    pub const fn new(start: WindowToken, end: WindowToken) -> Self {
        Self { start, end }
    }

    /// The opening time
    pub const fn start(self) -> WindowToken {
        self.start
    }

    /// The closing time
    pub const fn end(self) -> WindowToken {
        self.end
    }

    /// The window closes on the next day (the end is not after the start)
    pub fn is_overnight(self) -> bool {
        self.end <= self.start
    }
}

impl FromStr for TimeWindow {
    type Err = ParseWindowError;

    /// Parse `HHMM-HHMM` with the optional `UTC` mark anywhere in the string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_uppercase().replace(UTC_SUFFIX, "");
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseWindowError::EmptyString);
        }

        let mut parts = s.split('-');
        let (start, end) = match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(ParseWindowError::Shape),
        };

        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.start, self.end, UTC_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digits_are_padded() {
        let token: WindowToken = "745".parse().unwrap();
        assert_eq!(token.value(), 745);
        assert_eq!(token.to_string(), "0745");

        let token: WindowToken = " 045 ".parse().unwrap();
        assert_eq!(token.to_string(), "0045");
        assert_eq!(token.hours(), 0);
        assert_eq!(token.minutes(), 45);
    }

    #[test]
    fn midnight() {
        let token: WindowToken = "0000".parse().unwrap();
        assert_eq!(
            token.time_of_day().unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    #[should_panic(expected = "WindowValue")]
    fn too_late() {
        let _t: WindowToken = "2400".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Shape")]
    fn too_short() {
        let _t: WindowToken = "45".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Shape")]
    fn not_digits() {
        let _t: WindowToken = "07:45".parse().unwrap();
    }

    #[test]
    fn minutes_are_not_validated_by_token() {
        let token: WindowToken = "0775".parse().unwrap();
        assert!(matches!(
            token.time_of_day(),
            Err(ParseWindowError::Range(OutOfRange::Minutes))
        ));
    }

    #[test]
    fn window_display() {
        let window = TimeWindow::new("745".parse().unwrap(), "810".parse().unwrap());
        assert_eq!(window.to_string(), "0745-0810 UTC");
        assert!(!window.is_overnight());
    }

    #[test]
    fn window_parse() {
        let window: TimeWindow = "2330 - 0030 utc".parse().unwrap();
        assert_eq!(window.start().value(), 2330);
        assert_eq!(window.end().value(), 30);
        assert!(window.is_overnight());

        let same: TimeWindow = "UTC 2330-0030".parse().unwrap();
        assert_eq!(window, same);
    }

    #[test]
    fn window_bad_shape() {
        assert!(matches!(
            "0745".parse::<TimeWindow>(),
            Err(ParseWindowError::Shape)
        ));
        assert!(matches!(
            "0745-0800-0900".parse::<TimeWindow>(),
            Err(ParseWindowError::Shape)
        ));
        assert!(matches!(
            " UTC ".parse::<TimeWindow>(),
            Err(ParseWindowError::EmptyString)
        ));
    }
}
