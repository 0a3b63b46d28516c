use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::hemisphere::ParseHemisphereError;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Some numeric part of a coordinate or a time is not in its valid range
pub enum OutOfRange {
    /// |lat| > 90
    Latitude,
    /// |lon| > 180
    Longitude,
    /// min >= 60
    ArcMinutes,
    /// sec >= 60
    ArcSeconds,
    /// hours >= 24
    Hours,
    /// minutes >= 60
    Minutes,
    /// HHMM > 2359
    WindowValue,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Latitude => "Latitude should be in range [-90..90]",
            Self::Longitude => "Longitude should be in range [-180..180]",
            Self::ArcMinutes => "Arc minute value not in range [0..60)",
            Self::ArcSeconds => "Arc second value not in range [0..60)",
            Self::Hours => "Hour of the day not in range [0..24)",
            Self::Minutes => "Minute of the hour not in range [0..60)",
            Self::WindowValue => "Window time should not exceed 2359",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

#[derive(Debug)]
/// The string cannot be read as a geographic coordinate
pub enum ParseCoordinateError {
    /// Nothing but whitespace
    EmptyString,
    /// None of the supported notations matched
    Notation,
    /// Matched a notation, but the numbers are invalid
    Range(OutOfRange),
    /// Bad decimal number
    Float(ParseFloatError),
    // this variant is practically impossible due to regex digits limitations
    /// Bad integer number
    Int(ParseIntError),
    /// Unknown hemisphere letter
    Hemisphere(ParseHemisphereError),
}

enum_trivial_from_impl!(OutOfRange => ParseCoordinateError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);
enum_trivial_from_impl!(ParseIntError => ParseCoordinateError:Int);
enum_trivial_from_impl!(ParseHemisphereError => ParseCoordinateError:Hemisphere);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::Notation => write!(f, "not a recognized coordinate notation"),
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::Hemisphere(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            Self::Hemisphere(inner) => Some(inner),
            Self::EmptyString | Self::Notation => None,
        }
    }
}

#[derive(Debug)]
/// The string cannot be read as a launch window or one of its ends
pub enum ParseWindowError {
    /// Nothing but whitespace
    EmptyString,
    /// Not 3 or 4 digits, or not a `start-end` pair
    Shape,
    /// The digits do not form a valid time
    Range(OutOfRange),
    // this variant is practically impossible due to regex digits limitations
    /// Bad integer number
    Int(ParseIntError),
}

enum_trivial_from_impl!(OutOfRange => ParseWindowError:Range);
enum_trivial_from_impl!(ParseIntError => ParseWindowError:Int);

impl fmt::Display for ParseWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse launch window: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::Shape => write!(f, "expected HHMM or HHMM-HHMM"),
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseWindowError {}
