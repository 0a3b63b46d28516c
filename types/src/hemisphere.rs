//! The letters giving a direction to the absolute value of a coordinate

use std::{error::Error, fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The character is not a hemisphere letter of the expected kind
pub struct ParseHemisphereError {
    failed: char,
    kind: &'static str,
}

impl fmt::Display for ParseHemisphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse {} from {:?}", self.kind, self.failed)
    }
}

impl Error for ParseHemisphereError {}

/// Implements simple two variants enum associated with the boolean type
/// (`true` for the positive direction of the axis)
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[doc = concat!("Positive values, marked with '", $true_ch, "'")]
            $truthy,
            #[doc = concat!("Negative values, marked with '", $false_ch, "'")]
            $falsy,
        }

        impl $name {
            /// The hemisphere of a signed decimal degree value (zero is positive)
            pub fn of(value: f64) -> Self {
                Self::from(value >= 0.0)
            }

            /// Apply the direction to an absolute value of the angle
            pub fn apply(self, value: f64) -> f64 {
                match self {
                    Self::$truthy => value.abs(),
                    Self::$falsy => -value.abs(),
                }
            }

            /// The letter used in the notations
            pub const fn letter(self) -> char {
                match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    Self::$falsy => Self::$truthy,
                    Self::$truthy => Self::$falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        impl TryFrom<char> for $name {
            type Error = ParseHemisphereError;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $true_ch => Ok(Self::$truthy),
                    $false_ch => Ok(Self::$falsy),
                    _ => Err(ParseHemisphereError {
                        failed: c,
                        kind: stringify!($name),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.letter())
            }
        }
    };
}

bool_enum!(
    /// Northern or southern half of the globe
    LatHemisphere: North and South; parse from 'N':'S'
);

bool_enum!(
    /// Eastern or western half of the globe
    LonHemisphere: East and West; parse from 'E':'W'
);
