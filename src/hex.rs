//! Hexadecimal encoding of a color: `#rrggbb` with an optional alpha byte.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{config::OPAQUE, Rgb};

/// An RGB color with an optional alpha, as written in hexadecimal.
///
/// Alpha is a percentage like everywhere else in the crate; it is only
/// converted to a byte when it is written out and back to a percentage when
/// parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex {
    /// The color channels.
    pub rgb: Rgb,
    /// Opacity in percent, if any.
    pub alpha: Option<u8>,
}

impl Hex {
    /// Create a new hex color.
    pub fn new(rgb: Rgb, alpha: Option<u8>) -> Self {
        Self {
            rgb,
            alpha: alpha.map(|a| a.min(OPAQUE)),
        }
    }

    /// Parse hex strings like the following:
    /// - `#f00` (shorthand, expanded to `#ff0000`),
    /// - `7a03c2` (without the leading `#`),
    /// - `#abcdef80` (with an alpha byte).
    ///
    /// Both lower and upper case is fine.
    pub fn parse(hex: &str) -> Result<Self, ParseHexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ParseHexError::InvalidDigit(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        let byte = |i: usize| nibbles[i * 2] << 4 | nibbles[i * 2 + 1];

        match nibbles.len() {
            // Duplicate each digit for shorthand notation, i.e. `a` -> `aa`.
            3 => Ok(Self::new(
                Rgb::new(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17),
                None,
            )),
            6 => Ok(Self::new(Rgb::new(byte(0), byte(1), byte(2)), None)),
            8 => Ok(Self::new(
                Rgb::new(byte(0), byte(1), byte(2)),
                Some(byte_to_alpha(byte(3))),
            )),
            len => Err(ParseHexError::InvalidLength(len)),
        }
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Rgb { red, green, blue } = self.rgb;
        write!(f, "#{:02x}{:02x}{:02x}", red, green, blue)?;
        match self.alpha {
            Some(alpha) if alpha != OPAQUE => write!(f, "{:02x}", alpha_to_byte(alpha)),
            _ => Ok(()),
        }
    }
}

/// Convert an alpha percentage to a byte, rounding half up.
pub fn alpha_to_byte(alpha: u8) -> u8 {
    ((u32::from(alpha.min(OPAQUE)) * 255 + 50) / 100) as u8
}

/// Convert an alpha byte to a percentage, rounding to the nearest.
pub fn byte_to_alpha(byte: u8) -> u8 {
    ((u32::from(byte) * 100 + 127) / 255) as u8
}

/// The error when parsing a [`Hex`] color from a string fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseHexError {
    /// The number of hex digits is not 3, 6 or 8.
    InvalidLength(usize),
    /// A character is not a hex digit.
    InvalidDigit(char),
}

impl std::error::Error for ParseHexError {}

impl Display for ParseHexError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected 3, 6 or 8 hex digits, found {}", len)
            }
            Self::InvalidDigit(c) => write!(f, "invalid hex digit {:?}", c),
        }
    }
}
