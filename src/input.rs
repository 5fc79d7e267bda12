//! Text input handling: the named fields a host shows and the rules for
//! turning what the user typed into channel values.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{CmykChannel, ParseHexError, RgbChannel};

/// A text input shown by the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The HEX input.
    Hex,
    /// One of the red, green or blue inputs.
    Rgb(RgbChannel),
    /// The alpha input.
    Alpha,
    /// One of the cyan, magenta, yellow or black inputs.
    Cmyk(CmykChannel),
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 9] = [
        Self::Hex,
        Self::Rgb(RgbChannel::Red),
        Self::Rgb(RgbChannel::Green),
        Self::Rgb(RgbChannel::Blue),
        Self::Alpha,
        Self::Cmyk(CmykChannel::Cyan),
        Self::Cmyk(CmykChannel::Magenta),
        Self::Cmyk(CmykChannel::Yellow),
        Self::Cmyk(CmykChannel::Black),
    ];

    /// The name of the field, matching the host's input name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb(channel) => channel.name(),
            Self::Alpha => "alpha",
            Self::Cmyk(channel) => channel.name(),
        }
    }
}

impl FromStr for Field {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "alpha" => Ok(Self::Alpha),
            _ => s
                .parse()
                .map(Self::Rgb)
                .or_else(|_| s.parse().map(Self::Cmyk)),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A channel or field name that is not known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl std::error::Error for UnknownName {}

impl Display for UnknownName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown channel or field name {:?}", self.0)
    }
}

/// The reason a text input was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The text contains something other than ASCII digits.
    NotNumeric(String),
    /// The text is not a valid hex color.
    Hex(ParseHexError),
    /// The alpha channel was edited on a picker without transparency.
    TransparencyDisabled,
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric(text) => write!(f, "{:?} is not a number", text),
            Self::Hex(err) => write!(f, "invalid hex color: {}", err),
            Self::TransparencyDisabled => f.write_str("transparency is disabled"),
        }
    }
}

impl From<ParseHexError> for InputError {
    fn from(err: ParseHexError) -> Self {
        Self::Hex(err)
    }
}

/// Parse the text of a numeric input.
///
/// Empty text gives `None`. Anything other than ASCII digits is rejected.
/// Values above `max`, including ones too large for any integer, are clamped
/// to `max`.
pub fn parse_number(text: &str, max: u32) -> Result<Option<u32>, InputError> {
    if text.is_empty() {
        return Ok(None);
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumeric(text.to_owned()));
    }

    let value = text
        .bytes()
        .try_fold(0u32, |acc, b| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))
        .unwrap_or(u32::MAX);

    Ok(Some(value.min(max)))
}

/// Raw text typed into fields that is not reflected by the state.
#[derive(Clone, Debug, Default)]
pub struct Drafts(HashMap<Field, String>);

impl Drafts {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, text: &str) {
        self.0.insert(field, text.to_owned());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
