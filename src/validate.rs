//! Normalize and range check single channel values.
//!
//! Every color notation is built from channels that arrive either as numbers
//! or as text (`"42"`, `"50%"`). [`validate`] turns one of those into a
//! canonical [`Component`] for a given [`Channel`], or fails with the channel
//! and the offending input.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{Error, Result},
    math::round2,
    Component,
};

/// The kinds of channel a raw value can be validated as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Hue in whole degrees.
    Hue,
    /// HSL saturation as a fraction.
    Saturation,
    /// HSL lightness as a fraction.
    Lightness,
    /// HWB whiteness as a fraction.
    Whiteness,
    /// HWB blackness as a fraction.
    Blackness,
    /// The red 8-bit channel.
    Red,
    /// The green 8-bit channel.
    Green,
    /// The blue 8-bit channel.
    Blue,
    /// Opacity as a fraction.
    Alpha,
}

impl Channel {
    /// The inclusive range of valid values for the channel.
    pub const fn range(self) -> ChannelRange {
        match self {
            Channel::Hue => ChannelRange::new(0.0, 360.0),
            Channel::Red | Channel::Green | Channel::Blue => ChannelRange::new(0.0, 255.0),
            Channel::Saturation
            | Channel::Lightness
            | Channel::Whiteness
            | Channel::Blackness
            | Channel::Alpha => ChannelRange::new(0.0, 1.0),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
            Channel::Whiteness => "whiteness",
            Channel::Blackness => "blackness",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha channel",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive `[min, max]` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    /// Smallest legal value.
    pub min: Component,
    /// Largest legal value.
    pub max: Component,
}

impl ChannelRange {
    const fn new(min: Component, max: Component) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: Component) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A single raw channel value as supplied by a caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    /// A plain number.
    Number(Component),
    /// A numeric or percentage string, e.g. `"0.5"` or `"50%"`.
    Text(&'a str),
}

impl Value<'_> {
    /// Parse the value the way integer channels are read: the leading
    /// integer of the text, or the number truncated toward zero.
    fn to_int(self) -> Option<Component> {
        match self {
            Value::Number(n) if n.is_finite() => Some(n.trunc()),
            Value::Number(_) => None,
            Value::Text(text) => int_prefix(text),
        }
    }

    /// Parse the value the way fractional channels are read. Text containing
    /// a `%` is divided by 100.
    fn to_float(self) -> Option<Component> {
        match self {
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => Some(n),
            Value::Text(text) => {
                let n = float_prefix(text)?;
                Some(if text.contains('%') { n / 100.0 } else { n })
            }
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Number(Component::from(value))
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Number(Component::from(value))
    }
}

impl From<u8> for Value<'_> {
    fn from(value: u8) -> Self {
        Value::Number(Component::from(value))
    }
}

impl From<u16> for Value<'_> {
    fn from(value: u16) -> Self {
        Value::Number(Component::from(value))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(value)
    }
}

/// The value handed to a color constructor: either a single string (a hex
/// code or a delimited channel list) or an already split list of values.
#[derive(Clone, Debug, PartialEq)]
pub enum Input<'a> {
    /// A hex code, or 3-4 numbers separated by `", "`, `","` or `" "`.
    Text(&'a str),
    /// An ordered list of channel values.
    Values(Vec<Value<'a>>),
}

impl<'a> Input<'a> {
    /// Return the channel values, splitting text input on its delimiters.
    pub fn into_values(self) -> Vec<Value<'a>> {
        match self {
            Input::Text(text) => split_values(text),
            Input::Values(values) => values,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(value)
    }
}

impl<'a> From<Vec<Value<'a>>> for Input<'a> {
    fn from(values: Vec<Value<'a>>) -> Self {
        Input::Values(values)
    }
}

impl<'a> From<&[Value<'a>]> for Input<'a> {
    fn from(values: &[Value<'a>]) -> Self {
        Input::Values(values.to_vec())
    }
}

impl<'a, T: Into<Value<'a>>, const N: usize> From<[T; N]> for Input<'a> {
    fn from(values: [T; N]) -> Self {
        Input::Values(values.into_iter().map(Into::into).collect())
    }
}

/// Validate `value` as `channel`, returning the canonical number.
///
/// Hue and RGB channels are read as integers, the fractional channels as
/// floats (with `%` support). Alpha follows [`validate_alpha`].
///
/// # Errors
///
/// [`Error::InvalidChannelValue`] if the value does not parse and
/// [`Error::ChannelOutOfRange`] if it is outside [`Channel::range`].
pub fn validate(channel: Channel, value: &Value<'_>) -> Result<Component> {
    let parsed = match channel {
        Channel::Hue | Channel::Red | Channel::Green | Channel::Blue => value.to_int(),
        Channel::Saturation | Channel::Lightness | Channel::Whiteness | Channel::Blackness => {
            value.to_float()
        }
        Channel::Alpha => return validate_alpha(Some(value)),
    };

    let Some(parsed) = parsed else {
        return Err(Error::InvalidChannelValue {
            channel,
            value: value.to_string(),
        });
    };

    check_range(channel, parsed, value)
}

/// Validate an optional alpha value. A missing or unparsable alpha is
/// treated as fully opaque; the result is rounded to 2 decimals.
///
/// # Errors
///
/// [`Error::ChannelOutOfRange`] if the parsed value is outside [0, 1].
pub fn validate_alpha(value: Option<&Value<'_>>) -> Result<Component> {
    let Some(value) = value else {
        return Ok(1.0);
    };

    match value.to_float() {
        Some(parsed) => check_range(Channel::Alpha, parsed, value).map(round2),
        None => Ok(1.0),
    }
}

/// Whether a 3 or 4 element list leaves the alpha channel to its default.
pub(crate) fn alpha_is_none(values: &[Value<'_>]) -> bool {
    values.get(3).map_or(true, |value| value.to_float().is_none())
}

fn check_range(channel: Channel, parsed: Component, value: &Value<'_>) -> Result<Component> {
    let range = channel.range();
    if !range.contains(parsed) {
        return Err(Error::ChannelOutOfRange {
            channel,
            value: value.to_string(),
            range,
        });
    }

    // Fold -0 into 0.
    Ok(parsed + 0.0)
}

/// Parse a relative percentage such as `"+25%"`, `"-7.5%"` or `"150%"` into
/// a signed fraction. This is the syntax used for channel adjustments, which
/// are deltas and therefore not limited to 100%.
///
/// # Errors
///
/// [`Error::InvalidPercent`] if `text` does not match `[+-]N[.N]%`. A
/// decimal point must be followed by at least one digit.
pub fn parse_percent_delta(text: &str, channel: Channel) -> Result<Component> {
    static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?%$").unwrap());

    let invalid = || Error::InvalidPercent {
        channel,
        value: text.to_string(),
    };

    if !PERCENT.is_match(text) {
        return Err(invalid());
    }

    text[..text.len() - 1]
        .parse::<Component>()
        .map(|n| n / 100.0)
        .map_err(|_| invalid())
}

/// Split a channel list on a comma with at most one following whitespace,
/// or on a single whitespace.
pub fn split_values(text: &str) -> Vec<Value<'_>> {
    static DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s?|\s").unwrap());

    DELIMITER.split(text).map(Value::Text).collect()
}

/// Render a value list for error messages, e.g. `100,150`.
pub fn display_values(values: &[Value<'_>]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// The leading `[+-]digits` of `text`, ignoring anything after it.
fn int_prefix(text: &str) -> Option<Component> {
    static INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());

    INT.captures(text).and_then(|caps| caps[1].parse().ok())
}

/// The longest leading decimal literal of `text`, ignoring anything after
/// it (so `"50%"` reads as 50).
fn float_prefix(text: &str) -> Option<Component> {
    static FLOAT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))")
            .unwrap()
    });

    FLOAT.captures(text).and_then(|caps| caps[1].parse().ok())
}
