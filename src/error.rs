//! Error types for color construction and conversion.

use thiserror::Error;

use crate::{
    color::Space,
    validate::{Channel, ChannelRange},
};

/// Result type for spectrum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or converting a color.
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A channel value could not be parsed as a number.
    #[error("Invalid {channel} value: '{value}'. Expected a number")]
    InvalidChannelValue {
        /// The channel that was being validated.
        channel: Channel,
        /// The offending input.
        value: String,
    },

    /// A channel value parsed, but falls outside the legal range.
    #[error("Invalid {channel} value: {value}. Expected a value in range {range}")]
    ChannelOutOfRange {
        /// The channel that was being validated.
        channel: Channel,
        /// The offending input.
        value: String,
        /// The legal range for the channel.
        range: ChannelRange,
    },

    /// A relative percent value does not follow the `[+-]N[.N]%` syntax.
    #[error("Invalid value: '{value}'. {channel} value has to be a signed percent, e.g. '-25%'")]
    InvalidPercent {
        /// The channel that was being adjusted.
        channel: Channel,
        /// The offending input.
        value: String,
    },

    /// The hex body is not 3, 4, 6 or 8 hexadecimal digits.
    #[error("Invalid HEX color value: {0}")]
    InvalidHexFormat(String),

    /// A value list did not contain 3 or 4 elements.
    #[error("Invalid {space} values array: {input}")]
    InvalidValues {
        /// The color notation the list was meant for.
        space: Space,
        /// The offending input.
        input: String,
    },

    /// The color space tag is not one of `hex`, `rgb`, `hsl`, `hwb`.
    #[error("Invalid color space value: '{0}'")]
    UnknownSpace(String),

    /// The name is not a CSS named color.
    #[error("Invalid CSS named color value: `{0}`")]
    UnknownColorName(String),

    /// The input kind does not fit the requested color space.
    #[error("{space} color value has to be {expected}")]
    TypeMismatch {
        /// The requested color notation.
        space: Space,
        /// A description of the accepted input kind.
        expected: &'static str,
    },

    /// A mixing weight outside of [0, 1].
    #[error("Invalid weight: {0}. Weight value has to be a number in range [0, 1]")]
    InvalidWeight(f64),

    /// HSL to RGB received a hue past the last sextant.
    #[error("Invalid HSL calculation: hue value {0} is greater than 360")]
    HueOutOfSextant(u16),
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed the wrong kind of input for the operation.
    TypeMismatch,
    /// The input is structurally malformed.
    Format,
    /// The input is well formed but outside its legal range.
    Range,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::InvalidChannelValue { .. }
            | Error::InvalidPercent { .. }
            | Error::InvalidHexFormat(_)
            | Error::InvalidValues { .. }
            | Error::UnknownSpace(_)
            | Error::UnknownColorName(_) => ErrorKind::Format,
            Error::ChannelOutOfRange { .. }
            | Error::InvalidWeight(_)
            | Error::HueOutOfSextant(_) => ErrorKind::Range,
        }
    }
}
