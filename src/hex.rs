//! Hexadecimal color codes, e.g. `#ee88aa99`.

use crate::{
    color::Component,
    error::{Error, Result},
    validate::Value,
    Rgb,
};

/// Encode an RGB record as a lowercase `#rrggbb` code. An alpha pair is
/// appended only when alpha is not 1.
///
/// # Errors
///
/// Fails if the alpha channel is out of range.
pub fn encode(rgb: &Rgb) -> Result<String> {
    let rgb = rgb.validated()?;

    let mut hex = format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
    if rgb.alpha != 1.0 {
        hex.push_str(&format!("{:02x}", (rgb.alpha * 255.0).round() as u8));
    }

    Ok(hex)
}

/// Decode a 3, 4, 6 or 8 digit hex code, with or without a leading `#`.
/// Digits are case-insensitive and the short forms double every digit. A
/// missing alpha pair means fully opaque; otherwise alpha is `aa / 255`
/// rounded to 2 decimals.
///
/// # Errors
///
/// [`Error::InvalidHexFormat`] for any other input.
pub fn decode(text: &str) -> Result<Rgb> {
    let digits = digits(text)?;
    let width = if digits.len() <= 4 { 1 } else { 2 };

    let mut channels = Vec::with_capacity(4);
    for index in 0..digits.len() / width {
        let byte = u8::from_str_radix(&digits[index * width..(index + 1) * width], 16)
            .map_err(|_| Error::InvalidHexFormat(text.to_string()))?;
        // A single digit stands for itself twice, e.g. `a` is `aa`.
        channels.push(if width == 1 { byte * 17 } else { byte });
    }

    let mut values: Vec<Value> = channels[..3].iter().map(|&c| Value::from(c)).collect();
    if let Some(&alpha) = channels.get(3) {
        values.push(Value::Number(Component::from(alpha) / 255.0));
    }

    Rgb::from_values(&values)
}

/// Whether a valid hex code carries an alpha pair.
pub(crate) fn has_alpha(text: &str) -> bool {
    digits(text).map_or(false, |digits| digits.len() == 4 || digits.len() == 8)
}

fn digits(text: &str) -> Result<&str> {
    let digits = text.strip_prefix('#').unwrap_or(text);

    if !matches!(digits.len(), 3 | 4 | 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexFormat(text.to_string()));
    }

    Ok(digits)
}
