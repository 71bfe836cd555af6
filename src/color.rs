//! A [`Color`] holds a single color value, validated once and viewable in
//! every supported notation.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{
    error::{Error, Result},
    hex,
    math::round_to,
    named,
    validate::{alpha_is_none, Input},
    Hsl, Hwb, Rgb,
};

/// A 64-bit floating point value that all fractional channels are stored as.
pub type Component = f64;

/// Represent the three channels that describe any color, widened to
/// [`Component`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

bitflags! {
    /// Flags describing how a [`Color`] was constructed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when no alpha was supplied and it defaulted to 1.
        const ALPHA_IS_NONE = 1 << 0;
        /// Set when HWB whiteness and blackness summed to 1 or more and were
        /// rescaled.
        const GAMUT_NORMALIZED = 1 << 1;
    }
}

/// The notations a color can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Space {
    /// `#rrggbb[aa]` hexadecimal notation.
    Hex = 0,
    /// Red, green and blue 8-bit channels.
    Rgb = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
    /// Hue, whiteness and blackness.
    Hwb = 3,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Space::Hex => "HEX",
            Space::Rgb => "RGB",
            Space::Hsl => "HSL",
            Space::Hwb => "HWB",
        })
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Space::Hex),
            "rgb" => Ok(Space::Rgb),
            "hsl" => Ok(Space::Hsl),
            "hwb" => Ok(Space::Hwb),
            _ => Err(Error::UnknownSpace(s.to_string())),
        }
    }
}

/// Implemented by records that belong to a single notation.
pub trait HasSpace {
    /// The notation of the record.
    const SPACE: Space;
}

/// An immutable color.
///
/// The RGB record is the ground truth; the HSL, HWB and hex views are
/// derived once at construction. Accessors hand out copies, so nothing a
/// caller does to them can reach back into the color.
///
/// ```rust
/// use spectrum::{Color, Space};
/// let color = Color::new(Space::Hsl, [180.0, 0.5, 0.5]).unwrap();
/// assert_eq!(color.hex(), "#40bfbf");
/// assert_eq!(color.to_rgb_string(), "rgb(64 191 191 / 1)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    rgb: Rgb,
    hsl: Hsl,
    hwb: Hwb,
    hex: String,
    space: Space,
    flags: Flags,
}

impl Color {
    /// Create a color from a value in the given notation.
    ///
    /// `Hex` takes a string. `Rgb`, `Hsl` and `Hwb` take 3 or 4 values,
    /// either as a list or as a string separated by `", "`, `","` or `" "`.
    ///
    /// # Errors
    ///
    /// Fails if the input has the wrong kind or shape, or if any channel is
    /// unparsable or out of range.
    pub fn new<'a>(space: Space, input: impl Into<Input<'a>>) -> Result<Self> {
        let input = input.into();

        match space {
            Space::Hex => match input {
                Input::Text(text) => Self::from_hex(text),
                Input::Values(_) => Err(Error::TypeMismatch {
                    space,
                    expected: "a string",
                }),
            },
            Space::Rgb => {
                let values = input.into_values();
                let rgb = Rgb::from_values(&values)?;
                Self::with_rgb(rgb, space, alpha_flags(alpha_is_none(&values)))
            }
            Space::Hsl => {
                let values = input.into_values();
                let hsl = Hsl::from_values(&values)?;
                Self::with_hsl(hsl, alpha_flags(alpha_is_none(&values)))
            }
            Space::Hwb => {
                let values = input.into_values();
                let hwb = Hwb::from_values(&values)?;
                Self::with_hwb(hwb, alpha_flags(alpha_is_none(&values)))
            }
        }
    }

    /// Like [`Color::new`], with the notation given as one of the tags
    /// `"hex"`, `"rgb"`, `"hsl"` or `"hwb"`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSpace`] for any other tag, otherwise as
    /// [`Color::new`].
    pub fn parse<'a>(tag: &str, input: impl Into<Input<'a>>) -> Result<Self> {
        Self::new(tag.parse()?, input)
    }

    /// Create a color from a CSS named color, e.g. `"AliceBlue"` or
    /// `"transparent"`. Matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColorName`] if the name is not a CSS color keyword.
    pub fn named(name: &str) -> Result<Self> {
        let hex = named::lookup(name).ok_or_else(|| Error::UnknownColorName(name.to_string()))?;
        Self::from_hex(hex)
    }

    /// Create a color from a 3, 4, 6 or 8 digit hex code, with or without a
    /// leading `#`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHexFormat`] if the code is malformed.
    pub fn from_hex(text: &str) -> Result<Self> {
        let rgb = hex::decode(text)?;
        Self::with_rgb(rgb, Space::Hex, alpha_flags(!hex::has_alpha(text)))
    }

    /// Create a color from an RGB record. Every field is validated again.
    ///
    /// # Errors
    ///
    /// Fails if the alpha channel is out of range.
    pub fn from_rgb(rgb: Rgb) -> Result<Self> {
        Self::with_rgb(rgb.validated()?, Space::Rgb, Flags::empty())
    }

    /// Create a color from an HSL record. Every field is validated again.
    ///
    /// # Errors
    ///
    /// Fails if any channel is out of range.
    pub fn from_hsl(hsl: Hsl) -> Result<Self> {
        Self::with_hsl(hsl.validated()?, Flags::empty())
    }

    /// Create a color from an HWB record. Every field is validated again and
    /// the gamut normalization applies.
    ///
    /// # Errors
    ///
    /// Fails if any channel is out of range.
    pub fn from_hwb(hwb: Hwb) -> Result<Self> {
        Self::with_hwb(hwb.validated()?, Flags::empty())
    }

    fn with_rgb(rgb: Rgb, space: Space, flags: Flags) -> Result<Self> {
        let hsl = rgb.to_hsl()?;
        let hwb = hsl.to_hwb()?;
        Self::assemble(rgb, hsl, hwb, space, flags)
    }

    fn with_hsl(hsl: Hsl, flags: Flags) -> Result<Self> {
        let rgb = hsl.to_rgb()?;
        let hwb = hsl.to_hwb()?;
        Self::assemble(rgb, hsl, hwb, Space::Hsl, flags)
    }

    fn with_hwb(hwb: Hwb, mut flags: Flags) -> Result<Self> {
        let (hwb, normalized) = hwb.normalize();
        if normalized {
            flags |= Flags::GAMUT_NORMALIZED;
        }

        let hsl = hwb.to_hsl()?;
        let rgb = hsl.to_rgb()?;
        Self::assemble(rgb, hsl, hwb, Space::Hwb, flags)
    }

    fn assemble(rgb: Rgb, hsl: Hsl, hwb: Hwb, space: Space, flags: Flags) -> Result<Self> {
        let hex = hex::encode(&rgb)?;
        log::trace!(target: "spectrum", "created {space} color {hex}");

        Ok(Self {
            rgb,
            hsl,
            hwb,
            hex,
            space,
            flags,
        })
    }

    /// The RGB record of the color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HSL record of the color.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The HWB record of the color. Whiteness and blackness are the
    /// normalized values if the input overflowed.
    pub fn hwb(&self) -> Hwb {
        self.hwb
    }

    /// The lowercase `#rrggbb[aa]` code of the color.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The notation the color was created from.
    pub fn space(&self) -> Space {
        self.space
    }

    /// Flags describing how the color was constructed.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.rgb.red
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.rgb.green
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.rgb.blue
    }

    /// The alpha channel.
    pub fn alpha(&self) -> Component {
        self.rgb.alpha
    }

    /// The hue in degrees.
    pub fn hue(&self) -> u16 {
        self.hsl.hue
    }

    /// The HSL saturation.
    pub fn saturation(&self) -> Component {
        self.hsl.saturation
    }

    /// The HSL lightness.
    pub fn lightness(&self) -> Component {
        self.hsl.lightness
    }

    /// The HWB whiteness.
    pub fn whiteness(&self) -> Component {
        self.hwb.whiteness
    }

    /// The HWB blackness.
    pub fn blackness(&self) -> Component {
        self.hwb.blackness
    }

    /// CSS `rgb()` notation, e.g. `rgb(255 130 60 / 0.8)`.
    pub fn to_rgb_string(&self) -> String {
        format!(
            "rgb({} {} {} / {})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }

    /// CSS `hsl()` notation, e.g. `hsl(180 50% 85% / 0.4)`.
    pub fn to_hsl_string(&self) -> String {
        format!(
            "hsl({} {}% {}% / {})",
            self.hue(),
            percent(self.saturation()),
            percent(self.lightness()),
            self.alpha()
        )
    }

    /// CSS `hwb()` notation, e.g. `hwb(180 25% 35% / 0.5)`.
    pub fn to_hwb_string(&self) -> String {
        format!(
            "hwb({} {}% {}% / {})",
            self.hue(),
            percent(self.whiteness()),
            percent(self.blackness()),
            self.alpha()
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

fn alpha_flags(alpha_is_none: bool) -> Flags {
    if alpha_is_none {
        Flags::ALPHA_IS_NONE
    } else {
        Flags::empty()
    }
}

/// A fraction as a percentage, without float noise such as `56.99999999999999`.
fn percent(value: Component) -> Component {
    round_to(value * 100.0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validate::{Channel, Value};

    #[test]
    fn create_color_from_hex() {
        for option in ["#FF0000", "#ff0000", "#F00", "#f00", "FF0000", "f00"] {
            let color = Color::new(Space::Hex, option).unwrap();
            assert_eq!(color.rgb(), Rgb::new(255, 0, 0, 1.0));
            assert_eq!(color.hsl(), Hsl::new(0, 1.0, 0.5, 1.0));
            assert_eq!(color.hex(), "#ff0000");
            assert_eq!(color.space(), Space::Hex);
            assert_eq!(color.flags(), Flags::ALPHA_IS_NONE);
        }
    }

    #[test]
    fn create_color_from_hex_with_alpha() {
        for option in ["#EE88AA99", "#ee88aa99", "#E8A9", "#e8a9", "EE88AA99"] {
            let color = Color::new(Space::Hex, option).unwrap();
            assert_eq!(color.rgb(), Rgb::new(238, 136, 170, 0.6));
            assert_eq!(color.hsl(), Hsl::new(340, 0.74, 0.73, 0.6));
            assert_eq!(color.hex(), "#ee88aa99");
            assert_eq!(color.flags(), Flags::empty());
        }
    }

    #[test]
    fn create_color_from_rgb() {
        let array = Color::new(Space::Rgb, [100, 150, 200]).unwrap();
        let spaced = Color::new(Space::Rgb, "100 150 200").unwrap();
        let commas = Color::new(Space::Rgb, "100, 150, 200").unwrap();

        for color in [array, spaced, commas] {
            assert_eq!(color.rgb(), Rgb::new(100, 150, 200, 1.0));
            assert_eq!(color.hsl(), Hsl::new(210, 0.48, 0.59, 1.0));
            assert_eq!(color.hex(), "#6496c8");
        }
    }

    #[test]
    fn create_color_from_hsl() {
        let array = Color::new(Space::Hsl, [230.0, 0.35, 0.2, 0.89]).unwrap();
        let spaced = Color::new(Space::Hsl, "230 0.35 0.2 0.89").unwrap();
        let commas = Color::new(Space::Hsl, "230, 0.35, 0.2, 0.89").unwrap();

        for color in [array, spaced, commas] {
            assert_eq!(color.rgb(), Rgb::new(33, 39, 69, 0.89));
            assert_eq!(color.hsl(), Hsl::new(230, 0.35, 0.2, 0.89));
            assert_eq!(color.hex(), "#212745e3");
            assert_eq!(color.flags(), Flags::empty());
        }
    }

    #[test]
    fn create_color_from_hsl_with_percentages() {
        let color = Color::new(Space::Hsl, "180 50% 50%").unwrap();
        assert_eq!(color.rgb(), Rgb::new(64, 191, 191, 1.0));
        assert_eq!(color.flags(), Flags::ALPHA_IS_NONE);
    }

    #[test]
    fn create_color_from_hwb_with_overflow() {
        let color = Color::new(Space::Hwb, [230.0, 0.6, 0.95, 0.89]).unwrap();
        assert_eq!(color.hwb(), Hwb::new(230, 0.39, 0.61, 0.89));
        assert_eq!(color.hsl(), Hsl::new(230, 0.0, 0.39, 0.89));
        assert_eq!(color.rgb(), Rgb::new(99, 99, 99, 0.89));
        assert!(color.flags().contains(Flags::GAMUT_NORMALIZED));
    }

    #[test]
    fn create_color_from_hwb_in_gamut() {
        let color = Color::new(Space::Hwb, "180 25% 35% 0.5").unwrap();
        assert_eq!(color.hwb(), Hwb::new(180, 0.25, 0.35, 0.5));
        assert!(!color.flags().contains(Flags::GAMUT_NORMALIZED));
        assert_eq!(color.to_hwb_string(), "hwb(180 25% 35% / 0.5)");
    }

    #[test]
    fn create_color_from_tag() {
        let color = Color::parse("rgb", [255, 0, 0]).unwrap();
        assert_eq!(color.hex(), "#ff0000");

        let err = Color::parse("invalid", "#ff0000").unwrap_err();
        assert_eq!(err, Error::UnknownSpace("invalid".to_string()));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn create_color_from_name() {
        let color = Color::named("aliceblue").unwrap();
        assert_eq!(color.rgb(), Rgb::new(240, 248, 255, 1.0));
        assert_eq!(color.hex(), "#f0f8ff");

        assert_eq!(Color::named("AliceBlue").unwrap(), color);

        let transparent = Color::named("transparent").unwrap();
        assert_eq!(transparent.rgb(), Rgb::new(0, 0, 0, 0.0));
        assert_eq!(transparent.hex(), "#00000000");

        let err = Color::named("notacolor").unwrap_err();
        assert_eq!(err, Error::UnknownColorName("notacolor".to_string()));
    }

    #[test]
    fn create_color_from_records() {
        let color = Color::from_hsl(Hsl::new(180, 0.5, 0.75, 1.0)).unwrap();
        assert_eq!(color.rgb(), Rgb::new(159, 223, 223, 1.0));
        assert_eq!(color.hex(), "#9fdfdf");

        let color = Color::from_rgb(Rgb::new(255, 0, 0, 1.0)).unwrap();
        assert_eq!(color.hsl(), Hsl::new(0, 1.0, 0.5, 1.0));

        let color = Color::from_hwb(Hwb::new(180, 0.5, 0.3, 1.0)).unwrap();
        assert_eq!(color.hwb(), Hwb::new(180, 0.5, 0.3, 1.0));

        let err = Color::from_hsl(Hsl::new(400, 0.5, 0.5, 1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn returned_records_are_copies() {
        let color = Color::from_hsl(Hsl::new(180, 0.5, 0.75, 1.0)).unwrap();

        let mut rgb = color.rgb();
        rgb.red = 0;
        let mut hsl = color.hsl();
        hsl.hue = 10;

        assert_ne!(rgb, color.rgb());
        assert_ne!(hsl, color.hsl());
        assert_eq!(color.rgb(), Rgb::new(159, 223, 223, 1.0));
        assert_eq!(color.hue(), 180);
    }

    #[test]
    fn scalar_accessors() {
        let color = Color::new(Space::Rgb, [135.0, 15.0, 230.0, 0.5]).unwrap();
        assert_eq!(color.red(), 135);
        assert_eq!(color.green(), 15);
        assert_eq!(color.blue(), 230);
        assert_eq!(color.alpha(), 0.5);
        assert_eq!(color.hue(), color.hsl().hue);
        assert_eq!(color.saturation(), color.hsl().saturation);
        assert_eq!(color.lightness(), color.hsl().lightness);
        assert_eq!(color.whiteness(), color.hwb().whiteness);
        assert_eq!(color.blackness(), color.hwb().blackness);
    }

    #[test]
    fn string_renderers() {
        let color = Color::new(Space::Rgb, [255.0, 130.0, 60.0, 0.8]).unwrap();
        assert_eq!(color.to_rgb_string(), "rgb(255 130 60 / 0.8)");
        assert_eq!(color.to_string(), "#ff823ccc");

        let color = Color::new(Space::Hsl, [180.0, 0.5, 0.85, 0.4]).unwrap();
        assert_eq!(color.to_hsl_string(), "hsl(180 50% 85% / 0.4)");
    }

    #[test]
    fn hex_requires_a_string() {
        let err = Color::new(Space::Hex, [255, 0, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let err = Color::new(Space::Hex, "#ff0g").unwrap_err();
        assert_eq!(err, Error::InvalidHexFormat("#ff0g".to_string()));
    }

    #[test]
    fn wrong_element_count_identifies_the_array() {
        let err = Color::new(Space::Rgb, [100, 150]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid RGB values array: 100,150");
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = Color::new(Space::Hsl, [180.0, 0.5]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid HSL values array: 180,0.5");

        assert!(Color::new(Space::Hwb, "1 2 3 4 5").is_err());
    }

    #[test]
    fn invalid_channels_are_reported() {
        let err = Color::new(Space::Rgb, [255.0, 0.0, 0.0, 1.5]).unwrap_err();
        assert!(matches!(
            err,
            Error::ChannelOutOfRange {
                channel: Channel::Alpha,
                ..
            }
        ));

        let err = Color::new(Space::Hsl, [Value::from(400), 0.5.into(), 0.5.into()]).unwrap_err();
        assert!(err.to_string().contains("[0, 360]"));

        let err = Color::new(Space::Rgb, "red green blue").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidChannelValue {
                channel: Channel::Red,
                value: "red".to_string(),
            }
        );
    }

    #[test]
    fn space_tags() {
        assert_eq!("hwb".parse::<Space>(), Ok(Space::Hwb));
        assert!("HSL".parse::<Space>().is_err());
        assert_eq!(Space::Rgb.to_string(), "RGB");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Color, ErrorKind, Hsl, Rgb, Space};

    #[test]
    fn records_deserialize_from_json() {
        let hsl: Hsl =
            serde_json::from_str(r#"{"hue":180,"saturation":0.5,"lightness":0.75,"alpha":1.0}"#)
                .unwrap();
        let color = Color::from_hsl(hsl).unwrap();
        assert_eq!(color.hex(), "#9fdfdf");

        let json = serde_json::to_string(&color.rgb()).unwrap();
        assert_eq!(json, r#"{"red":159,"green":223,"blue":223,"alpha":1.0}"#);
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), color.rgb());
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(serde_json::from_str::<Hsl>(r#"{"hue":180,"saturation":0.5}"#).is_err());
    }

    #[test]
    fn deserialized_records_are_still_validated() {
        let hsl: Hsl =
            serde_json::from_str(r#"{"hue":400,"saturation":0.5,"lightness":0.5,"alpha":1.0}"#)
                .unwrap();
        assert_eq!(Color::from_hsl(hsl).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn space_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Space::Hwb).unwrap(), r#""hwb""#);
        assert_eq!(
            serde_json::from_str::<Space>(r#""hex""#).unwrap(),
            Space::Hex
        );
    }
}
