//! Conversions between the RGB, HSL and HWB notations.
//!
//! Each conversion validates its input record again, so records built by
//! hand through their public fields can not produce garbage. Fractional
//! outputs are rounded to 2 decimals and hues to whole degrees, which makes
//! every conversion deterministic but lossy:
//!
//! ```rust
//! use spectrum::Rgb;
//! let hsl = Rgb::new(100, 150, 200, 1.0).to_hsl().unwrap();
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (210, 0.48, 0.59));
//! ```

use crate::{error::Result, Hsl, Hwb, Rgb};

impl Rgb {
    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Result<Hsl> {
        let rgb = self.validated()?;
        let (saturation, lightness) = util::saturation_and_lightness(&rgb);
        let hsl = Hsl::new(util::hue(&rgb), saturation, lightness, rgb.alpha);
        log::trace!(target: "spectrum::convert", "{rgb:?} -> {hsl:?}");
        Ok(hsl)
    }

    /// Convert to the HWB notation, through HSL.
    pub fn to_hwb(&self) -> Result<Hwb> {
        self.to_hsl()?.to_hwb()
    }
}

impl Hsl {
    /// Convert to the RGB notation.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let hsl = self.validated()?;
        let (red, green, blue) = util::hsl_to_rgb(&hsl)?;
        let rgb = Rgb::new(red, green, blue, hsl.alpha);
        log::trace!(target: "spectrum::convert", "{hsl:?} -> {rgb:?}");
        Ok(rgb)
    }

    /// Convert to the HWB notation.
    pub fn to_hwb(&self) -> Result<Hwb> {
        let hsl = self.validated()?;
        let (whiteness, blackness) = util::hsl_to_hwb(&hsl);
        let hwb = Hwb::new(hsl.hue, whiteness, blackness, hsl.alpha);
        log::trace!(target: "spectrum::convert", "{hsl:?} -> {hwb:?}");
        Ok(hwb)
    }
}

impl Hwb {
    /// Convert to the HSL notation. Whiteness and blackness that sum to 1 or
    /// more are normalized first, see [`Hwb::normalize`].
    pub fn to_hsl(&self) -> Result<Hsl> {
        let hwb = self.validated()?;
        let (saturation, lightness) = util::hwb_to_hsl(&hwb);
        let hsl = Hsl::new(hwb.hue, saturation, lightness, hwb.alpha);
        log::trace!(target: "spectrum::convert", "{hwb:?} -> {hsl:?}");
        Ok(hsl)
    }

    /// Convert to the RGB notation, through HSL.
    pub fn to_rgb(&self) -> Result<Rgb> {
        self.to_hsl()?.to_rgb()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        error::{Error, Result},
        gamut,
        math::{round2, round_to},
        Hsl, Hwb, Rgb,
    };

    /// The hue in whole degrees, 0 for achromatic colors.
    pub fn hue(rgb: &Rgb) -> u16 {
        let Components(red, green, blue) = rgb.to_components();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        if max == min {
            return 0;
        }

        let delta = max - min;
        let hue = if max == red {
            (green - blue) / delta
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        let mut degrees = hue * 60.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }

        degrees.round() as u16
    }

    pub fn saturation_and_lightness(rgb: &Rgb) -> (Component, Component) {
        let Components(red, green, blue) = rgb.to_components();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = round2(0.5 * (max + min) / 255.0).clamp(0.0, 1.0);
        if lightness == 0.0 || lightness == 1.0 {
            return (0.0, lightness);
        }

        let saturation = (max - min) / (1.0 - (1.0 - 2.0 * lightness).abs()) / 255.0;
        (round2(saturation).clamp(0.0, 1.0), lightness)
    }

    pub fn hsl_to_rgb(hsl: &Hsl) -> Result<(u8, u8, u8)> {
        let Components(_, saturation, lightness) = hsl.to_components();

        let chroma = saturation * (1.0 - (2.0 * lightness - 1.0).abs());
        let sextant = Component::from(hsl.hue) / 60.0;
        // Trim the noise of `%` so that sextant boundaries land on 0 exactly.
        let x = chroma * (1.0 - (round_to(sextant % 2.0, 10) - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue) = if sextant < 1.0 {
            (chroma, x, 0.0)
        } else if sextant < 2.0 {
            (x, chroma, 0.0)
        } else if sextant < 3.0 {
            (0.0, chroma, x)
        } else if sextant < 4.0 {
            (0.0, x, chroma)
        } else if sextant < 5.0 {
            (x, 0.0, chroma)
        } else if sextant <= 6.0 {
            (chroma, 0.0, x)
        } else {
            return Err(Error::HueOutOfSextant(hsl.hue));
        };

        let channel = |value: Component| ((value + m) * 255.0).round() as u8;
        Ok((channel(red), channel(green), channel(blue)))
    }

    pub fn hsl_to_hwb(hsl: &Hsl) -> (Component, Component) {
        let Components(_, saturation, lightness) = hsl.to_components();

        // HSV value and saturation.
        let value = lightness + saturation * lightness.min(1.0 - lightness);
        let sv = if value == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - lightness / value)
        };

        let whiteness = (1.0 - sv) * value;
        let blackness = 1.0 - value;
        (round2(whiteness), round2(blackness))
    }

    pub fn hwb_to_hsl(hwb: &Hwb) -> (Component, Component) {
        let gamut::Gamut {
            whiteness,
            blackness,
            ..
        } = gamut::normalize(hwb.whiteness, hwb.blackness);

        let sv = if blackness == 1.0 {
            0.0
        } else {
            1.0 - whiteness / (1.0 - blackness)
        };
        let value = 1.0 - blackness;

        let lightness = value * (1.0 - round_to(sv, 10) / 2.0);
        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (value - lightness) / lightness.min(1.0 - lightness)
        };

        (round2(saturation), round2(lightness))
    }
}
