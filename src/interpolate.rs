//! Mixing colors in the RGB notation.

use crate::{
    error::{Error, Result},
    math::{lerp, round2},
    Color, Component, Space,
};

fn check_weight(weight: Component) -> Result<Component> {
    if (0.0..=1.0).contains(&weight) {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight(weight))
    }
}

impl Color {
    /// Mix this color with another in the RGB notation. `weight` is the
    /// share of this color, in [0, 1]. Channels are rounded to whole values
    /// and alpha to 2 decimals.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`] if `weight` is outside [0, 1] or NaN.
    pub fn mix(&self, other: &Color, weight: Component) -> Result<Color> {
        let weight = check_weight(weight)?;

        let channel =
            |a: u8, b: u8| lerp(Component::from(a), Component::from(b), weight).round();

        Color::new(
            Space::Rgb,
            [
                channel(self.red(), other.red()),
                channel(self.green(), other.green()),
                channel(self.blue(), other.blue()),
                round2(lerp(self.alpha(), other.alpha(), weight)),
            ],
        )
    }

    /// Mix the opaque inverse of this color with the color itself. `weight`
    /// is the share of the inverse; a weight of 1 gives the pure inverse.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`] if `weight` is outside [0, 1] or NaN.
    pub fn invert(&self, weight: Component) -> Result<Color> {
        let weight = check_weight(weight)?;

        let inverse = Color::new(
            Space::Rgb,
            [255 - self.red(), 255 - self.green(), 255 - self.blue()],
        )?;

        inverse.mix(self, weight)
    }
}
