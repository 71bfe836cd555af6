//! Model a color with the HSL notation.

use crate::{
    color::{HasSpace, Space},
    Component,
};

spectrum_macros::gen_model! {
    /// A color specified with the HSL notation.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Hsl {
        /// The hue of the color in whole degrees, [0, 360].
        hue: u16,
        /// The saturation of the color, [0, 1].
        saturation: Component,
        /// The lightness of the color, [0, 1].
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

#[cfg(test)]
mod tests {
    use crate::{validate::Channel, Error, Hsl};

    #[test]
    fn from_values() {
        let hsl =
            Hsl::from_values(&["230".into(), "35%".into(), "0.2".into(), "0.89".into()]).unwrap();
        assert_eq!(hsl, Hsl::new(230, 0.35, 0.2, 0.89));
    }

    #[test]
    fn hue_out_of_range() {
        let err = Hsl::new(361, 0.5, 0.5, 1.0).validated().unwrap_err();
        assert!(matches!(
            err,
            Error::ChannelOutOfRange {
                channel: Channel::Hue,
                ..
            }
        ));
    }
}
