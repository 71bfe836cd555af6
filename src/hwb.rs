//! Model a color with the HWB notation.

use crate::{
    color::{HasSpace, Space},
    Component,
};

spectrum_macros::gen_model! {
    /// A color specified with the HWB notation.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Hwb {
        /// The hue of the color in whole degrees, [0, 360].
        hue: u16,
        /// The whiteness of the color, [0, 1].
        whiteness: Component,
        /// The blackness of the color, [0, 1].
        blackness: Component,
    }
}

impl HasSpace for Hwb {
    const SPACE: Space = Space::Hwb;
}
