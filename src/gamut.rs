//! Gamut normalization for the HWB notation.
//! <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
//!
//! When whiteness and blackness add up to 1 or more the color is a gray.
//! Both are rescaled so that their sum is 1 (up to rounding) before the
//! color is used.

use crate::{color::Component, math::round2, Hwb};

/// The outcome of [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamut {
    /// The whiteness, rescaled if needed.
    pub whiteness: Component,
    /// The blackness, rescaled if needed.
    pub blackness: Component,
    /// Whether the pair had to be rescaled.
    pub normalized: bool,
}

/// Returns true if a whiteness and blackness pair is inside the gamut, i.e.
/// it sums to less than 1.
pub fn in_gamut(whiteness: Component, blackness: Component) -> bool {
    whiteness + blackness < 1.0
}

/// Rescale a whiteness and blackness pair that sums to 1 or more by
/// `1 / (whiteness + blackness)`, rounding each to 2 decimals. Pairs inside
/// the gamut are returned unchanged.
pub fn normalize(whiteness: Component, blackness: Component) -> Gamut {
    if in_gamut(whiteness, blackness) {
        return Gamut {
            whiteness,
            blackness,
            normalized: false,
        };
    }

    let ratio = 1.0 / (whiteness + blackness);

    Gamut {
        whiteness: round2(whiteness * ratio),
        blackness: round2(blackness * ratio),
        normalized: true,
    }
}

impl Hwb {
    /// Returns true if whiteness and blackness sum to less than 1.
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.whiteness, self.blackness)
    }

    /// Normalize whiteness and blackness, see [`normalize`]. Returns the
    /// record and whether it changed. A warning is logged when it did, as
    /// the resulting color will be a gray.
    pub fn normalize(&self) -> (Self, bool) {
        // Local optimization: most colors are in gamut.
        if self.in_gamut() {
            return (*self, false);
        }

        let Gamut {
            whiteness,
            blackness,
            ..
        } = normalize(self.whiteness, self.blackness);

        log::warn!(
            target: "spectrum::gamut",
            "whiteness {} and blackness {} add up to 1 or more, normalized to {} and {}",
            self.whiteness,
            self.blackness,
            whiteness,
            blackness,
        );

        (
            Self {
                whiteness,
                blackness,
                ..*self
            },
            true,
        )
    }
}
