//! Model a color with 8-bit red, green and blue channels.

use crate::color::{HasSpace, Space};

spectrum_macros::gen_model! {
    /// A color specified with red, green and blue channels.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

#[cfg(test)]
mod tests {
    use crate::{validate::Value, Components, ErrorKind, Rgb};

    #[test]
    fn from_values() {
        let rgb = Rgb::from_values(&[100.into(), 150.into(), 200.into()]).unwrap();
        assert_eq!(rgb, Rgb::new(100, 150, 200, 1.0));

        let rgb =
            Rgb::from_values(&["100".into(), "150".into(), "200".into(), "50%".into()]).unwrap();
        assert_eq!(rgb.alpha, 0.5);
    }

    #[test]
    fn wrong_length() {
        let err = Rgb::from_values(&[Value::from(1), Value::from(2)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn validated_checks_alpha() {
        assert!(Rgb::new(1, 2, 3, 0.5).validated().is_ok());
        assert_eq!(
            Rgb::new(1, 2, 3, 2.0).validated().unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn to_components() {
        let components: Components = Rgb::new(1, 2, 3, 1.0).into();
        assert_eq!(components, Components(1.0, 2.0, 3.0));
    }
}
