//! spectrum provides an immutable color value that can be created from and
//! viewed as hex codes, CSS named colors, and the RGB, HSL and HWB
//! notations.
//!
//! ```rust
//! use spectrum::{Color, Space};
//!
//! let color = Color::new(Space::Hex, "#EE88AA99").unwrap();
//! assert_eq!(color.to_rgb_string(), "rgb(238 136 170 / 0.6)");
//! assert_eq!(color.to_hsl_string(), "hsl(340 74% 73% / 0.6)");
//!
//! let color = Color::parse("hsl", "180 50% 75%").unwrap();
//! assert_eq!(color.to_string(), "#9fdfdf");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
pub mod error;
pub mod gamut;
pub mod hex;
mod hsl;
mod hwb;
mod interpolate;
mod math;
pub mod named;
mod rgb;
pub mod validate;


pub use color::{Color, Component, Components, Flags, HasSpace, Space};
pub use error::{Error, ErrorKind, Result};
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use rgb::Rgb;
pub use validate::{Channel, Input, Value};
