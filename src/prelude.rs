//! This module brings the most common Decolmor functionality under a single namespace, to prevent
//! excessive imports. It includes every trait, every color model, [`Channels`] and
//! [`AlphaUnit`], the rounding configuration, [`Converter`], and [`ConversionError`]. The
//! conversion functions themselves are not included, since several modules export functions of
//! the same shape: import them from [`direct`](../direct/index.html),
//! [`sector`](../sector/index.html), and the rest, or go through a [`Converter`].

pub use bound::Bound;
pub use color::{AlphaUnit, Channels, Color};
pub use colors::{CMYKColor, HSBColor, HSIColor, HSLColor, HSVColor, RGBColor};
pub use converter::Converter;
pub use error::ConversionError;
pub use rounding::Rounding;
