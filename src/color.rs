//! This module defines the [`Color`] trait shared by every color model in the crate, and
//! [`Channels`], which records whether a color carries an alpha channel. A color is an ordered
//! sequence of numeric channels: the order is the contract, so every model can be flattened into
//! a `Vec<f64>` and rebuilt from a slice. Alpha, when present, is always the trailing element, and
//! no conversion ever rounds or rescales it.

use bound::Bound;
use error::ConversionError;

/// A color model described by a fixed number of ordered numeric channels. The channel names and
/// valid ranges come from [`Bound`], so the arity of a model is the length of its bounds table.
pub trait Color: Bound + Copy {
    /// The number of channels, not counting alpha.
    fn arity() -> usize {
        Self::bounds().len()
    }
    /// The channels in order, as floating-point numbers.
    fn components(&self) -> Vec<f64>;
    /// Builds the color from exactly [`arity`](Color::arity) values, without validating them.
    /// Callers are expected to have passed the values through [`Bound::check_components`].
    fn from_components(values: &[f64]) -> Self;
}

/// Which scale an RGB alpha channel is expressed on. Only the hex codec and the RGB generator care
/// about this: every other conversion copies alpha verbatim, whatever its scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlphaUnit {
    /// Alpha ranges from 0 to 1.
    Fraction,
    /// Alpha ranges from 0 to 255, like the other RGB channels.
    Byte,
}

impl Default for AlphaUnit {
    fn default() -> AlphaUnit {
        AlphaUnit::Fraction
    }
}

/// A color with or without a trailing alpha channel. Converters take and return `Channels` and
/// re-attach the alpha of their input to their output, so alpha survives any chain of conversions
/// bit for bit.
///
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// let opaque: Channels<HSLColor> = HSLColor::new(150., 50., 40.).into();
/// let translucent: Channels<HSLColor> = (HSLColor::new(150., 50., 40.), 0.25).into();
/// assert_eq!(opaque.alpha(), None);
/// assert_eq!(translucent.alpha(), Some(0.25));
/// assert_eq!(translucent.to_vec(), vec![150., 50., 40., 0.25]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Channels<T> {
    /// A color with no alpha channel.
    Plain(T),
    /// A color followed by an alpha value.
    WithAlpha(T, f64),
}

impl<T> Channels<T> {
    /// The color without its alpha.
    pub fn color(&self) -> &T {
        match *self {
            Channels::Plain(ref c) | Channels::WithAlpha(ref c, _) => c,
        }
    }

    /// Consumes `self`, dropping the alpha.
    pub fn into_color(self) -> T {
        match self {
            Channels::Plain(c) | Channels::WithAlpha(c, _) => c,
        }
    }

    /// The alpha value, if there is one.
    pub fn alpha(&self) -> Option<f64> {
        match *self {
            Channels::Plain(_) => None,
            Channels::WithAlpha(_, a) => Some(a),
        }
    }

    /// Replaces the color while keeping the alpha exactly as it was.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Channels<U> {
        match self {
            Channels::Plain(c) => Channels::Plain(f(c)),
            Channels::WithAlpha(c, a) => Channels::WithAlpha(f(c), a),
        }
    }

    /// Like [`map`](Channels::map), for conversions that can fail.
    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Channels<U>, E> {
        Ok(match self {
            Channels::Plain(c) => Channels::Plain(f(c)?),
            Channels::WithAlpha(c, a) => Channels::WithAlpha(f(c)?, a),
        })
    }
}

impl<T: Color> Channels<T> {
    /// Builds a color from its ordered channels. Whether alpha is present is decided by length
    /// alone: [`arity`](Color::arity) values means no alpha, one more means the last value is alpha.
    /// The color channels are checked against the model's bounds; alpha is not checked.
    /// # Errors
    /// `ConversionError::Arity` for any other length, `ConversionError::Domain` for a channel
    /// outside its range.
    pub fn from_slice(values: &[f64]) -> Result<Channels<T>, ConversionError> {
        let arity = T::arity();
        if values.len() != arity && values.len() != arity + 1 {
            return Err(ConversionError::Arity {
                expected: arity,
                found: values.len(),
            });
        }
        let (color, alpha) = values.split_at(arity);
        T::check_components(color)?;
        let color = T::from_components(color);
        Ok(match alpha.first() {
            Some(&a) => Channels::WithAlpha(color, a),
            None => Channels::Plain(color),
        })
    }

    /// The ordered channels, with alpha last if present.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut values = self.color().components();
        values.extend(self.alpha());
        values
    }
}

impl<T> From<T> for Channels<T> {
    fn from(color: T) -> Channels<T> {
        Channels::Plain(color)
    }
}

impl<T> From<(T, f64)> for Channels<T> {
    fn from((color, alpha): (T, f64)) -> Channels<T> {
        Channels::WithAlpha(color, alpha)
    }
}
