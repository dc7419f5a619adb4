//! This module describes the Bound trait, which states what values each channel of a color model
//! may take, and [`DomainError`], the error returned when a channel falls outside them. Hue is the
//! odd one out: it's an angle, so any finite value is accepted and folded onto the color wheel by
//! the converters. Every other channel has a closed range, and RGB channels must also be integers.

use std::error::Error;
use std::fmt;

/// The valid range of one channel of a color model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChannelRange {
    /// The channel's name, as used in error messages.
    pub name: &'static str,
    /// The smallest valid value.
    pub min: f64,
    /// The largest valid value.
    pub max: f64,
    /// Whether the value must also be a whole number.
    pub integral: bool,
}

impl ChannelRange {
    /// An angle in degrees: any finite value.
    pub const fn angle(name: &'static str) -> ChannelRange {
        ChannelRange {
            name,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            integral: false,
        }
    }

    /// A percentage from 0 to 100.
    pub const fn percent(name: &'static str) -> ChannelRange {
        ChannelRange {
            name,
            min: 0.,
            max: 100.,
            integral: false,
        }
    }

    /// An integer from 0 to 255.
    pub const fn byte(name: &'static str) -> ChannelRange {
        ChannelRange {
            name,
            min: 0.,
            max: 255.,
            integral: true,
        }
    }

    /// A fraction from 0 to 1.
    pub const fn fraction(name: &'static str) -> ChannelRange {
        ChannelRange {
            name,
            min: 0.,
            max: 1.,
            integral: false,
        }
    }

    /// Checks a single value against this range.
    pub fn check(&self, value: f64) -> Result<(), DomainError> {
        let valid = value.is_finite()
            && value >= self.min
            && value <= self.max
            && !(self.integral && value.fract() != 0.);
        if valid {
            Ok(())
        } else {
            let err = DomainError {
                channel: self.name,
                value,
                min: self.min,
                max: self.max,
                integral: self.integral,
            };
            debug!("rejected channel value: {}", err);
            Err(err)
        }
    }
}

/// A channel value outside the range its model allows. Names the offending channel and the range it
/// should have been in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DomainError {
    /// The name of the channel, like "saturation" or "red".
    pub channel: &'static str,
    /// The value that was given.
    pub value: f64,
    /// The smallest valid value.
    pub min: f64,
    /// The largest valid value.
    pub max: f64,
    /// Whether the channel only takes whole numbers.
    pub integral: bool,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.value.is_finite() {
            write!(f, "{} = {} is not a finite number", self.channel, self.value)
        } else if self.integral {
            write!(
                f,
                "{} = {} must be an integer in [{}, {}]",
                self.channel, self.value, self.min, self.max
            )
        } else {
            write!(
                f,
                "{} = {} is outside the valid range [{}, {}]",
                self.channel, self.value, self.min, self.max
            )
        }
    }
}

impl Error for DomainError {}

/// Describes a color model whose channels have explicit bounds. The order of the table is the
/// order of the channels.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// assert!(HSLColor::new(400., 50., 50.).check().is_ok());
/// let err = HSLColor::new(0., 120., 50.).check().unwrap_err();
/// assert_eq!(err.channel, "saturation");
/// assert_eq!(err.to_string(), "saturation = 120 is outside the valid range [0, 100]");
/// ```
pub trait Bound {
    /// The valid range of each channel, in channel order.
    fn bounds() -> &'static [ChannelRange];

    /// Checks each of `values` against the range in the same position. Extra values are ignored.
    fn check_components(values: &[f64]) -> Result<(), DomainError> {
        for (range, &value) in Self::bounds().iter().zip(values) {
            range.check(value)?;
        }
        Ok(())
    }

    /// Checks every channel of this color.
    fn check(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bounds() {
        let sat = ChannelRange::percent("saturation");
        assert!(sat.check(0.).is_ok());
        assert!(sat.check(100.).is_ok());
        assert!(sat.check(55.5).is_ok());
        assert_eq!(sat.check(-0.1).unwrap_err().value, -0.1);
        assert!(sat.check(100.01).is_err());
        assert!(sat.check(f64::NAN).is_err());
    }

    #[test]
    fn test_angle_bounds() {
        let hue = ChannelRange::angle("hue");
        assert!(hue.check(-725.).is_ok());
        assert!(hue.check(1e9).is_ok());
        let err = hue.check(f64::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "hue = inf is not a finite number");
    }

    #[test]
    fn test_byte_bounds() {
        let red = ChannelRange::byte("red");
        assert!(red.check(255.).is_ok());
        assert!(red.check(256.).is_err());
        let err = red.check(3.5).unwrap_err();
        assert_eq!(err.to_string(), "red = 3.5 must be an integer in [0, 255]");
    }
}
