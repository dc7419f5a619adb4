//! Rounding policy. HSL, HSV, HSI, and CMYK channels come out of their converters rounded to a
//! number of decimal places; RGB and hex output is always whole. Alpha is never rounded by a
//! conversion, with one exception: the hex decoder turns an alpha byte into a fraction, and that
//! fraction is rounded to its own, separate precision.
//!
//! There is no global setting. A [`Rounding`] value is built once and handed to whoever needs it:
//! the free functions take their precision as an argument, and
//! [`Converter`](../converter/struct.Converter.html) carries a `Rounding` inside it.

/// The default number of decimal places for HSL, HSV, HSI, and CMYK output. One place is enough
/// for RGB to HSL, HSV, or CMYK and back to be lossless.
pub const DEFAULT_PRECISION: u32 = 1;

/// The default number of decimal places for an alpha fraction decoded from hex.
pub const DEFAULT_ALPHA_PRECISION: u32 = 3;

// past this many places an f64 has no digits left to round
const MAX_PRECISION: u32 = 15;

/// Rounds `value` to `digits` decimal places, halfway cases away from zero.
/// # Example
/// ```
/// # use decolmor::rounding::round_to;
/// assert_eq!(round_to(33.333333, 1), 33.3);
/// assert_eq!(round_to(0.25, 1), 0.3);
/// assert_eq!(round_to(59.5, 0), 60.);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if digits > MAX_PRECISION {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// The precision settings for a family of conversions.
///
/// # Example
/// ```
/// # use decolmor::rounding::Rounding;
/// let rounding = Rounding::default();
/// assert_eq!((rounding.hsx, rounding.alpha), (1, 3));
/// let finer = Rounding{hsx: 2, ..Rounding::default()};
/// assert_eq!(finer.alpha, 3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rounding {
    /// Decimal places for HSL, HSV, HSI, and CMYK channels.
    pub hsx: u32,
    /// Decimal places for an alpha fraction decoded from hex.
    pub alpha: u32,
}

impl Default for Rounding {
    fn default() -> Rounding {
        Rounding {
            hsx: DEFAULT_PRECISION,
            alpha: DEFAULT_ALPHA_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::ApproxEqUlps;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(70.0, 1), 70.0);
        assert_eq!(round_to(98.039215, 1), 98.0);
        assert_eq!(round_to(98.039215, 2), 98.04);
        assert_eq!(round_to(359.96, 1), 360.0);
        assert_eq!(round_to(0.50196, 3), 0.502);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_excess_precision_is_a_no_op() {
        let third = 1. / 3.;
        assert_eq!(round_to(third, 40), third);
        assert!(round_to(third, 15).approx_eq_ulps(&third, 64));
    }
}
