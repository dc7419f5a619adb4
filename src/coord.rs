//! This module contains a struct, [`Coord`](coord::Coord), that holds three RGB channels scaled
//! into the unit interval. All of the hue-based models do their math here: they scale RGB down,
//! work with chroma and offsets, and scale back up to bytes at the very end.

use std::ops::{Add, Div, Mul};

use num;

/// A point in the unit RGB cube. `x`, `y`, and `z` are red, green, and blue, in that order. Values
/// may stray outside `[0, 1]` in the middle of a conversion, which is exactly what the HSI
/// correction step looks for.
///
/// # Examples
/// ```
/// # use decolmor::coord::Coord;
/// let point = Coord{x: 0.5, y: 0.25, z: 0.};
/// // offsetting every channel at once
/// let lifted = point + Coord::splat(0.25);  // the point (0.75, 0.5, 0.25)
/// assert_eq!(lifted.max(), 0.75);
/// // there is no multiplication of two points: only scaling
/// let scaled = point * 2.;  // the point (1, 0.5, 0)
/// assert_eq!(scaled / 2., point);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The red channel.
    pub x: f64,
    /// The green channel.
    pub y: f64,
    /// The blue channel.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Mul<f64> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f64) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

// callers only ever divide by a channel maximum greater than 1
impl Div<f64> for Coord {
    type Output = Coord;
    fn div(self, rhs: f64) -> Coord {
        Coord {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Coord {
    /// The same value on all three axes.
    pub fn splat(value: f64) -> Coord {
        Coord {
            x: value,
            y: value,
            z: value,
        }
    }

    /// The largest of the three channels.
    pub fn max(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// The smallest of the three channels.
    pub fn min(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Scales each channel to 0-255 and rounds half away from zero. Anything that floating-point
    /// error pushed just outside the cube is clamped back in.
    /// # Example
    /// ```
    /// # use decolmor::coord::Coord;
    /// let point = Coord{x: 0.4, y: 1.0000000001, z: -1e-12};
    /// assert_eq!(point.to_bytes(), [102, 255, 0]);
    /// ```
    pub fn to_bytes(&self) -> [u8; 3] {
        let byte = |v: f64| num::clamp((v * 255.).round(), 0., 255.) as u8;
        [byte(self.x), byte(self.y), byte(self.z)]
    }

    /// The inverse of [`to_bytes`](Coord::to_bytes), without the rounding.
    pub fn from_bytes(bytes: [u8; 3]) -> Coord {
        Coord {
            x: f64::from(bytes[0]) / 255.,
            y: f64::from(bytes[1]) / 255.,
            z: f64::from(bytes[2]) / 255.,
        }
    }
}
