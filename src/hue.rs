//! The hue/chroma kernel shared by every RGB to HSL, HSV, and HSI conversion.
//!
//! If you tilt the RGB cube onto its black-white diagonal and project it onto a plane, you get a
//! hexagon. The equivalent of radius on that hexagon is the largest channel minus the smallest,
//! which is called chroma here, and the angle around it is hue. Adding a constant to every channel
//! just travels up and down the diagonal, so neither changes. More info:
//! <https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation>

use coord::Coord;

/// The intermediate values every hue-based model is derived from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HueChroma {
    /// The smallest of the three channels.
    pub cmin: f64,
    /// The largest of the three channels.
    pub cmax: f64,
    /// `cmax - cmin`. Zero for any gray.
    pub chroma: f64,
    /// The hue in degrees, in `[0, 360)`. Gray has no real hue, and gets 0.
    pub hue: f64,
}

impl HueChroma {
    /// Computes the kernel from RGB channels in `[0, 1]`.
    /// # Example
    /// ```
    /// # use decolmor::prelude::*;
    /// # use decolmor::hue::HueChroma;
    /// let kernel = HueChroma::from_unit(RGBColor::new(102, 255, 204).to_unit());
    /// assert!((kernel.chroma - 0.6).abs() <= 1e-12);
    /// assert!((kernel.hue - 160.).abs() <= 1e-9);
    /// ```
    pub fn from_unit(rgb: Coord) -> HueChroma {
        let cmax = rgb.max();
        let cmin = rgb.min();
        let chroma = cmax - cmin;

        // hue is the position along the hexagon's perimeter, treated as degrees
        let sector = if chroma == 0. {
            0.
        } else if cmax == rgb.x {
            // red sector: adding green moves up the hexagon, adding blue moves down
            ((rgb.y - rgb.z) / chroma).rem_euclid(6.)
        } else if cmax == rgb.y {
            (rgb.z - rgb.x) / chroma + 2.
        } else {
            (rgb.x - rgb.y) / chroma + 4.
        };
        let hue = sector * 60.;

        HueChroma {
            cmin,
            cmax,
            chroma,
            hue: if hue < 0. { hue + 360. } else { hue },
        }
    }
}
