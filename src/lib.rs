//! Decolmor converts colors between six representations: hexadecimal strings, RGB, HSL, HSV (also
//! known as HSB), HSI, and CMYK. Any of them may carry a trailing alpha channel, which is passed
//! through every conversion exactly as it came in. The library is nothing but arithmetic: every
//! conversion is a pure function, and the only configuration is how many decimal places the
//! floating-point models are rounded to.
//!
//! Rounding matters more than it might seem. RGB channels are integers, so going from RGB to HSL
//! and back only returns the original color if HSL kept enough precision. One decimal place (the
//! default) is enough for HSL, HSV, and CMYK; HSI needs two. With zero decimal places the round
//! trip can drift by a few units per channel.
//!
//! ```
//! # use decolmor::prelude::*;
//! # use decolmor::direct::{rgb_to_hsl, hsl_to_rgb};
//! let rgb = RGBColor::new(102, 255, 204);
//! let hsl = rgb_to_hsl(rgb, 1);
//! assert_eq!(hsl.color(), &HSLColor::new(160.0, 100.0, 70.0));
//! assert_eq!(hsl_to_rgb(hsl).unwrap(), Channels::Plain(rgb));
//! ```
//!
//! The free functions in [`direct`], [`sector`], [`cross`], [`cmyk`], [`hex`] and [`compose`] take
//! their precision as an argument. [`converter::Converter`] wraps all of them behind one immutable
//! configuration value.

#![doc(html_root_url = "https://docs.rs/decolmor/1.0.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate float_cmp;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod bound;
pub mod cmyk;
pub mod color;
pub mod colors;
pub mod compose;
pub mod converter;
pub mod coord;
pub mod cross;
pub mod direct;
pub mod error;
pub mod generate;
pub mod hex;
pub mod hue;
pub mod prelude;
pub mod rounding;
pub mod sector;
