//! This module contains one file per color model. Each defines a plain struct for the model's
//! channels, its channel bounds, and how it flattens to and from an ordered list of numbers. The
//! conversions themselves live in [`direct`](../direct/index.html),
//! [`sector`](../sector/index.html), [`cross`](../cross/index.html), and
//! [`cmyk`](../cmyk/index.html). For convenience, each type is imported into this module's
//! namespace directly.
pub mod cmykcolor;
pub mod hsicolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::cmykcolor::CMYKColor;
pub use self::hsicolor::HSIColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::{HSBColor, HSVColor};
pub use self::rgbcolor::RGBColor;
