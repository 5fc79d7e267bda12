//! Conversions between the color models. Every conversion works on
//! normalized components and rounds to the nearest integer of the target
//! model at the end, so chained conversions may drift slightly.
//!
//! ```rust
//! use tincture::Rgb;
//! let chocolate = Rgb::new(210, 105, 30);
//! assert_eq!(chocolate.to_hex(None), "#d2691e");
//! assert_eq!(chocolate.to_cmyk().to_rgb(), Rgb::new(209, 105, 29));
//! ```

use crate::{
    color::{Component, Components},
    hex::{Hex, ParseHexError},
    math::{percent, quantize},
    Cmyk, Hsl, Hsv, Rgb,
};

impl Rgb {
    /// Return the channels normalized to `0.0..=1.0`.
    pub fn normalized(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
        .map(|c| c / 255.0)
    }

    /// Create a color from normalized components, rounding to the nearest
    /// channel value.
    pub fn from_normalized(from: &Components) -> Self {
        let Components(red, green, blue) = from.map(|c| c * 255.0);
        Self::from([quantize(red), quantize(green), quantize(blue)])
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&self.normalized());
        Hsv::from([quantize(hue * 360.0), percent(saturation), percent(value)])
    }

    /// Convert to CMYK ink percentages. Pure black has no defined cyan,
    /// magenta or yellow; they are reported as zero.
    pub fn to_cmyk(&self) -> Cmyk {
        let (Components(cyan, magenta, yellow), black) = util::rgb_to_cmyk(&self.normalized());
        Cmyk::from([
            percent(cyan),
            percent(magenta),
            percent(yellow),
            percent(black),
        ])
    }

    /// Encode as `#rrggbb`, appending the alpha byte when `alpha` is present
    /// and not fully opaque.
    pub fn to_hex(&self, alpha: Option<u8>) -> String {
        Hex::new(*self, alpha).to_string()
    }

    /// Decode a 3, 6 or 8 digit hex string, returning the color and the alpha
    /// percentage if one was encoded.
    pub fn from_hex(hex: &str) -> Result<(Self, Option<u8>), ParseHexError> {
        let Hex { rgb, alpha } = Hex::parse(hex)?;
        Ok((rgb, alpha))
    }
}

impl Hsv {
    /// Convert from the HSV notation to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(&util::hsv_to_rgb(&Components(
            self.hue as Component,
            self.saturation as Component / 100.0,
            self.value as Component / 100.0,
        )))
    }
}

impl Hsl {
    /// Convert from the HSL notation to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(&util::hsl_to_rgb(&Components(
            self.hue as Component,
            self.saturation as Component / 100.0,
            self.lightness as Component / 100.0,
        )))
    }
}

impl Cmyk {
    /// Convert ink percentages to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        let inks = Components(
            self.cyan as Component,
            self.magenta as Component,
            self.yellow as Component,
        )
        .map(|c| c / 100.0);

        Rgb::from_normalized(&util::cmyk_to_rgb(&inks, self.black as Component / 100.0))
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Convert from RGB to HSV. The hue is returned as a fraction of a full
    /// turn in `0.0..1.0`.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        // Grays have no hue and no saturation.
        if delta == 0.0 {
            return Components(0.0, 0.0, max);
        }

        let saturation = delta / max;

        let distance = |c: Component| (max - c) / 6.0 / delta + 0.5;

        let mut hue = if red == max {
            distance(blue) - distance(green)
        } else if green == max {
            1.0 / 3.0 + distance(red) - distance(blue)
        } else {
            2.0 / 3.0 + distance(green) - distance(red)
        };

        if hue < 0.0 {
            hue += 1.0;
        } else if hue >= 1.0 {
            hue -= 1.0;
        }

        Components(hue, saturation, max)
    }

    /// Convert from HSV to RGB. The hue is in degrees.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let hue = hue.rem_euclid(360.0);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }

    /// Convert from HSL to RGB. The hue is in degrees.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = hue.rem_euclid(360.0);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB to cyan, magenta and yellow inks plus black.
    pub fn rgb_to_cmyk(from: &Components) -> (Components, Component) {
        let Components(red, green, blue) = *from;

        let black = 1.0 - red.max(green).max(blue);
        let key = 1.0 - black;

        if key == 0.0 {
            return (Components(0.0, 0.0, 0.0), black);
        }

        (from.map(|c| (1.0 - c - black) / key), black)
    }

    /// Convert from inks plus black to RGB.
    pub fn cmyk_to_rgb(inks: &Components, black: Component) -> Components {
        let key = 1.0 - black;
        inks.map(|c| (1.0 - c) * key)
    }
}
