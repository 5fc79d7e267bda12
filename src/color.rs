//! A [`ColorState`] holds one logical color in every representation the
//! picker shows.

use crate::{config::OPAQUE, Cmyk, Hsl, Hsv, Rgb};

/// A 64-bit floating point value used for all intermediate conversion math.
pub type Component = f64;

/// Three normalized components, usually in the `0.0..=1.0` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The union of all representations of one color.
///
/// The RGB channels are the reference; HSV, CMYK and HEX are derived from
/// them. The only exceptions are the hue, which keeps the slider value when
/// the palette is resampled, and CMYK, which keeps the value that was typed
/// when the color was entered in CMYK terms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorState {
    /// Hue, saturation and value.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hsv: Hsv,
    /// Red, green and blue channels.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub rgb: Rgb,
    /// Opacity as a percentage, or `None` when transparency is disabled.
    pub alpha: Option<u8>,
    /// Cyan, magenta, yellow and black channels.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub cmyk: Cmyk,
    /// Canonical `#rrggbb` or `#rrggbbaa` encoding.
    pub hex: String,
}

impl ColorState {
    /// Derive a full state from RGB channels and an optional alpha.
    pub fn from_rgb(rgb: Rgb, alpha: Option<u8>) -> Self {
        let alpha = alpha.map(|a| a.min(OPAQUE));

        Self {
            hsv: rgb.to_hsv(),
            rgb,
            alpha,
            cmyk: rgb.to_cmyk(),
            hex: rgb.to_hex(alpha),
        }
    }

    /// Derive a full state from CMYK channels and an optional alpha. The
    /// given CMYK channels are kept as they are, so they do not drift through
    /// the RGB round trip.
    pub fn from_cmyk(cmyk: Cmyk, alpha: Option<u8>) -> Self {
        Self {
            cmyk,
            ..Self::from_rgb(cmyk.to_rgb(), alpha)
        }
    }

    /// The fully saturated color for the current hue, as shown on the hue
    /// slider thumb.
    pub fn hue_color(&self) -> Rgb {
        Hsl::spectrum(self.hsv.hue).to_rgb()
    }

    /// Check that all representations describe the same color: CMYK within
    /// two units per RGB channel and HEX exactly. Whole-percent inks cannot
    /// always land within one unit of an 8-bit channel.
    ///
    /// HSV is not checked. The hue slider and the palette marker set hue,
    /// saturation and value on their own, while the RGB channels come from
    /// the sampled pixel. Even a state derived from RGB alone only maps back
    /// within three units per channel through whole degrees and percentages.
    pub fn is_consistent(&self) -> bool {
        let from_cmyk = self.cmyk.to_rgb();
        let near = self
            .rgb
            .channels()
            .into_iter()
            .zip(from_cmyk.channels())
            .all(|(a, b)| a.abs_diff(b) <= 2);

        near && self.hex == self.rgb.to_hex(self.alpha)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::from_rgb(Rgb::RED, None)
    }
}
