//! Model a color with the HSL notation.

tincture_macros::gen_model! {
    /// A color specified with hue (degrees), saturation and lightness
    /// (percentages).
    pub struct Hsl {
        /// The hue in degrees, `0..=360`.
        #[max(360)]
        hue: u16,
        /// The saturation in percent.
        #[max(100)]
        saturation: u8,
        /// The lightness in percent.
        #[max(100)]
        lightness: u8,
    }
}

impl Hsl {
    /// The fully saturated color of a hue, `hsl(hue, 100%, 50%)`. This is
    /// what the hue slider and the right edge of the palette show.
    pub fn spectrum(hue: u16) -> Self {
        Self::new(hue, 100, 50)
    }
}
