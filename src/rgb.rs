//! Model a color with 8-bit red, green and blue channels.

tincture_macros::gen_model! {
    /// A color specified with red, green and blue channels in `0..=255`.
    pub struct Rgb {
        /// The red channel.
        #[max(255)]
        red: u8,
        /// The green channel.
        #[max(255)]
        green: u8,
        /// The blue channel.
        #[max(255)]
        blue: u8,
    }
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self { red: 0, green: 0, blue: 0 };

    /// White.
    pub const WHITE: Self = Self { red: 255, green: 255, blue: 255 };

    /// Red, the starting color of the hue spectrum.
    pub const RED: Self = Self { red: 255, green: 0, blue: 0 };
}
