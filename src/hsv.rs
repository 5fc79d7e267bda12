//! Model a color with the HSV notation.

tincture_macros::gen_model! {
    /// A color specified with hue (degrees), saturation and value
    /// (percentages). Always derived from another representation.
    pub struct Hsv {
        /// The hue in degrees, `0..=360`.
        #[max(360)]
        hue: u16,
        /// The saturation in percent.
        #[max(100)]
        saturation: u8,
        /// The value (brightness) in percent.
        #[max(100)]
        value: u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_every_channel() {
        let hsv = Hsv::new(720, 101, 255);
        assert_eq!(hsv, Hsv::new(360, 100, 100));
        assert_eq!(HsvChannel::Hue.max(), 360);
        assert_eq!(HsvChannel::Value.max(), 100);
    }
}
