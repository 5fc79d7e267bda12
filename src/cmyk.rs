//! Model a color with cyan, magenta, yellow and black ink percentages.

tincture_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and black (key) ink, each
    /// a percentage.
    pub struct Cmyk {
        /// The cyan ink.
        #[max(100)]
        cyan: u8,
        /// The magenta ink.
        #[max(100)]
        magenta: u8,
        /// The yellow ink.
        #[max(100)]
        yellow: u8,
        /// The black (key) ink.
        #[max(100)]
        black: u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_channels() {
        let cmyk = Cmyk::new(10, 20, 30, 140);
        assert_eq!(cmyk.channels(), [10, 20, 30, 100]);
        assert_eq!(CmykChannel::ALL.len(), 4);
        assert_eq!("black".parse(), Ok(CmykChannel::Black));
        assert_eq!(cmyk.with(CmykChannel::Cyan, 0).cyan, 0);
    }
}
