//! Configuration shared by every picker: default dimensions, timings and the
//! options a host passes when creating a [`ColorPicker`](crate::ColorPicker).

use std::time::Duration;

use crate::{Cmyk, ColorState, Rgb, Size};

/// Width and height of the palette surface in pixels.
pub const PALETTE_SIZE: i32 = 240;

/// Half the size of the palette marker in pixels. The marker position is its
/// top-left corner, so its center is this far in on both axes.
pub const MARKER_HALF_SIZE: i32 = 10;

/// Pointer moves during a drag are coalesced so that at most one is applied
/// per window.
pub const DRAG_THROTTLE: Duration = Duration::from_millis(10);

/// The alpha percentage of a fully opaque color. Hex output omits the alpha
/// byte for this value.
pub const OPAQUE: u8 = 100;

/// Which group of text fields the host shows next to the HEX input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Red, green and blue inputs.
    #[default]
    Rgb,
    /// Cyan, magenta, yellow and black inputs, in addition to RGB.
    Cmyk,
}

/// The color a picker starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Initial {
    /// Start from RGB channels.
    Rgb {
        /// The starting color.
        rgb: Rgb,
        /// The starting alpha percentage, opaque if missing.
        alpha: Option<u8>,
    },
    /// Start from CMYK inks.
    Cmyk {
        /// The starting color.
        cmyk: Cmyk,
        /// The starting alpha percentage, opaque if missing.
        alpha: Option<u8>,
    },
}

impl Default for Initial {
    fn default() -> Self {
        Self::Rgb {
            rgb: Rgb::RED,
            alpha: None,
        }
    }
}

/// Options used to create a picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerOptions {
    /// The starting color.
    pub initial: Initial,
    /// The text fields on display.
    pub mode: Mode,
    /// Whether the alpha channel exists at all.
    pub transparency: bool,
    /// Size of the palette surface.
    pub palette: Size,
    /// Half the size of the palette marker.
    pub marker_half: i32,
    /// Coalescing window for pointer moves while dragging.
    pub throttle: Duration,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            initial: Initial::default(),
            mode: Mode::default(),
            transparency: false,
            palette: Size::new(PALETTE_SIZE, PALETTE_SIZE),
            marker_half: MARKER_HALF_SIZE,
            throttle: DRAG_THROTTLE,
        }
    }
}

impl PickerOptions {
    /// Start from RGB channels.
    pub fn with_rgb(mut self, rgb: Rgb, alpha: Option<u8>) -> Self {
        self.initial = Initial::Rgb { rgb, alpha };
        self
    }

    /// Start from CMYK inks.
    pub fn with_cmyk(mut self, cmyk: Cmyk, alpha: Option<u8>) -> Self {
        self.initial = Initial::Cmyk { cmyk, alpha };
        self
    }

    /// Select the text fields on display.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable the alpha channel.
    pub fn with_transparency(mut self, transparency: bool) -> Self {
        self.transparency = transparency;
        self
    }

    /// Set the palette size.
    pub fn with_palette(mut self, palette: Size) -> Self {
        self.palette = palette;
        self
    }

    /// Set half the marker size.
    pub fn with_marker_half(mut self, marker_half: i32) -> Self {
        self.marker_half = marker_half;
        self
    }

    /// Set the coalescing window for pointer moves.
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Build the state the picker starts with. Without transparency any
    /// initial alpha is dropped; with it a missing alpha means opaque.
    pub fn initial_state(&self) -> ColorState {
        let alpha = |alpha: Option<u8>| {
            self.transparency
                .then(|| alpha.unwrap_or(OPAQUE).min(OPAQUE))
        };

        match self.initial {
            Initial::Rgb { rgb, alpha: a } => ColorState::from_rgb(rgb, alpha(a)),
            Initial::Cmyk { cmyk, alpha: a } => ColorState::from_cmyk(cmyk, alpha(a)),
        }
    }
}
