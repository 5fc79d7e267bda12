//! tincture provides the color model behind a color-picker widget: RGB, HSV,
//! CMYK and HEX representations, a saturation/value palette, a hue slider and
//! an optional alpha channel, all kept in sync as the user edits any one of
//! them.
//!
//! Rendering is left to the host. The host forwards user input to a
//! [`ColorPicker`] and reads the updated [`ColorState`] back.
//!
//! ```rust
//! use tincture::{ColorPicker, Field, PickerOptions};
//!
//! let mut picker = ColorPicker::new(PickerOptions::default());
//! picker.input(Field::Hex, "#F00").unwrap();
//! assert_eq!(picker.state().rgb.red, 255);
//! assert_eq!(picker.state().cmyk.magenta, 100);
//! ```

#![deny(missing_docs)]

mod cmyk;
mod color;
pub mod config;
mod convert;
mod event;
mod hex;
mod hsl;
mod hsv;
mod input;
mod math;
pub mod palette;
mod picker;
mod rgb;
mod store;
mod throttle;


pub use cmyk::{Cmyk, CmykChannel};
pub use color::{ColorState, Component, Components};
pub use config::{Initial, Mode, PickerOptions};
pub use event::{Hub, PointerEvent, PointerKind, Subscription};
pub use hex::{Hex, ParseHexError};
pub use hsl::{Hsl, HslChannel};
pub use hsv::{Hsv, HsvChannel};
pub use input::{Field, InputError, UnknownName};
pub use palette::{Bitmap, Marker, Point, Size, Surface};
pub use picker::{Changed, ColorPicker, Update};
pub use rgb::{Rgb, RgbChannel};
pub use store::{Snapshots, Store};
pub use throttle::Throttle;
