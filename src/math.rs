//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate between `a` and `b` using `t` as the progress
/// between them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round a component to the nearest non-negative integer. Halves round away
/// from zero, which is up for every value we deal with.
pub fn quantize(value: Component) -> u32 {
    value.round().max(0.0) as u32
}

/// Round a normalized component to a whole percentage.
pub fn percent(value: Component) -> u32 {
    quantize(value * 100.0)
}
