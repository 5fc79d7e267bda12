//! The saturation/value palette: a square of shades of one hue that gets
//! lighter to the left and darker to the bottom, and the marker that selects
//! a point on it.

use euclid::default::{Point2D, Size2D, Vector2D};

use crate::{math::lerp, Component, Hsl, Hsv, Rgb};

/// A pixel position on the palette.
pub type Point = Point2D<i32>;

/// The dimensions of the palette in pixels.
pub type Size = Size2D<i32>;

/// A drawing surface that shows the palette for a hue and can read back the
/// color of a single pixel.
pub trait Surface {
    /// The dimensions of the surface.
    fn size(&self) -> Size;

    /// Repaint the whole surface with the shades of `hue`.
    fn paint(&mut self, hue: u16);

    /// Read back the color at a pixel. Positions outside the surface are
    /// clamped to the nearest edge.
    fn sample(&self, at: Point) -> Rgb;
}

/// Where along a gradient from `start` to `end` the center of pixel `i`
/// lies.
fn progress(i: i32, start: i32, end: i32) -> Component {
    let span = Component::from((end - start).max(1));
    ((Component::from(i) + 0.5 - Component::from(start)) / span).clamp(0.0, 1.0)
}

/// The color of one palette pixel for the given spectrum color.
///
/// Rows run from white on the left to `hue_color` on the right, with both
/// gradients starting one pixel in from the edge. Black is then blended in
/// from fully transparent at the top to opaque at the bottom. The last row
/// is never painted and reads as black.
pub fn shade(size: Size, hue_color: Rgb, at: Point) -> Rgb {
    if at.y >= size.height - 1 {
        return Rgb::BLACK;
    }

    let tx = progress(at.x, 1, size.width - 1);
    let ty = progress(at.y, 1, size.height - 1);

    let channel = |c: u8| {
        let base = lerp(255.0, Component::from(c), tx).round();
        (base * (1.0 - ty)).round() as u8
    };

    Rgb::new(
        channel(hue_color.red),
        channel(hue_color.green),
        channel(hue_color.blue),
    )
}

/// The number of pixels in a surface, counted in `usize` so large palettes
/// do not overflow. Negative dimensions count as zero.
fn area(size: Size) -> usize {
    size.width.max(0) as usize * size.height.max(0) as usize
}

/// An in-memory [`Surface`].
#[derive(Clone, Debug)]
pub struct Bitmap {
    size: Size,
    pixels: Vec<Rgb>,
}

impl Bitmap {
    /// Create a blank (black) bitmap.
    pub fn new(size: Size) -> Self {
        let size = size.max(Size::new(1, 1));
        Self {
            size,
            pixels: vec![Rgb::BLACK; area(size)],
        }
    }

    fn index(&self, at: Point) -> usize {
        let x = at.x.clamp(0, self.size.width - 1) as usize;
        let y = at.y.clamp(0, self.size.height - 1) as usize;
        y * self.size.width as usize + x
    }
}

impl Surface for Bitmap {
    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, hue: u16) {
        let hue_color = Hsl::spectrum(hue).to_rgb();
        let size = self.size;
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            let i = i as i32;
            *pixel = shade(size, hue_color, Point::new(i % size.width, i / size.width));
        }
    }

    fn sample(&self, at: Point) -> Rgb {
        self.pixels[self.index(at)]
    }
}

impl From<Size> for Bitmap {
    fn from(size: Size) -> Self {
        Self::new(size)
    }
}

/// The palette marker. Its position is the top-left corner of a square
/// `2 * half` pixels wide, so the selected pixel is at its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Top-left corner, relative to the palette.
    pub position: Point,
    /// Half the marker size.
    pub half: i32,
}

impl Marker {
    /// Center the marker on a pointer position. The center is kept within
    /// the palette, edges included.
    pub fn from_pointer(pointer: Point, size: Size, half: i32) -> Self {
        let clamp = |v: i32, len: i32| (v - half).clamp(-half, len - half);
        Self {
            position: Point::new(clamp(pointer.x, size.width), clamp(pointer.y, size.height)),
            half,
        }
    }

    /// Place the marker where a color with the given saturation and value
    /// lies.
    pub fn from_hsv(hsv: Hsv, size: Size, half: i32) -> Self {
        let saturation = i32::from(hsv.saturation);
        let value = i32::from(hsv.value);
        Self {
            position: Point::new(
                saturation * size.width / 100 - half,
                size.height * (100 - value) / 100 - half,
            ),
            half,
        }
    }

    /// The center of the marker.
    pub fn center(&self) -> Point {
        self.position + Vector2D::new(self.half, self.half)
    }

    /// The pixel to sample for the marker. A center on the far edge is
    /// pulled back onto the last pixel.
    pub fn sample_point(&self, size: Size) -> Point {
        let center = self.center();
        let pull = |v: i32, len: i32| if v == len { v - 1 } else { v };
        Point::new(pull(center.x, size.width), pull(center.y, size.height))
    }

    /// The saturation and value the marker position stands for.
    pub fn saturation_value(&self, size: Size) -> (u8, u8) {
        let center = self.center();
        let ratio = |v: i32, len: i32| {
            (Component::from(v) * 100.0 / Component::from(len.max(1))).clamp(0.0, 100.0)
        };
        (
            ratio(center.x, size.width).round() as u8,
            (100.0 - ratio(center.y, size.height)).round() as u8,
        )
    }
}
