//! Render the palette of a color picker to a PNG: the shades of a color's
//! hue, the marker where the color sits and, if a font is given, its hex
//! code.
//!
//! Usage: `swatch [hex] [output.png] [font.ttf]`

use std::error::Error;

use image::{Rgb as Pixel, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use log::{info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use rusttype::{Font, Scale};
use tincture::{palette, ColorPicker, Field, Hsl, PickerOptions, Point, Rgb, Size, Surface};

const LABEL_SCALE: f32 = 24.0;

/// A palette surface backed by an image buffer.
struct ImageSurface(RgbImage);

impl Surface for ImageSurface {
    fn size(&self) -> Size {
        Size::new(self.0.width() as i32, self.0.height() as i32)
    }

    fn paint(&mut self, hue: u16) {
        let size = self.size();
        let hue_color = Hsl::spectrum(hue).to_rgb();
        for (x, y, pixel) in self.0.enumerate_pixels_mut() {
            let Rgb { red, green, blue } =
                palette::shade(size, hue_color, Point::new(x as i32, y as i32));
            *pixel = Pixel([red, green, blue]);
        }
    }

    fn sample(&self, at: Point) -> Rgb {
        let x = at.x.clamp(0, self.0.width() as i32 - 1) as u32;
        let y = at.y.clamp(0, self.0.height() as i32 - 1) as u32;
        let Pixel([red, green, blue]) = *self.0.get_pixel(x, y);
        Rgb::new(red, green, blue)
    }
}

fn init_log(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_log(LevelFilter::Debug)?;

    let mut args = std::env::args().skip(1);
    let hex = args.next().unwrap_or_else(|| "#d2691e".to_owned());
    let output = args.next().unwrap_or_else(|| "swatch.png".to_owned());
    let font = args.next();

    let options = PickerOptions::default();
    let surface = ImageSurface(RgbImage::new(
        options.palette.width as u32,
        options.palette.height as u32,
    ));
    let mut picker: ColorPicker<ImageSurface> = ColorPicker::with_surface(surface, options);
    picker.input(Field::Hex, &hex)?;

    let state = picker.state();
    info!(
        "{} is hsv({}, {}%, {}%), cmyk({}%, {}%, {}%, {}%)",
        state.hex,
        state.hsv.hue,
        state.hsv.saturation,
        state.hsv.value,
        state.cmyk.cyan,
        state.cmyk.magenta,
        state.cmyk.yellow,
        state.cmyk.black,
    );

    let mut image = picker.surface().0.clone();

    // Dark outline on light shades, light outline on dark ones.
    let outline = if state.hsv.value > 50 {
        Pixel([0, 0, 0])
    } else {
        Pixel([255, 255, 255])
    };
    let marker = picker.marker();
    let side = (marker.half * 2) as u32;
    draw_hollow_rect_mut(
        &mut image,
        Rect::at(marker.position.x, marker.position.y).of_size(side, side),
        outline,
    );

    if let Some(path) = font {
        let font = Font::try_from_vec(std::fs::read(&path)?)
            .ok_or_else(|| format!("{} is not a usable font", path))?;
        let scale = Scale::uniform(LABEL_SCALE);
        let top = image.height() as i32 - LABEL_SCALE as i32 - 4;
        draw_text_mut(&mut image, Pixel([255, 255, 255]), 4, top, scale, &font, &state.hex);
    }

    image.save(&output)?;
    info!("wrote {}", output);

    Ok(())
}
