//! Generated "BS" monogram favicon.
//!
//! 64×64 RGBA: dark square, radial-gradient disc, a faint grid of binary
//! digits and a glowing monogram on top. The digit grid is random, so every
//! request gets a slightly different icon.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use rand::Rng;
use thiserror::Error;

pub const SIZE: u32 = 64;

const BACKGROUND: [u8; 3] = [0x0b, 0x0f, 0x19];
const DISC_INNER: [u8; 3] = [0x00, 0x33, 0x22];
const DISC_OUTER: [u8; 3] = [0x00, 0x11, 0x0a];
const ACCENT: [u8; 3] = [0x00, 0xff, 0x99];

const DISC_RADIUS: f32 = 30.0;
const GRADIENT_START: f32 = 8.0;
const GRID_STEP: usize = 12;
const GRID_ALPHA: f32 = 0.2;
const GLOW_ALPHA: f32 = 0.12;
const MONOGRAM_SCALE: u32 = 3;

const DIGIT_ZERO: [&str; 5] = ["###", "#.#", "#.#", "#.#", "###"];
const DIGIT_ONE: [&str; 5] = [".#.", "##.", ".#.", ".#.", "###"];
const LETTER_B: [&str; 7] = [
    "####.", "#...#", "#...#", "####.", "#...#", "#...#", "####.",
];
const LETTER_S: [&str; 7] = [
    ".####", "#....", "#....", ".###.", "....#", "....#", "####.",
];

#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("failed to encode favicon: {0}")]
    Encode(#[from] image::ImageError),
}

fn blend(image: &mut RgbaImage, x: i64, y: i64, color: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= i64::from(SIZE) || y >= i64::from(SIZE) {
        return;
    }
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    for (channel, source) in pixel.0.iter_mut().take(3).zip(color) {
        let mixed = f32::from(*channel) * (1.0 - alpha) + f32::from(source) * alpha;
        *channel = mixed.round() as u8;
    }
}

fn draw_bitmap(
    image: &mut RgbaImage,
    rows: &[&str],
    left: i64,
    top: i64,
    scale: u32,
    color: [u8; 3],
    alpha: f32,
) {
    let scale = i64::from(scale);
    for (row, line) in rows.iter().enumerate() {
        for (column, bit) in line.chars().enumerate() {
            if bit != '#' {
                continue;
            }
            let x0 = left + column as i64 * scale;
            let y0 = top + row as i64 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    blend(image, x0 + dx, y0 + dy, color, alpha);
                }
            }
        }
    }
}

fn lerp(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let mut out = [0; 3];
    for i in 0..3 {
        out[i] = (f32::from(from[i]) + (f32::from(to[i]) - f32::from(from[i])) * t).round() as u8;
    }
    out
}

fn draw_disc(image: &mut RgbaImage) {
    let centre = SIZE as f32 / 2.0;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - centre;
        let dy = y as f32 + 0.5 - centre;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > DISC_RADIUS {
            continue;
        }
        let t = ((distance - GRADIENT_START) / (centre - GRADIENT_START)).clamp(0.0, 1.0);
        let [r, g, b] = lerp(DISC_INNER, DISC_OUTER, t);
        *pixel = Rgba([r, g, b, 255]);
    }
}

fn draw_monogram(image: &mut RgbaImage) {
    let glyph_width = 5 * MONOGRAM_SCALE;
    let glyph_height = 7 * MONOGRAM_SCALE;
    let gap = MONOGRAM_SCALE;
    let left = i64::from((SIZE - (2 * glyph_width + gap)) / 2);
    let top = i64::from((SIZE - glyph_height) / 2 + 2);
    let second = left + i64::from(glyph_width + gap);

    for dy in -2i64..=2 {
        for dx in -2i64..=2 {
            if (dx, dy) == (0, 0) || dx * dx + dy * dy > 4 {
                continue;
            }
            draw_bitmap(image, &LETTER_B, left + dx, top + dy, MONOGRAM_SCALE, ACCENT, GLOW_ALPHA);
            draw_bitmap(image, &LETTER_S, second + dx, top + dy, MONOGRAM_SCALE, ACCENT, GLOW_ALPHA);
        }
    }
    draw_bitmap(image, &LETTER_B, left, top, MONOGRAM_SCALE, ACCENT, 1.0);
    draw_bitmap(image, &LETTER_S, second, top, MONOGRAM_SCALE, ACCENT, 1.0);
}

pub fn render_favicon<R: Rng>(rng: &mut R) -> RgbaImage {
    let [r, g, b] = BACKGROUND;
    let mut image = RgbaImage::from_pixel(SIZE, SIZE, Rgba([r, g, b, 255]));
    draw_disc(&mut image);

    for baseline in (10..SIZE as usize).step_by(GRID_STEP) {
        for x in (6..SIZE as usize).step_by(GRID_STEP) {
            let digit = if rng.gen_bool(0.5) { &DIGIT_ONE } else { &DIGIT_ZERO };
            draw_bitmap(&mut image, digit, x as i64, baseline as i64 - 9, 2, ACCENT, GRID_ALPHA);
        }
    }

    draw_monogram(&mut image);
    image
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, FaviconError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

pub fn favicon_png<R: Rng>(rng: &mut R) -> Result<Vec<u8>, FaviconError> {
    encode_png(&render_favicon(rng))
}
