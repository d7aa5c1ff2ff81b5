use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Side length of the generated icon in pixels
pub const ICON_SIZE: u32 = 192;

/// Gradient endpoints, top row to bottom row
const GRADIENT_START: [u8; 3] = [0, 212, 255]; // Electric blue
const GRADIENT_END: [u8; 3] = [123, 47, 255]; // Deep purple

/// Relative heights of the soundwave bars, left to right
const BAR_RATIOS: [f64; 5] = [0.3, 0.6, 1.0, 0.7, 0.4];
const BAR_WIDTH: u32 = 14;
const BAR_GAP: u32 = 10;
const BAR_MAX_HEIGHT: f64 = 70.0;
const BAR_RADIUS: u32 = 7;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Resolved geometry of a single soundwave bar
///
/// Spans columns `x..x + width` and rows `y_top..y_top + height`, with every
/// corner rounded by `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRect {
    pub x: u32,
    pub y_top: u32,
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

impl BarRect {
    pub fn y_bottom(&self) -> u32 {
        self.y_top + self.height
    }

    /// Whether the center of pixel `(px, py)` falls inside the rounded shape
    pub fn contains(&self, px: u32, py: u32) -> bool {
        let fx = px as f32 + 0.5;
        let fy = py as f32 + 0.5;

        let left = self.x as f32;
        let top = self.y_top as f32;
        let right = left + self.width as f32;
        let bottom = top + self.height as f32;

        if fx < left || fx > right || fy < top || fy > bottom {
            return false;
        }

        // A radius larger than half the short side would make the arcs overlap
        let radius = (self.radius as f32)
            .min(self.width as f32 / 2.0)
            .min(self.height as f32 / 2.0);

        // Distance to the inner rectangle whose corners are the arc centers
        let nearest_x = fx.clamp(left + radius, right - radius);
        let nearest_y = fy.clamp(top + radius, bottom - radius);
        let dx = fx - nearest_x;
        let dy = fy - nearest_y;

        dx * dx + dy * dy <= radius * radius
    }
}

/// Lay out the five bars as a horizontally centered group on the midline
pub fn bar_layout() -> [BarRect; 5] {
    let count = BAR_RATIOS.len() as u32;
    let total_width = count * (BAR_WIDTH + BAR_GAP) - BAR_GAP;
    let start_x = (ICON_SIZE - total_width) / 2;

    let mut bars = [BarRect {
        x: 0,
        y_top: 0,
        width: BAR_WIDTH,
        height: 0,
        radius: BAR_RADIUS,
    }; 5];

    for (i, (bar, ratio)) in bars.iter_mut().zip(BAR_RATIOS).enumerate() {
        let height = (ratio * BAR_MAX_HEIGHT).round() as u32;
        bar.x = start_x + i as u32 * (BAR_WIDTH + BAR_GAP);
        bar.y_top = (ICON_SIZE - height) / 2;
        bar.height = height;
    }

    bars
}

/// Color of the gradient disk at row `y`
pub fn gradient_color(y: u32) -> Rgba<u8> {
    let progress = y as f64 / (ICON_SIZE - 1) as f64;
    let channel = |i: usize| {
        (GRADIENT_START[i] as f64 * (1.0 - progress) + GRADIENT_END[i] as f64 * progress) as u8
    };

    Rgba([channel(0), channel(1), channel(2), 255])
}

/// Whether pixel `(x, y)` lies within the gradient disk
pub fn in_disk(x: u32, y: u32) -> bool {
    let center = (ICON_SIZE / 2) as i64;
    let radius = (ICON_SIZE / 2 - 2) as i64;
    let dx = x as i64 - center;
    let dy = y as i64 - center;

    dx * dx + dy * dy <= radius * radius
}

/// Paint the icon: a gradient disk on a transparent canvas with white bars on top
pub fn render() -> RgbaImage {
    let mut canvas = RgbaImage::new(ICON_SIZE, ICON_SIZE);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if in_disk(x, y) {
            *pixel = gradient_color(y);
        }
    }

    for bar in bar_layout() {
        for y in bar.y_top..bar.y_bottom() {
            for x in bar.x..bar.x + bar.width {
                if bar.contains(x, y) {
                    canvas.put_pixel(x, y, WHITE);
                }
            }
        }
    }

    canvas
}

/// Write the icon to `path` as a PNG, replacing any existing file
///
/// The parent directory must already exist.
pub fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;

    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write PNG file {}", path.display()))?;

    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
