use anyhow::{bail, Context, Result};
use image::io::Reader as ImageReader;

const EXPECTED_SIZE: u32 = 192;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "icon.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image {}", path))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path))?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    if width != EXPECTED_SIZE || height != EXPECTED_SIZE {
        bail!("Expected a {0}x{0} icon, found {1}x{2}", EXPECTED_SIZE, width, height);
    }

    // The tallest bar covers the center, the corner sits outside the disk
    let center = rgba_img.get_pixel(width / 2, height / 2);
    let corner = rgba_img.get_pixel(0, 0);

    println!("\nCenter pixel (x={}, y={}):", width / 2, height / 2);
    println!("  RGBA: [{}, {}, {}, {}]", center[0], center[1], center[2], center[3]);
    println!("Corner pixel (x=0, y=0):");
    println!("  RGBA: [{}, {}, {}, {}]", corner[0], corner[1], corner[2], corner[3]);

    if center.0 != [255, 255, 255, 255] {
        bail!("Center pixel should be opaque white");
    }
    if corner[3] != 0 {
        bail!("Corner pixel should be transparent");
    }

    println!("\n✓ Icon layout looks right");
    Ok(())
}
