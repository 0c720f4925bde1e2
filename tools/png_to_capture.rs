//! Image to screen capture converter
//!
//! Builds a capture file from any image the image crate can read, so the
//! host converter can be exercised without a device.

use anyhow::{Context, Result};
use clap::Parser;
use dssc_protocol::{
    encode_record, Rgb555, RenderParams, Vertex, PIXEL_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use image::{imageops::FilterType, ImageReader};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "png_to_capture")]
#[command(about = "Convert an image into a 256x192 screen capture file")]
struct Args {
    /// Source image
    input: PathBuf,

    /// Capture file to write
    output: PathBuf,

    /// Polygon alpha (0-31)
    #[arg(long, default_value = "31", value_parser = clap::value_parser!(u8).range(0..=31))]
    alpha: u8,

    /// Texture mode index (0-7)
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=7))]
    tex_mode: u8,

    /// Record the shape as a triangle instead of a quad
    #[arg(long)]
    triangle: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Converting {} to a screen capture...", args.input.display());

    let img = ImageReader::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    println!("Original image: {}×{}", img.width(), img.height());

    let resized = img.resize_exact(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, FilterType::Lanczos3);
    let rgb_img = resized.to_rgb8();

    let mut frame = vec![0u16; PIXEL_COUNT];
    for (dst, pixel) in frame.iter_mut().zip(rgb_img.pixels()) {
        let [r, g, b] = pixel.0;
        *dst = Rgb555::from_rgb888(r, g, b).0;
    }
    let frame: Box<[u16; PIXEL_COUNT]> = frame
        .into_boxed_slice()
        .try_into()
        .map_err(|_| anyhow::anyhow!("Frame has the wrong size"))?;

    let params = RenderParams {
        quad: !args.triangle,
        tex_mode: args.tex_mode,
        alpha: args.alpha,
        vertices: [
            Vertex::new(64, 32, 0),
            Vertex::new(64, 160, 0),
            Vertex::new(192, 160, 0),
            Vertex::new(192, 32, 0),
        ],
        ..Default::default()
    };

    let record = encode_record(&params, &frame);
    fs::write(&args.output, &record)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Generated {}", args.output.display());
    println!("Size: {} bytes", record.len());

    Ok(())
}
