//! Shared helpers for the example binaries: tracing setup and a top-down
//! PNG renderer for point fields.
use std::fs;
use std::path::Path;

use anyhow::Result;
use backdrop_scatter::sampling::SampleSet;
use image::{Rgba, RgbaImage};

/// Install a human-readable tracing subscriber for the examples.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// How a sample set is mapped into an image.
pub struct RenderConfig {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Dot radius in pixels.
    pub point_radius: i32,
    /// Background fill color.
    pub background: Rgba<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            point_radius: 3,
            background: Rgba([18, 18, 24, 255]),
        }
    }
}

/// Render a sample set top-down onto a PNG, shading points by depth so the
/// nearest shapes read brightest.
pub fn render_sample_set_to_png(
    set: &SampleSet,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let mut img = RgbaImage::from_pixel(config.width, config.height, config.background);
    let extent = set.extent;

    for p in set.iter() {
        let cx = (p.x / extent.width * config.width as f32) as i32;
        let cy = (p.y / extent.height * config.height as f32) as i32;

        let depth = (p.z / extent.depth).clamp(0.0, 1.0);
        let shade = 255 - (depth * 160.0) as u8;
        let color = Rgba([shade, shade, 255, 255]);

        let r = config.point_radius;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 && (x as u32) < config.width && (y as u32) < config.height {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    img.save(path.as_ref())?;

    Ok(())
}
