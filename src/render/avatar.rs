// src/render/avatar.rs
// =============================================================================
// Turns the avatar image into colored terminal blocks.
//
// How it works:
// 1. Decode the downloaded bytes (PNG, JPEG, GIF... whatever `image` knows)
// 2. Drop alpha/palette information by converting to 8-bit RGB
// 3. Resize to a fixed square grid (18x18) with a Lanczos filter
// 4. For every pixel print "██" in that pixel's exact 24-bit color
//
// Why two blocks per pixel?
// - A terminal cell is roughly twice as tall as it is wide
// - Two cells side by side make a (roughly) square pixel
//
// Rust concepts:
// - Option<&[u8]>: "maybe some borrowed bytes"
// - Iterators: Building each line from a row of pixels
// =============================================================================

use std::fmt::Write;

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Avatar grid size in pixels (width and height)
pub const AVATAR_SIZE: u32 = 18;

/// Drawn once per pixel
pub const BLOCK: &str = "██";

/// Resets all terminal colors
pub const RESET: &str = "\x1b[0m";

// Renders avatar images at a fixed square size
#[derive(Debug, Clone, Copy)]
pub struct AvatarRenderer {
    size: u32,
}

impl Default for AvatarRenderer {
    fn default() -> Self {
        Self::new(AVATAR_SIZE)
    }
}

impl AvatarRenderer {
    pub fn new(size: u32) -> Self {
        // A 0x0 grid can't be resized to
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    // How many terminal columns one rendered line occupies
    pub fn visible_width(&self) -> usize {
        self.size as usize * BLOCK.chars().count()
    }

    // Renders raw image bytes into one line per pixel row
    //
    // Returns an empty Vec when there are no bytes or they aren't a valid
    // image. The card is then printed without an avatar.
    pub fn render(&self, bytes: Option<&[u8]>) -> Vec<String> {
        let Some(bytes) = bytes else {
            return Vec::new();
        };

        match self.to_grid(bytes) {
            Ok(grid) => self.render_grid(&grid),
            Err(e) => {
                log::warn!("Could not decode avatar image: {}", e);
                Vec::new()
            }
        }
    }

    // Decodes and resizes image bytes to a size x size RGB grid
    pub fn to_grid(&self, bytes: &[u8]) -> Result<RgbImage, image::ImageError> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        Ok(imageops::resize(&rgb, self.size, self.size, FilterType::Lanczos3))
    }

    // Renders an already-sized grid, top row first
    pub fn render_grid(&self, grid: &RgbImage) -> Vec<String> {
        grid.rows()
            .map(|row| {
                let mut line = String::new();
                for pixel in row {
                    let [r, g, b] = pixel.0;
                    // Writing to a String can't fail
                    let _ = write!(line, "{}{}{}", truecolor_fg(r, g, b), BLOCK, RESET);
                }
                line
            })
            .collect()
    }
}

// ANSI escape that sets the foreground to an exact RGB color
pub fn truecolor_fg(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}
