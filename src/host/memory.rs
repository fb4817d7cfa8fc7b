//! In-memory strip for headless runs and tests.

use std::io;

use super::StripHost;
use crate::color::Rgb;
use crate::strip::LED_COUNT;

/// Keeps the pixel buffer in memory and counts commits instead of
/// touching hardware.
pub struct MemoryStrip {
    pixels: Vec<Rgb>,
    commits: usize,
}

impl MemoryStrip {
    pub fn new() -> MemoryStrip {
        MemoryStrip {
            pixels: vec![Rgb::BLACK; LED_COUNT],
            commits: 0,
        }
    }

    /// The buffer as last committed or staged.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// How many frames have been committed so far.
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl Default for MemoryStrip {
    fn default() -> MemoryStrip {
        MemoryStrip::new()
    }
}

impl StripHost for MemoryStrip {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if index >= LED_COUNT {
            panic!("Invalid pixel index: {}", index);
        }
        self.pixels[index] = color;
    }

    fn commit(&mut self) -> io::Result<()> {
        self.commits += 1;
        Ok(())
    }
}
