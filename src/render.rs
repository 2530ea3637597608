//! Heat grid to RGBA pixel conversion

use crate::grid::HeatGrid;
use crate::palette::{Palette, Rgba};

/// Row-major RGBA pixels, 4 bytes per pixel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.width + x) * 4;
        Rgba::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Pixels packed as RGBA8888 words
    pub fn packed(&self) -> impl Iterator<Item = u32> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| u32::from_be_bytes([px[0], px[1], px[2], px[3]]))
    }
}

/// Overwrite `buf` with `palette[heat]` for every cell of `grid`
pub fn render_into(grid: &HeatGrid, palette: &Palette, buf: &mut PixelBuffer) {
    debug_assert_eq!((buf.width, buf.height), (grid.width(), grid.height()));

    for (&heat, px) in grid.cells().iter().zip(buf.data.chunks_exact_mut(4)) {
        let c = palette.color(heat);
        px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
}
