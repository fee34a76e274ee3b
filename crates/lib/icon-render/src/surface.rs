//! The RGBA raster surface.

use crate::{Rgb, Shape};

/// Subsamples per pixel along each axis.
const SUBSAMPLES: u32 = 4;

/// Total subsamples per pixel.
const SAMPLE_COUNT: u32 = SUBSAMPLES * SUBSAMPLES;

/// A square RGBA8 pixel grid, initially fully transparent.
pub struct Surface {
    /// Image pixels, as the RGBA byte sequences.
    pixels: Box<[u8]>,

    /// Edge length.
    size: u32,
}

impl core::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("pixels", &format_args!("{} bytes", self.pixels.len()))
            .field("size", &self.size)
            .finish()
    }
}

impl Surface {
    /// Allocate a transparent `size` x `size` surface.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize * 4;
        Self {
            pixels: vec![0u8; len].into_boxed_slice(),
            size,
        }
    }

    /// Edge length in pixels.
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// The pixel at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside of the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Overwrite every pixel with an opaque color.
    pub fn fill(&mut self, color: Rgb) {
        let [r, g, b] = color.channels();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    /// Paint a shape with an opaque color, anti-aliased by per-pixel
    /// supersampling and composited source-over.
    pub fn paint(&mut self, shape: &impl Shape, color: Rgb) {
        let bounds = shape.bounds();
        let (x0, x1) = self.span(bounds.min_x, bounds.max_x);
        let (y0, y1) = self.span(bounds.min_y, bounds.max_y);

        for y in y0..y1 {
            for x in x0..x1 {
                let hits = sample(shape, x, y);
                if hits == 0 {
                    continue;
                }
                let coverage = ((hits * 255 + SAMPLE_COUNT / 2) / SAMPLE_COUNT) as u8;
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Consume the surface, returning its RGBA bytes.
    pub fn into_pixels(self) -> Box<[u8]> {
        self.pixels
    }

    /// Byte offset of a pixel.
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.size && y < self.size, "pixel out of bounds");
        (y as usize * self.size as usize + x as usize) * 4
    }

    /// The pixel index range that covers `[min, max]`, clamped to the surface.
    fn span(&self, min: f32, max: f32) -> (u32, u32) {
        let size = self.size as f32;
        let start = min.floor().clamp(0.0, size) as u32;
        let end = max.ceil().clamp(0.0, size) as u32;
        (start, end)
    }

    /// Composite `color` with the given alpha over the pixel.
    fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: u8) {
        let idx = self.index(x, y);
        let a = alpha as u32;
        let neg_a = 255 - a;

        let mix = |background: u8, foreground: u8| {
            ((background as u32 * neg_a + foreground as u32 * a + 127) / 255) as u8
        };

        let [r, g, b] = color.channels();
        let px = &mut self.pixels[idx..idx + 4];
        px[0] = mix(px[0], r);
        px[1] = mix(px[1], g);
        px[2] = mix(px[2], b);
        px[3] = (a + (px[3] as u32 * neg_a + 127) / 255) as u8;
    }
}

/// Count the subsamples of pixel `(x, y)` that fall inside the shape.
fn sample(shape: &impl Shape, x: u32, y: u32) -> u32 {
    let step = 1.0 / SUBSAMPLES as f32;
    let mut hits = 0;
    for sy in 0..SUBSAMPLES {
        let py = y as f32 + (sy as f32 + 0.5) * step;
        for sx in 0..SUBSAMPLES {
            let px = x as f32 + (sx as f32 + 0.5) * step;
            if shape.contains(px, py) {
                hits += 1;
            }
        }
    }
    hits
}
