//! Library for rendering the application emblem icon.
//!
//! The emblem is a ring with two accent dots on a solid background. All of
//! its geometry is expressed as fractions of the icon edge length, so the
//! design scales uniformly from a 1x1 surface upwards.

mod color;
mod emblem;
mod shape;
mod surface;

pub use color::{ParseRgbError, Rgb};
pub use emblem::Emblem;
pub use shape::{Bounds, Disc, Ring, Shape};
pub use surface::Surface;

/// Colors used to paint the emblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Solid fill of the whole surface.
    pub background: Rgb,

    /// Color of the ring and the dots.
    pub accent: Rgb,
}

impl Palette {
    /// Dark neutral gray.
    pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x2C, 0x2C, 0x2C);

    /// Gold.
    pub const DEFAULT_ACCENT: Rgb = Rgb::new(0xFF, 0xD7, 0x00);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Self::DEFAULT_BACKGROUND,
            accent: Self::DEFAULT_ACCENT,
        }
    }
}

/// Renders the emblem onto a fresh `size` x `size` surface.
pub fn render(size: u32, palette: &Palette) -> Surface {
    let mut surface = Surface::new(size);
    surface.fill(palette.background);

    let emblem = Emblem::for_size(size);
    surface.paint(&emblem.ring, palette.accent);
    for dot in &emblem.dots {
        surface.paint(dot, palette.accent);
    }

    surface
}

/// Renders the emblem as an RGBA image, one `[r, g, b, a]` quad per pixel in
/// row-major order.
pub fn render_rgba(size: u32, palette: &Palette) -> Box<[u8]> {
    render(size, palette).into_pixels()
}
