//! Emblem geometry.

use crate::shape::{Disc, Ring};

/// Ring center, as fractions of the edge length.
const RING_CENTER: (f32, f32) = (0.5, 0.4);

/// Ring radius, as a fraction of the edge length.
const RING_RADIUS: f32 = 0.3;

/// Stroke width divisor: the stroke is `size / 16` wide.
const RING_WIDTH_DIVISOR: f32 = 16.0;

/// Dot centers, as fractions of the edge length.
const DOT_CENTERS: [(f32, f32); 2] = [(0.7, 0.6), (0.7, 0.8)];

/// Dot radius, as a fraction of the edge length.
const DOT_RADIUS: f32 = 0.08;

/// The emblem shapes laid out for a specific edge length.
#[derive(Debug, Clone, PartialEq)]
pub struct Emblem {
    /// The stroked ring.
    pub ring: Ring,

    /// The two accent dots, top one first.
    pub dots: [Disc; 2],
}

impl Emblem {
    /// Lay out the emblem on a `size` x `size` surface.
    pub fn for_size(size: u32) -> Self {
        let size = size as f32;

        let ring = Ring {
            cx: size * RING_CENTER.0,
            cy: size * RING_CENTER.1,
            radius: size * RING_RADIUS,
            width: size / RING_WIDTH_DIVISOR,
        };

        let dots = DOT_CENTERS.map(|(fx, fy)| Disc {
            cx: size * fx,
            cy: size * fy,
            radius: size * DOT_RADIUS,
        });

        Self { ring, dots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_size() {
        let emblem = Emblem::for_size(256);

        assert_eq!(emblem.ring.cx, 128.0);
        assert_eq!(emblem.ring.width, 16.0);
        assert!((emblem.ring.cy - 102.4).abs() < 1e-4);
        assert!((emblem.ring.radius - 76.8).abs() < 1e-4);

        assert!((emblem.dots[0].cx - 179.2).abs() < 1e-4);
        assert!((emblem.dots[1].cy - 204.8).abs() < 1e-4);
        assert!((emblem.dots[1].radius - 20.48).abs() < 1e-4);
    }
}
