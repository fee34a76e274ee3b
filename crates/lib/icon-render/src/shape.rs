//! Shapes that can be painted onto a [`crate::Surface`].

/// An axis-aligned bounding box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub min_x: f32,

    /// Top edge.
    pub min_y: f32,

    /// Right edge.
    pub max_x: f32,

    /// Bottom edge.
    pub max_y: f32,
}

/// A filled region of the plane.
pub trait Shape {
    /// A box that contains every point of the shape.
    fn bounds(&self) -> Bounds;

    /// Whether the point lies inside the shape.
    fn contains(&self, x: f32, y: f32) -> bool;
}

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    /// Center X.
    pub cx: f32,

    /// Center Y.
    pub cy: f32,

    /// Radius.
    pub radius: f32,
}

impl Shape for Disc {
    fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.cx - self.radius,
            min_y: self.cy - self.radius,
            max_x: self.cx + self.radius,
            max_y: self.cy + self.radius,
        }
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// A stroked circle; the stroke is centered on the circle's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Center X.
    pub cx: f32,

    /// Center Y.
    pub cy: f32,

    /// Radius of the path the stroke follows.
    pub radius: f32,

    /// Stroke width.
    pub width: f32,
}

impl Shape for Ring {
    fn bounds(&self) -> Bounds {
        let outer = self.radius + self.width / 2.0;
        Bounds {
            min_x: self.cx - outer,
            min_y: self.cy - outer,
            max_x: self.cx + outer,
            max_y: self.cy + outer,
        }
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        let distance = (dx * dx + dy * dy).sqrt();
        (distance - self.radius).abs() <= self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_contains_center_not_outside() {
        let disc = Disc {
            cx: 10.0,
            cy: 10.0,
            radius: 2.0,
        };
        assert!(disc.contains(10.0, 10.0));
        assert!(disc.contains(12.0, 10.0));
        assert!(!disc.contains(12.5, 10.0));
    }

    #[test]
    fn ring_is_hollow() {
        let ring = Ring {
            cx: 0.0,
            cy: 0.0,
            radius: 10.0,
            width: 2.0,
        };
        assert!(!ring.contains(0.0, 0.0));
        assert!(ring.contains(10.0, 0.0));
        assert!(ring.contains(0.0, -10.9));
        assert!(!ring.contains(0.0, 11.5));
        assert_eq!(ring.bounds().max_x, 11.0);
    }
}
