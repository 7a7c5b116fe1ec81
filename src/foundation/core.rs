pub use kurbo::{Point, Rect, Vec2};

/// Monotonic frame counter of a menu session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The following frame.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Straight (non-premultiplied) RGBA8 color handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray of `level` in `[0, 1]`.
    pub fn gray(level: f64) -> Self {
        let v = unit_to_u8(level);
        Self::new(v, v, v, 255)
    }

    /// Black with alpha `alpha` in `[0, 1]`.
    pub fn black_alpha(alpha: f64) -> Self {
        Self::new(0, 0, 0, unit_to_u8(alpha))
    }

    /// Same color with alpha `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }
}

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Four-corner quad in the vertex order the renderer triangulates:
/// top-left, bottom-right, bottom-left, top-right.
///
/// Triangles are `(0, 1, 2)` and `(0, 3, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quad {
    /// Corner positions.
    pub vertices: [Point; 4],
}

impl Quad {
    /// Triangle index lists covering the quad.
    pub const TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [0, 3, 1]];

    /// Quad covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            vertices: [
                Point::new(rect.x0, rect.y0),
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x0, rect.y1),
                Point::new(rect.x1, rect.y0),
            ],
        }
    }

    /// Axis-aligned bounds of the quad.
    pub fn bounds(&self) -> Rect {
        let [a, b, ..] = self.vertices;
        Rect::from_points(a, b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
