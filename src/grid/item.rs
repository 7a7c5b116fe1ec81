use kurbo::Size;

use crate::catalog::source::{CatalogEntry, ImageHandle};
use crate::foundation::core::{Point, Rect};

/// One selectable title placed in the grid.
///
/// Created once per catalog load; only the layout fields and the selection state change
/// afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Item {
    /// Title identifier.
    pub id: String,
    /// Box-art image.
    pub image: ImageHandle,
    /// Unscaled size.
    pub base: Size,
    /// Top-left corner in layout space.
    pub origin: Point,
    /// Uniform scale shared by the whole row.
    pub scale: f64,
    /// Whether the cursor is on this item.
    pub selected: bool,
    /// Grow factor in `[0, 1]`, rising while selected.
    pub grow: f64,
    /// Outline brightness in `[0, 1]`.
    pub outline: f64,
    /// Outline pulse phase, in radians.
    pub outline_phase: f64,
}

impl Item {
    pub(crate) fn new(entry: CatalogEntry, base: Size) -> Self {
        Self {
            id: entry.id,
            image: entry.image,
            base,
            origin: Point::ZERO,
            scale: 1.0,
            selected: false,
            grow: 0.0,
            outline: 0.0,
            outline_phase: 0.0,
        }
    }

    /// Size after the row scale.
    pub fn scaled_size(&self) -> Size {
        self.base * self.scale
    }

    /// Layout-space rect at row scale.
    pub fn layout_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.scaled_size())
    }

    /// Vertical centre of the layout rect.
    pub fn midpoint_y(&self) -> f64 {
        self.origin.y + self.scaled_size().height * 0.5
    }
}
