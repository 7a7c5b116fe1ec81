use kurbo::Size;
use tracing::debug;

use crate::catalog::source::CatalogEntry;
use crate::config::MenuConfig;
use crate::foundation::core::Point;
use crate::foundation::error::{TitleGridError, TitleGridResult};
use crate::grid::item::Item;

/// One populated row: a slice of the dense item list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RowSpan {
    /// Index of the row's first item.
    pub start: usize,
    /// Occupied columns.
    pub len: usize,
    /// Uniform item scale.
    pub scale: f64,
    /// Layout-space top edge.
    pub top: f64,
    /// Scaled item height.
    pub height: f64,
}

/// Titles laid out row-major into rows of at most `columns` items.
///
/// Only populated rows are stored; rows past them up to `row_capacity` read as empty.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Grid {
    items: Vec<Item>,
    rows: Vec<RowSpan>,
    columns: usize,
    row_capacity: usize,
    content_top: f64,
    content_bottom: f64,
}

impl Grid {
    /// Grid with no items.
    pub fn empty(cfg: &MenuConfig) -> Self {
        Self {
            items: Vec::new(),
            rows: Vec::new(),
            columns: cfg.grid.columns.max(1),
            row_capacity: cfg.grid.rows,
            content_top: cfg.band.y_min,
            content_bottom: cfg.band.y_max,
        }
    }

    /// Lay out `entries` in catalog order.
    ///
    /// Rows with more than two items shrink uniformly so the row spans exactly the band
    /// width. Content taller than the band extends the content bottom so it can scroll.
    #[tracing::instrument(skip_all, fields(titles = entries.len()))]
    pub fn build(entries: Vec<CatalogEntry>, cfg: &MenuConfig) -> TitleGridResult<Self> {
        if entries.len() > cfg.grid.capacity {
            return Err(TitleGridError::CapacityExceeded {
                len: entries.len(),
                capacity: cfg.grid.capacity,
            });
        }

        let mut grid = Self::empty(cfg);
        let base = Size::new(cfg.grid.item_width, cfg.grid.item_height);
        grid.items = entries.into_iter().map(|e| Item::new(e, base)).collect();

        let mut row_top = cfg.band.y_min;
        let mut start = 0;
        while start < grid.items.len() {
            let len = grid.columns.min(grid.items.len() - start);
            let scale = row_scale(len, cfg.band.width(), base.width);
            let item_w = base.width * scale;
            for (col, item) in grid.items[start..start + len].iter_mut().enumerate() {
                item.scale = scale;
                item.origin = Point::new(cfg.band.x_min + item_w * col as f64, row_top);
            }
            let height = base.height * scale;
            grid.rows.push(RowSpan {
                start,
                len,
                scale,
                top: row_top,
                height,
            });
            row_top += height;
            start += len;
        }

        if row_top > cfg.band.y_max {
            grid.content_bottom = row_top;
        }
        debug!(
            rows = grid.rows.len(),
            content_bottom = grid.content_bottom,
            "grid laid out"
        );
        Ok(grid)
    }

    /// Dense item list in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Item at dense index `idx`.
    pub fn item(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    /// Populated rows.
    pub fn rows(&self) -> &[RowSpan] {
        &self.rows
    }

    /// Occupied columns of `row`; zero for rows past the populated ones.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.len)
    }

    /// Dense index of the item at `(row, col)`, if that slot is occupied.
    pub fn slot(&self, row: usize, col: usize) -> Option<usize> {
        let span = self.rows.get(row)?;
        (col < span.len).then_some(span.start + col)
    }

    /// `(row, column)` of the item at dense index `idx`.
    pub fn position_of(&self, idx: usize) -> Option<(usize, usize)> {
        (idx < self.items.len()).then_some((idx / self.columns, idx % self.columns))
    }

    /// Column capacity per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row capacity, populated or not.
    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    /// Whether the grid holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top of the scrollable content.
    pub fn content_top(&self) -> f64 {
        self.content_top
    }

    /// Bottom of the scrollable content (at least the band bottom).
    pub fn content_bottom(&self) -> f64 {
        self.content_bottom
    }
}

/// Uniform scale for a row of `len` items of width `item_width` inside `band_width`.
pub fn row_scale(len: usize, band_width: f64, item_width: f64) -> f64 {
    if len <= 2 {
        1.0
    } else {
        band_width / (len as f64 * item_width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/layout.rs"]
mod tests;
