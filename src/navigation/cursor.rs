use tracing::debug;

use crate::config::CursorConfig;
use crate::grid::layout::Grid;
use crate::navigation::repeat::AutoRepeat;

/// Column value while the sidebar is engaged and no item is selected.
pub const SIDEBAR_COLUMN: i32 = -1;

/// Axis values for one frame, as produced by [`crate::FrameInput::axis_x`]/`axis_y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Axes {
    /// Horizontal axis, negative is left.
    pub x: i32,
    /// Vertical axis, negative is up.
    pub y: i32,
}

/// Feedback produced by one cursor update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorOutcome {
    /// The cursor landed on a different slot.
    pub moved: bool,
    /// A move was stopped by a grid edge or an empty row.
    pub limit_reached: bool,
}

/// 2D position over the irregular grid plus per-axis auto-repeat.
///
/// After every update `row` names a populated row (or 0 for an empty grid) and `col` is
/// either [`SIDEBAR_COLUMN`] or inside `[0, row_len - 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Cursor {
    row: usize,
    col: i32,
    row_repeat: AutoRepeat,
    col_repeat: AutoRepeat,
}

impl Cursor {
    /// Cursor resting at `(row, col)` with idle repeat timers.
    pub fn at(row: usize, col: i32) -> Self {
        Self {
            row,
            col,
            ..Self::default()
        }
    }

    /// Current row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Raw column, [`SIDEBAR_COLUMN`] while the sidebar is engaged.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Whether the cursor sits on the sidebar.
    pub fn in_sidebar(&self) -> bool {
        self.col < 0
    }

    /// Dense index of the item under the cursor.
    pub fn selected_index(&self, grid: &Grid) -> Option<usize> {
        let col = usize::try_from(self.col).ok()?;
        grid.slot(self.row, col)
    }

    /// Advance one frame.
    ///
    /// `axes` is `None` on frames where input is not accepted; the position is still
    /// normalized against the grid. Horizontal input is always read (it is how the sidebar
    /// is entered and left); vertical input only while the cursor is on the grid.
    pub fn update(&mut self, grid: &Grid, axes: Option<Axes>, cfg: &CursorConfig) -> CursorOutcome {
        let prev_row = self.row as i64;
        let prev_col = i64::from(self.col);
        let prev_len = grid.row_len(self.row);

        let mut row = prev_row;
        let mut col = prev_col;
        if let Some(axes) = axes {
            col += i64::from(self.col_repeat.step(axes.x, cfg));
            if col >= 0 {
                row += i64::from(self.row_repeat.step(axes.y, cfg));
            }
        }

        let mut out = CursorOutcome::default();
        if col < 0 {
            self.col = SIDEBAR_COLUMN;
            return out;
        }

        let last_row = grid.row_capacity().saturating_sub(1) as i64;
        if row < 0 || row > last_row {
            out.limit_reached |= row != prev_row;
            row = row.clamp(0, last_row);
        }

        let mut landed = row as usize;
        if grid.row_len(landed) == 0 {
            out.limit_reached |= row != prev_row;
            landed = nearest_populated_row(grid, landed);
        }
        if landed as i64 != prev_row {
            out.moved = true;
        }

        let len = grid.row_len(landed);
        if landed as i64 != prev_row && prev_len > 0 && len > 0 {
            col = remap_column(col, prev_len, len);
        }

        if len == 0 {
            col = 0;
        } else if col >= len as i64 {
            out.limit_reached |= col != prev_col;
            col = len as i64 - 1;
        } else if col != prev_col {
            out.moved = true;
        }

        self.row = landed;
        self.col = i32::try_from(col).unwrap_or(0);
        if out.limit_reached {
            debug!(row = self.row, col = self.col, "cursor limit reached");
        }
        out
    }
}

/// Column in a row of `to_len` items at the same relative position as `col` in a row of
/// `from_len` items.
///
/// The last column maps to the last column whenever the target row is at most twice as long.
pub fn remap_column(col: i64, from_len: usize, to_len: usize) -> i64 {
    if from_len == 0 {
        return col;
    }
    let fraction = (col as f64 + 0.5) / from_len as f64;
    (fraction * to_len as f64).floor() as i64
}

fn nearest_populated_row(grid: &Grid, row: usize) -> usize {
    let below = (0..row).rev().find(|&r| grid.row_len(r) > 0);
    let above = (row + 1..grid.row_capacity()).find(|&r| grid.row_len(r) > 0);
    match (below, above) {
        (Some(b), Some(a)) => {
            if row - b <= a - row {
                b
            } else {
                a
            }
        }
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (None, None) => 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/cursor.rs"]
mod tests;
