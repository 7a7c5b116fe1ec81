use crate::config::{BandConfig, ViewportConfig};
use crate::grid::layout::Grid;

/// Vertical scroll window over the grid content.
///
/// `offset` is the layout-space y shown at the band top. It follows `target` by a fixed
/// fraction of the residual per frame and snaps onto it once the residual is within the
/// snap threshold, so it never creeps sub-pixel forever.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    offset: f64,
    target: f64,
    bottom: f64,
}

impl Viewport {
    /// Viewport resting at the band top.
    pub fn new(band: &BandConfig) -> Self {
        Self {
            offset: band.y_min,
            target: band.y_min,
            bottom: band.y_max,
        }
    }

    /// Current scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset being approached.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Layout-space y of the visible band's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Retarget onto the selected item's midpoint (if any) and advance one frame.
    pub fn update(
        &mut self,
        selected_midpoint: Option<f64>,
        grid: &Grid,
        band: &BandConfig,
        cfg: &ViewportConfig,
    ) {
        if let Some(mid) = selected_midpoint {
            self.target = target_for(mid, grid, band);
        }

        let residual = self.target - self.offset;
        if residual.abs() > cfg.snap_threshold {
            self.offset += residual * cfg.smoothing;
        } else {
            self.offset = self.target;
        }
        self.bottom = self.offset + band.height();
    }

    /// Translate a layout-space y into screen space.
    pub fn to_screen_y(&self, y: f64, band: &BandConfig) -> f64 {
        y - (self.offset - band.y_min)
    }
}

/// Offset that centres `midpoint` in the band, rounded, then clamped to the content.
pub fn target_for(midpoint: f64, grid: &Grid, band: &BandConfig) -> f64 {
    let lo = grid.content_top();
    let hi = (grid.content_bottom() - band.height()).max(lo);
    (midpoint - band.height() * 0.5).round().clamp(lo, hi)
}

#[cfg(test)]
#[path = "../../tests/unit/view/viewport.rs"]
mod tests;
