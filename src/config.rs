//! Tunable menu constants, loadable from JSON.
//!
//! Every field defaults to the value the menu shipped with, so an empty JSON object is a
//! complete configuration. All durations are in frames.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::CubicBezier;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{TitleGridError, TitleGridResult};

/// Full menu configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Output surface size.
    pub screen: ScreenConfig,
    /// Region the grid and viewport live in.
    pub band: BandConfig,
    /// Grid capacity and base item size.
    pub grid: GridConfig,
    /// Cursor input handling.
    pub cursor: CursorConfig,
    /// Scroll smoothing.
    pub viewport: ViewportConfig,
    /// Per-item selection effects.
    pub selection: SelectionConfig,
    /// Collapsible side panel.
    pub sidebar: SidebarConfig,
    /// Intro and confirm/cancel timings.
    pub timeline: TimelineConfig,
    /// Load spinner.
    pub spinner: SpinnerConfig,
}

impl MenuConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TitleGridResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TitleGridError::serde(format!("parse menu config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TitleGridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TitleGridError::validation(format!("open menu config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> TitleGridResult<()> {
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(TitleGridError::validation("screen size must be positive"));
        }
        if self.band.x_max <= self.band.x_min || self.band.y_max <= self.band.y_min {
            return Err(TitleGridError::validation("band bounds must not be inverted"));
        }
        if self.grid.columns == 0 || self.grid.rows == 0 {
            return Err(TitleGridError::validation(
                "grid needs at least one row and one column",
            ));
        }
        if self.grid.capacity > self.grid.rows.saturating_mul(self.grid.columns) {
            return Err(TitleGridError::validation(format!(
                "grid capacity {} exceeds {} rows x {} columns",
                self.grid.capacity, self.grid.rows, self.grid.columns
            )));
        }
        if self.grid.item_width <= 0.0 || self.grid.item_height <= 0.0 {
            return Err(TitleGridError::validation("base item size must be positive"));
        }
        if self.cursor.repeat_reset >= self.cursor.initial_delay {
            return Err(TitleGridError::validation(
                "cursor repeat_reset must be below initial_delay",
            ));
        }
        if !(self.viewport.smoothing > 0.0 && self.viewport.smoothing <= 1.0) {
            return Err(TitleGridError::validation(
                "viewport smoothing must be in (0, 1]",
            ));
        }
        if self.sidebar.frames == 0 {
            return Err(TitleGridError::validation("sidebar needs at least one frame"));
        }
        if self.sidebar.max_width < self.sidebar.min_width {
            return Err(TitleGridError::validation(
                "sidebar max_width must not be below min_width",
            ));
        }
        if self.timeline.fade_in == 0
            || self.timeline.logo_wait == 0
            || self.timeline.logo_exit == 0
        {
            return Err(TitleGridError::validation(
                "intro phases need at least one frame each",
            ));
        }
        if self.timeline.logo_cue_at >= self.timeline.logo_wait {
            return Err(TitleGridError::validation(
                "logo cue must fall inside the logo wait",
            ));
        }
        if self.timeline.confirm_step <= 0.0 || self.timeline.cancel_step <= 0.0 {
            return Err(TitleGridError::validation(
                "confirm and cancel steps must be positive",
            ));
        }
        if self.spinner.dots == 0 || self.spinner.ramp == 0 {
            return Err(TitleGridError::validation(
                "spinner needs dots and a non-empty ramp",
            ));
        }
        Ok(())
    }
}

/// Output surface size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
    /// Left edge of the drawable region.
    pub safe_x_min: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            safe_x_min: 16.0,
        }
    }
}

impl ScreenConfig {
    /// Full-screen rect.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Fixed region the grid and the scrolling viewport must fit within.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Left edge of the grid.
    pub x_min: f64,
    /// Right edge of the grid.
    pub x_max: f64,
    /// Top edge of the visible band (also the content top).
    pub y_min: f64,
    /// Bottom edge of the visible band.
    pub y_max: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            x_min: 64.0,
            x_max: 624.0,
            y_min: 16.0,
            y_max: 464.0,
        }
    }
}

impl BandConfig {
    /// Horizontal extent rows shrink into.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the visible window onto the content.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Grid capacity and base item geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Column capacity of each row.
    pub columns: usize,
    /// Row capacity of the grid.
    pub rows: usize,
    /// Largest catalog accepted.
    pub capacity: usize,
    /// Unscaled item width.
    pub item_width: f64,
    /// Unscaled item height.
    pub item_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 50,
            capacity: 40,
            item_width: 256.0,
            item_height: 179.0,
        }
    }
}

/// Cursor auto-repeat and analog deadzone.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Analog values with magnitude at or below this are ignored.
    pub deadzone: i32,
    /// Held frames before the first repeat step.
    pub initial_delay: u32,
    /// Timer value after each repeat step; repeats every `initial_delay - repeat_reset + 1` frames.
    pub repeat_reset: u32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            deadzone: 30,
            initial_delay: 25,
            repeat_reset: 19,
        }
    }
}

/// Exponential-follow scrolling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Fraction of the residual covered per frame.
    pub smoothing: f64,
    /// Residual at or below which the offset snaps onto the target.
    pub snap_threshold: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.4,
            snap_threshold: 0.1,
        }
    }
}

/// Grow and outline pulse of the selected item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Grow factor added per selected frame.
    pub grow_step: f64,
    /// Outline phase advance per selected frame, in radians.
    pub outline_step: f64,
    /// Extra height a fully grown item gains.
    pub grow_extra_height: f64,
    /// Shadow scale relative to the drawn item.
    pub shadow_scale: (f64, f64),
    /// Shadow opacity.
    pub shadow_alpha: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            grow_step: 1.0 / 10.0,
            outline_step: 0.15,
            grow_extra_height: 16.0,
            shadow_scale: (1.1, 1.05),
            shadow_alpha: 0.23,
        }
    }
}

/// Side panel animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Animation steps between fully closed and fully open.
    pub frames: u32,
    /// Collapsed width.
    pub min_width: f64,
    /// Expanded width.
    pub max_width: f64,
    /// Curve used while opening.
    pub open_curve: CubicBezier,
    /// Curve used while closing (applied mirrored).
    pub close_curve: CubicBezier,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            frames: 10,
            min_width: 64.0,
            max_width: 320.0,
            open_curve: CubicBezier::new(0.44, 0.88, 0.57, 1.26),
            close_curve: CubicBezier::new(0.44, 0.88, 0.57, 1.15),
        }
    }
}

/// Application state timings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Frames of the opening fade from black.
    pub fade_in: u32,
    /// Frames the logo stays up.
    pub logo_wait: u32,
    /// Remaining logo frames at which the logo cue plays.
    pub logo_cue_at: u32,
    /// Top-left corner of the logo image before it slides out.
    pub logo_origin: Point,
    /// Frames of the logo slide-out.
    pub logo_exit: u32,
    /// Distance the logo card slides.
    pub logo_exit_distance: f64,
    /// Transition fade added per frame after confirming.
    pub confirm_step: f64,
    /// Transition fade removed per frame after cancelling.
    pub cancel_step: f64,
    /// Side of the square the transition mask grows from.
    pub mask_start_size: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            fade_in: 60,
            logo_wait: 120,
            logo_cue_at: 110,
            logo_origin: Point::new(194.0, 112.0),
            logo_exit: 20,
            logo_exit_distance: 640.0,
            confirm_step: 1.0 / 15.0,
            cancel_step: 1.0 / 20.0,
            mask_start_size: 64.0,
        }
    }
}

/// Load spinner shown while a title loads.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    /// Progress ticks before the spinner starts fading in.
    pub delay: u32,
    /// Ticks over which the fade ramps to full.
    pub ramp: u32,
    /// Number of dots on the ring.
    pub dots: u32,
    /// Ring radius.
    pub radius: f64,
    /// Ring centre.
    pub center: Point,
    /// Phase advance per drawn frame.
    pub phase_step: f64,
    /// Unscaled dot size.
    pub dot_size: f64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            delay: 10,
            ramp: 30,
            dots: 12,
            radius: 20.0,
            center: Point::new(585.0, 432.0),
            phase_step: 0.25,
            dot_size: 11.0,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
