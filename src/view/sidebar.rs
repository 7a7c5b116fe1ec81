use crate::app::effects::Cue;
use crate::config::SidebarConfig;
use crate::foundation::core::{Quad, Rect};

/// Collapsible panel on the left edge, open while the cursor is in sidebar mode.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Sidebar {
    open: bool,
    counter: u32,
    width: f64,
    brightness: f64,
    quad: Quad,
}

impl Sidebar {
    /// Closed panel of `cfg.min_width`, spanning `height`.
    pub fn new(cfg: &SidebarConfig, height: f64) -> Self {
        Self {
            open: false,
            counter: 0,
            width: cfg.min_width,
            brightness: 1.0,
            quad: Quad::from_rect(Rect::new(0.0, 0.0, cfg.min_width, height)),
        }
    }

    /// Whether the panel is open (or opening).
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Animation counter in `[0, cfg.frames]`.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Current width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Grid brightness factor, `1.0` closed down to `0.5` fully open.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Panel geometry after the last update.
    pub fn quad(&self) -> Quad {
        self.quad
    }

    /// Advance one frame; returns the cue for an open/close edge.
    pub fn update(
        &mut self,
        cursor_in_sidebar: bool,
        cfg: &SidebarConfig,
        height: f64,
    ) -> Option<Cue> {
        let cue = match (self.open, cursor_in_sidebar) {
            (false, true) => Some(Cue::SidebarOpen),
            (true, false) => Some(Cue::SidebarClose),
            _ => None,
        };
        self.open = cursor_in_sidebar;

        self.counter = if self.open {
            (self.counter + 1).min(cfg.frames)
        } else {
            self.counter.saturating_sub(1)
        };

        let fact = f64::from(self.counter) / f64::from(cfg.frames);
        let interp = if self.open {
            cfg.open_curve.apply(fact)
        } else {
            1.0 - cfg.close_curve.apply(1.0 - fact)
        };
        let span = cfg.max_width - cfg.min_width;
        self.width = (cfg.min_width + (interp * span).abs()).clamp(cfg.min_width, cfg.max_width);
        self.brightness = 0.5 + (1.0 - fact) * 0.5;
        self.quad = Quad::from_rect(Rect::new(0.0, 0.0, self.width, height));
        cue
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/sidebar.rs"]
mod tests;
