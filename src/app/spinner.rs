use std::f64::consts::TAU;

use crate::app::host::ProgressSink;
use crate::config::SpinnerConfig;
use crate::foundation::core::Point;
use crate::render::frame::SpinnerDot;

const MIN_DOT_SCALE: f64 = 0.4;
/// Dots behind the leading one that are still enlarged.
const PULSE_WIDTH: f64 = 3.0;

/// Ring of pulsing dots shown while a title loads.
///
/// Every tick (a loader progress callback or an await-load frame) counts towards the fade;
/// once `delay` ticks have passed the ring fades in over `ramp` ticks and its phase advances.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Spinner {
    cfg: SpinnerConfig,
    ticks: u32,
    fade: f64,
    phase: f64,
    progress: f64,
}

impl Spinner {
    /// Idle spinner.
    pub fn new(cfg: SpinnerConfig) -> Self {
        Self {
            cfg,
            ticks: 0,
            fade: 0.0,
            phase: 0.0,
            progress: 0.0,
        }
    }

    /// Count one tick.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
        if self.is_visible() {
            let ramped = f64::from(self.ticks - self.cfg.delay) / f64::from(self.cfg.ramp);
            self.fade = ramped.min(1.0);
            self.phase += self.cfg.phase_step;
        }
    }

    /// Back to idle.
    pub fn reset(&mut self) {
        *self = Self::new(self.cfg);
    }

    /// Whether the delay has elapsed.
    pub fn is_visible(&self) -> bool {
        self.ticks >= self.cfg.delay
    }

    /// Ring opacity in `[0, 1]`.
    pub fn fade(&self) -> f64 {
        self.fade
    }

    /// Last progress reported by the loader.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Dot sprites for the current phase, or none before the delay has elapsed.
    pub fn dots(&self) -> Vec<SpinnerDot> {
        if !self.is_visible() {
            return Vec::new();
        }
        let n = self.cfg.dots;
        let count = f64::from(n);
        let half = self.cfg.dot_size * 0.5 * MIN_DOT_SCALE;
        (0..n)
            .rev()
            .map(|i| {
                let i = f64::from(i);
                let pulse = (PULSE_WIDTH - (self.phase + i).rem_euclid(count)).max(0.0);
                let scale = MIN_DOT_SCALE + pulse / PULSE_WIDTH * (1.0 - MIN_DOT_SCALE);
                let angle = i / count * TAU;
                let c = self.cfg.center;
                SpinnerDot {
                    origin: Point::new(
                        c.x + angle.sin() * self.cfg.radius - half * scale,
                        c.y + angle.cos() * self.cfg.radius - half * scale,
                    ),
                    scale,
                    alpha: self.fade,
                }
            })
            .collect()
    }
}

impl ProgressSink for Spinner {
    fn on_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
        self.tick();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/spinner.rs"]
mod tests;
