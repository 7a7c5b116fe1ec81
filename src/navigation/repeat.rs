use crate::config::CursorConfig;

/// Keyboard-style auto-repeat for one axis.
///
/// A new direction steps at once; holding it steps again after `initial_delay` frames and
/// then every `initial_delay - repeat_reset + 1` frames. Releasing resets without stepping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AutoRepeat {
    timer: u32,
    dir: i32,
}

impl AutoRepeat {
    /// Feed this frame's axis value; returns the signed number of steps to take.
    ///
    /// Only the sign of `axis` is used.
    pub fn step(&mut self, axis: i32, cfg: &CursorConfig) -> i32 {
        let dir = axis.signum();
        if dir == 0 {
            self.timer = 0;
            self.dir = 0;
            return 0;
        }
        if dir != self.dir {
            self.timer = 0;
            self.dir = dir;
        }

        let mut steps = 0;
        if self.timer == 0 {
            steps += dir;
        }
        self.timer += 1;
        if self.timer > cfg.initial_delay {
            steps += dir;
            self.timer = cfg.repeat_reset;
        }
        steps
    }

    /// Frames the current direction has been accumulating.
    pub fn timer(&self) -> u32 {
        self.timer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/repeat.rs"]
mod tests;
