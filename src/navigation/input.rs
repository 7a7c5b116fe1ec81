/// Controller state sampled once per frame.
///
/// Directions and the stick are held state; `confirm` and `cancel` are press edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// D-pad left held.
    pub left: bool,
    /// D-pad right held.
    pub right: bool,
    /// D-pad up held.
    pub up: bool,
    /// D-pad down held.
    pub down: bool,
    /// Analog stick x in `[-100, 100]`, right positive.
    pub stick_x: i32,
    /// Analog stick y in `[-100, 100]`, up positive.
    pub stick_y: i32,
    /// Confirm pressed this frame.
    pub confirm: bool,
    /// Cancel pressed this frame.
    pub cancel: bool,
}

impl FrameInput {
    /// Horizontal axis: negative is left.
    ///
    /// The d-pad yields ±1; a stick beyond `deadzone` overrides it with its raw value.
    pub fn axis_x(&self, deadzone: i32) -> i32 {
        let mut v = 0;
        if self.left {
            v = -1;
        }
        if self.right {
            v = 1;
        }
        if self.stick_x.abs() > deadzone {
            v = self.stick_x;
        }
        v
    }

    /// Vertical axis: negative is towards the first row.
    pub fn axis_y(&self, deadzone: i32) -> i32 {
        let mut v = 0;
        if self.up {
            v = -1;
        }
        if self.down {
            v = 1;
        }
        if self.stick_y.abs() > deadzone {
            v = -self.stick_y;
        }
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/input.rs"]
mod tests;
