/// Cubic Bézier timing curve with endpoints pinned at `(0, 0)` and `(1, 1)`.
///
/// [`CubicBezier::apply`] inverts the x-component with a fixed number of Newton-Raphson
/// steps seeded at `u = t`, clamping `u` into `[0, 1]` after each step, then evaluates the
/// y-component at the solved parameter. There is no convergence check: the residual in x is
/// not bounded below any epsilon, but for monotonic UI curves it is far below a pixel.
/// A vanishing derivative stops the iteration and keeps the current estimate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    /// First control point, x.
    pub x1: f64,
    /// First control point, y.
    pub y1: f64,
    /// Second control point, x.
    pub x2: f64,
    /// Second control point, y.
    pub y2: f64,
}

impl CubicBezier {
    /// Newton-Raphson steps taken per evaluation.
    pub const NEWTON_ITERATIONS: usize = 5;

    /// Build a curve from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased output for normalized time `t` (clamped into `[0, 1]`).
    ///
    /// The output may leave `[0, 1]` when a control point's y does (overshooting curves).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let u = self.solve_parameter(t);
        bernstein(self.y1, self.y2, u)
    }

    /// Curve parameter `u` whose x-component approximates `t`.
    pub fn solve_parameter(self, t: f64) -> f64 {
        // x(u) = f0·u³ + f1·u² + f2·u
        let f0 = 1.0 - 3.0 * self.x2 + 3.0 * self.x1;
        let f1 = 3.0 * self.x2 - 6.0 * self.x1;
        let f2 = 3.0 * self.x1;

        let mut u = t;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let u2 = u * u;
            let x = f0 * u2 * u + f1 * u2 + f2 * u;
            let slope = 3.0 * f0 * u2 + 2.0 * f1 * u + f2;
            let step = (x - t) / slope;
            if !step.is_finite() {
                break;
            }
            u = (u - step).clamp(0.0, 1.0);
        }
        u
    }

    /// x-component of the curve at parameter `u`.
    pub fn x_at(self, u: f64) -> f64 {
        bernstein(self.x1, self.x2, u)
    }
}

fn bernstein(p1: f64, p2: f64, u: f64) -> f64 {
    let omu = 1.0 - u;
    3.0 * omu * omu * u * p1 + 3.0 * omu * u * u * p2 + u * u * u
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
