/// Linear interpolation from `a` to `b` with factor `t`.
pub(crate) fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation between two rects, corner by corner.
pub(crate) fn lerp_rect(t: f64, a: kurbo::Rect, b: kurbo::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        lerp(t, a.x0, b.x0),
        lerp(t, a.y0, b.y0),
        lerp(t, a.x1, b.x1),
        lerp(t, a.y1, b.y1),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
