use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(0.0, 3.0, 9.0), 3.0);
    assert_eq!(lerp(1.0, 3.0, 9.0), 9.0);
    assert_eq!(lerp(0.5, 3.0, 9.0), 6.0);
}

#[test]
fn lerp_rect_moves_every_corner() {
    let a = kurbo::Rect::new(100.0, 100.0, 164.0, 164.0);
    let b = kurbo::Rect::new(0.0, 0.0, 640.0, 480.0);
    assert_eq!(lerp_rect(0.0, a, b), a);
    assert_eq!(lerp_rect(1.0, a, b), b);
    assert_eq!(lerp_rect(0.5, a, b), kurbo::Rect::new(50.0, 50.0, 402.0, 322.0));
}
