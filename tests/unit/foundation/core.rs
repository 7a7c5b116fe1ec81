use super::*;

#[test]
fn quad_vertex_order_matches_triangulation() {
    let q = Quad::from_rect(Rect::new(0.0, 0.0, 64.0, 480.0));
    assert_eq!(q.vertices[0], Point::new(0.0, 0.0));
    assert_eq!(q.vertices[1], Point::new(64.0, 480.0));
    assert_eq!(q.vertices[2], Point::new(0.0, 480.0));
    assert_eq!(q.vertices[3], Point::new(64.0, 0.0));
    assert_eq!(q.bounds(), Rect::new(0.0, 0.0, 64.0, 480.0));
}

#[test]
fn triangles_cover_the_rect_once() {
    let rect = Rect::new(10.0, 20.0, 74.0, 500.0);
    let q = Quad::from_rect(rect);
    let area: f64 = Quad::TRIANGLES
        .iter()
        .map(|[a, b, c]| {
            let (a, b, c) = (q.vertices[*a], q.vertices[*b], q.vertices[*c]);
            ((b - a).cross(c - a) / 2.0).abs()
        })
        .sum();
    assert!((area - rect.area()).abs() < 1e-9);
}

#[test]
fn unit_colors_saturate() {
    assert_eq!(Rgba8::gray(2.0), Rgba8::new(255, 255, 255, 255));
    assert_eq!(Rgba8::black_alpha(-1.0).a, 0);
    assert_eq!(Rgba8::gray(0.5).r, 127);
    assert_eq!(Rgba8::new(255, 0, 0, 0).with_alpha(1.0).a, 255);
}

#[test]
fn frame_index_saturates() {
    assert_eq!(FrameIndex(4).next(), FrameIndex(5));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}
