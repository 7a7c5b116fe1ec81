use super::*;

const HEIGHT: f64 = 480.0;

#[test]
fn entering_and_leaving_emit_one_cue_each() {
    let cfg = SidebarConfig::default();
    let mut bar = Sidebar::new(&cfg, HEIGHT);
    assert_eq!(bar.update(false, &cfg, HEIGHT), None);
    assert_eq!(bar.update(true, &cfg, HEIGHT), Some(Cue::SidebarOpen));
    assert_eq!(bar.update(true, &cfg, HEIGHT), None);
    assert_eq!(bar.update(false, &cfg, HEIGHT), Some(Cue::SidebarClose));
    assert_eq!(bar.update(false, &cfg, HEIGHT), None);
}

#[test]
fn counter_saturates_at_both_ends() {
    let cfg = SidebarConfig::default();
    let mut bar = Sidebar::new(&cfg, HEIGHT);
    for _ in 0..25 {
        bar.update(true, &cfg, HEIGHT);
    }
    assert_eq!(bar.counter(), cfg.frames);
    assert!((bar.width() - cfg.max_width).abs() < 1e-6);
    assert_eq!(bar.brightness(), 0.5);

    for _ in 0..25 {
        bar.update(false, &cfg, HEIGHT);
    }
    assert_eq!(bar.counter(), 0);
    assert!((bar.width() - cfg.min_width).abs() < 1e-6);
    assert_eq!(bar.brightness(), 1.0);
}

#[test]
fn width_stays_in_range_through_overshoot() {
    let cfg = SidebarConfig::default();
    let mut bar = Sidebar::new(&cfg, HEIGHT);
    let mut widths = Vec::new();
    for open in [true; 12].into_iter().chain([false; 12]) {
        bar.update(open, &cfg, HEIGHT);
        assert!(bar.width() >= cfg.min_width && bar.width() <= cfg.max_width);
        widths.push(bar.width());
    }
    assert!(widths[0] > cfg.min_width);
    assert!(widths[1] > widths[0]);
}

#[test]
fn quad_follows_width() {
    let cfg = SidebarConfig::default();
    let mut bar = Sidebar::new(&cfg, HEIGHT);
    bar.update(true, &cfg, HEIGHT);
    let bounds = bar.quad().bounds();
    assert_eq!(bounds, Rect::new(0.0, 0.0, bar.width(), HEIGHT));
}
