use super::*;
use crate::catalog::source::{CatalogSource, StaticCatalog};
use crate::config::MenuConfig;

fn grid(n: usize, cfg: &MenuConfig) -> Grid {
    let entries = StaticCatalog::numbered(n).load().unwrap();
    Grid::build(entries, cfg).unwrap()
}

#[test]
fn target_is_clamped_to_content() {
    let cfg = MenuConfig::default();
    let tall = grid(20, &cfg);
    let lo = tall.content_top();
    let hi = tall.content_bottom() - cfg.band.height();
    for item in tall.items() {
        let t = target_for(item.midpoint_y(), &tall, &cfg.band);
        assert!(t >= lo && t <= hi, "target {t} outside [{lo}, {hi}]");
    }
    let first = tall.item(0).unwrap().midpoint_y();
    assert_eq!(target_for(first, &tall, &cfg.band), lo);
    let last = tall.items().last().unwrap().midpoint_y();
    assert_eq!(target_for(last, &tall, &cfg.band), hi);
}

#[test]
fn short_content_never_scrolls() {
    let cfg = MenuConfig::default();
    let short = grid(6, &cfg);
    for item in short.items() {
        assert_eq!(target_for(item.midpoint_y(), &short, &cfg.band), cfg.band.y_min);
    }
}

#[test]
fn middle_targets_are_whole_units() {
    let cfg = MenuConfig::default();
    let tall = grid(40, &cfg);
    let mid = tall.item(20).unwrap().midpoint_y();
    let t = target_for(mid, &tall, &cfg.band);
    assert_eq!(t, t.round());
    assert_eq!(t, (mid - cfg.band.height() * 0.5).round());
}

#[test]
fn offset_converges_and_snaps_without_overshoot() {
    let cfg = MenuConfig::default();
    let tall = grid(40, &cfg);
    let mut vp = Viewport::new(&cfg.band);
    let mid = tall.items().last().unwrap().midpoint_y();

    let mut frames = 0;
    let mut prev = vp.offset();
    loop {
        vp.update(Some(mid), &tall, &cfg.band, &cfg.viewport);
        frames += 1;
        assert!(vp.offset() >= prev, "offset moved backwards");
        assert!(vp.offset() <= vp.target(), "offset overshot");
        prev = vp.offset();
        if vp.offset() == vp.target() {
            break;
        }
        assert!(frames < 60, "did not converge");
    }
    assert_eq!(vp.bottom(), vp.offset() + cfg.band.height());

    vp.update(Some(mid), &tall, &cfg.band, &cfg.viewport);
    assert_eq!(vp.offset(), vp.target());
}

#[test]
fn no_selection_keeps_previous_target() {
    let cfg = MenuConfig::default();
    let tall = grid(40, &cfg);
    let mut vp = Viewport::new(&cfg.band);
    let mid = tall.item(30).unwrap().midpoint_y();
    vp.update(Some(mid), &tall, &cfg.band, &cfg.viewport);
    let target = vp.target();
    for _ in 0..5 {
        vp.update(None, &tall, &cfg.band, &cfg.viewport);
    }
    assert_eq!(vp.target(), target);
    assert!(vp.offset() > cfg.band.y_min);
}

#[test]
fn screen_mapping_pins_offset_to_band_top() {
    let cfg = MenuConfig::default();
    let vp = Viewport::new(&cfg.band);
    assert_eq!(vp.to_screen_y(cfg.band.y_min, &cfg.band), cfg.band.y_min);
}
