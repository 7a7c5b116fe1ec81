use super::*;
use crate::catalog::source::{CatalogSource, StaticCatalog};
use crate::config::MenuConfig;
use crate::grid::layout::Grid;

fn grid(n: usize, cfg: &MenuConfig) -> Grid {
    let entries = StaticCatalog::numbered(n).load().unwrap();
    Grid::build(entries, cfg).unwrap()
}

fn content(grid: &Grid) -> (f64, f64) {
    (grid.content_top(), grid.content_bottom())
}

#[test]
fn grow_saturates_after_ten_frames() {
    let cfg = SelectionConfig::default();
    let g = grid(1, &MenuConfig::default());
    let mut item = g.item(0).unwrap().clone();
    item.selected = true;
    for _ in 0..9 {
        animate(&mut item, &cfg);
    }
    assert!(item.grow < 1.0);
    animate(&mut item, &cfg);
    animate(&mut item, &cfg);
    assert_eq!(item.grow, 1.0);
}

#[test]
fn outline_pulses_within_unit_range() {
    let cfg = SelectionConfig::default();
    let g = grid(1, &MenuConfig::default());
    let mut item = g.item(0).unwrap().clone();
    item.selected = true;

    animate(&mut item, &cfg);
    assert_eq!(item.outline, 0.0);
    let mut peak = 0.0f64;
    for _ in 0..60 {
        animate(&mut item, &cfg);
        assert!((0.0..=1.0).contains(&item.outline));
        peak = peak.max(item.outline);
    }
    assert!(peak > 0.99);
}

#[test]
fn deselection_resets_immediately() {
    let cfg = SelectionConfig::default();
    let g = grid(1, &MenuConfig::default());
    let mut item = g.item(0).unwrap().clone();
    item.selected = true;
    for _ in 0..5 {
        animate(&mut item, &cfg);
    }
    item.selected = false;
    animate(&mut item, &cfg);
    assert_eq!((item.grow, item.outline, item.outline_phase), (0.0, 0.0, 0.0));
}

#[test]
fn fully_grown_item_gains_extra_height() {
    let cfg = MenuConfig::default();
    let g = grid(1, &cfg);
    let mut item = g.item(0).unwrap().clone();
    assert_eq!(draw_scale(&item, &cfg.selection), item.scale);

    item.selected = true;
    item.grow = 1.0;
    let rect = draw_rect(&item, &cfg.band, content(&g), &cfg.selection);
    let expected = item.scaled_size().height + cfg.selection.grow_extra_height;
    assert!((rect.height() - expected).abs() < 1e-9);
    assert!(rect.x0 >= cfg.band.x_min);
    assert!(rect.x1 <= cfg.band.x_max);
    assert!(rect.y0 >= g.content_top());
}

#[test]
fn grown_rect_is_centred_away_from_edges() {
    let cfg = MenuConfig::default();
    let g = grid(40, &cfg);
    let mut item = g.item(21).unwrap().clone();
    let base = item.layout_rect();
    item.selected = true;
    item.grow = 1.0;
    let rect = draw_rect(&item, &cfg.band, content(&g), &cfg.selection);
    assert!((rect.center().x - base.center().x).abs() < 1e-9);
    assert!((rect.center().y - base.center().y).abs() < 1e-9);
}

#[test]
fn items_outside_the_band_are_culled() {
    let cfg = MenuConfig::default();
    let g = grid(40, &cfg);
    let vp = Viewport::new(&cfg.band);
    let c = content(&g);

    let first = item_view(0, g.item(0).unwrap(), &vp, &cfg.band, c, 1.0, &cfg.selection);
    assert!(first.is_some());
    let last = g.items().len() - 1;
    let hidden = item_view(last, g.item(last).unwrap(), &vp, &cfg.band, c, 1.0, &cfg.selection);
    assert!(hidden.is_none());
}

#[test]
fn selected_view_carries_shadow_and_outline() {
    let cfg = MenuConfig::default();
    let g = grid(4, &cfg);
    let vp = Viewport::new(&cfg.band);
    let mut item = g.item(1).unwrap().clone();

    let plain = item_view(1, &item, &vp, &cfg.band, content(&g), 0.75, &cfg.selection).unwrap();
    assert!(plain.shadow.is_none());
    assert!(plain.outline.is_none());
    assert_eq!(plain.brightness, 0.75);
    assert_eq!(plain.rect, item.layout_rect());

    item.selected = true;
    item.outline = 0.5;
    let view = item_view(1, &item, &vp, &cfg.band, content(&g), 1.0, &cfg.selection).unwrap();
    let shadow = view.shadow.unwrap();
    assert_eq!(shadow.alpha, cfg.selection.shadow_alpha);
    assert!((shadow.rect.width() - view.rect.width() * 1.1).abs() < 1e-9);
    assert!((shadow.rect.center().x - view.rect.center().x).abs() < 1e-9);
    assert_eq!(view.outline, Some(0.5));
}
