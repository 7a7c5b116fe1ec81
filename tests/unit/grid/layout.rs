use super::*;
use crate::catalog::source::{CatalogSource, StaticCatalog};

fn entries(n: usize) -> Vec<CatalogEntry> {
    StaticCatalog::numbered(n).load().unwrap()
}

fn cfg_with_columns(columns: usize) -> MenuConfig {
    let mut cfg = MenuConfig::default();
    cfg.grid.columns = columns;
    cfg.grid.capacity = columns * cfg.grid.rows;
    cfg
}

#[test]
fn ten_titles_fill_rows_of_four_four_two() {
    let cfg = MenuConfig::default();
    let grid = Grid::build(entries(10), &cfg).unwrap();
    let lens: Vec<usize> = grid.rows().iter().map(|r| r.len).collect();
    assert_eq!(lens, [4, 4, 2]);

    let shrink = cfg.band.width() / (4.0 * cfg.grid.item_width);
    assert_eq!(grid.rows()[0].scale, shrink);
    assert_eq!(grid.rows()[1].scale, shrink);
    assert_eq!(grid.rows()[2].scale, 1.0);
}

#[test]
fn every_item_gets_a_unique_row_major_slot() {
    for columns in [1, 3, 4, 7] {
        let cfg = cfg_with_columns(columns);
        for n in [0, 1, columns, columns + 1, 3 * columns - 1] {
            let grid = Grid::build(entries(n), &cfg).unwrap();
            let mut seen = std::collections::BTreeSet::new();
            for idx in 0..n {
                let (row, col) = grid.position_of(idx).unwrap();
                assert_eq!((row, col), (idx / columns, idx % columns));
                assert_eq!(grid.slot(row, col), Some(idx));
                assert!(seen.insert((row, col)));
            }
            assert_eq!(grid.items().len(), n);
        }
    }
}

#[test]
fn shrunk_rows_span_exactly_the_band() {
    let cfg = cfg_with_columns(6);
    let grid = Grid::build(entries(6 + 5 + 0), &cfg).unwrap();
    for row in grid.rows() {
        let items = &grid.items()[row.start..row.start + row.len];
        let total: f64 = items.iter().map(|i| i.scaled_size().width).sum();
        if row.len > 2 {
            assert!((total - cfg.band.width()).abs() < 1e-9);
            let last = items.last().unwrap();
            assert!((last.layout_rect().x1 - cfg.band.x_max).abs() < 1e-9);
        } else {
            assert_eq!(row.scale, 1.0);
        }
    }
}

#[test]
fn rows_stack_by_scaled_height() {
    let cfg = MenuConfig::default();
    let grid = Grid::build(entries(10), &cfg).unwrap();
    let rows = grid.rows();
    assert_eq!(rows[0].top, cfg.band.y_min);
    assert_eq!(rows[1].top, rows[0].top + rows[0].height);
    assert_eq!(rows[2].top, rows[1].top + rows[1].height);
    let item = grid.item(5).unwrap();
    assert_eq!(item.origin.y, rows[1].top);
    assert_eq!(
        item.origin.x,
        cfg.band.x_min + cfg.grid.item_width * rows[1].scale
    );
}

#[test]
fn tall_content_extends_the_bottom() {
    let cfg = MenuConfig::default();
    let short = Grid::build(entries(4), &cfg).unwrap();
    assert_eq!(short.content_bottom(), cfg.band.y_max);

    let fits = Grid::build(entries(10), &cfg).unwrap();
    assert_eq!(fits.content_bottom(), cfg.band.y_max);

    let tall = Grid::build(entries(20), &cfg).unwrap();
    let last = tall.rows().last().unwrap();
    assert!(last.top + last.height > cfg.band.y_max);
    assert_eq!(tall.content_bottom(), last.top + last.height);
}

#[test]
fn unpopulated_rows_read_as_empty() {
    let cfg = MenuConfig::default();
    let grid = Grid::build(entries(10), &cfg).unwrap();
    assert_eq!(grid.row_len(2), 2);
    assert_eq!(grid.row_len(3), 0);
    assert_eq!(grid.row_len(cfg.grid.rows + 5), 0);
    assert_eq!(grid.slot(2, 2), None);
    assert_eq!(grid.row_capacity(), cfg.grid.rows);
}

#[test]
fn oversized_catalog_is_rejected() {
    let cfg = MenuConfig::default();
    let err = Grid::build(entries(cfg.grid.capacity + 1), &cfg).unwrap_err();
    assert!(matches!(
        err,
        TitleGridError::CapacityExceeded { len: 41, capacity: 40 }
    ));
    assert!(Grid::build(entries(cfg.grid.capacity), &cfg).is_ok());
}

#[test]
fn row_scale_threshold() {
    assert_eq!(row_scale(1, 560.0, 256.0), 1.0);
    assert_eq!(row_scale(2, 560.0, 256.0), 1.0);
    assert_eq!(row_scale(4, 560.0, 256.0), 560.0 / 1024.0);
}
