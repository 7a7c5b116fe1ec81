use crate::config::{BandConfig, SelectionConfig};
use crate::foundation::core::{Rect, Vec2};
use crate::grid::item::Item;
use crate::render::frame::{ItemView, Shadow};
use crate::view::viewport::Viewport;

/// Advance one item's selection effects by a frame.
///
/// Selected items grow towards 1 and pulse their outline; deselected items drop all three
/// values to zero at once.
pub fn animate(item: &mut Item, cfg: &SelectionConfig) {
    if item.selected {
        item.grow = (item.grow + cfg.grow_step).min(1.0);
        item.outline = 1.0 - (item.outline_phase.cos() * 0.5 + 0.5);
        item.outline_phase += cfg.outline_step;
    } else {
        item.grow = 0.0;
        item.outline = 0.0;
        item.outline_phase = 0.0;
    }
}

/// Draw scale of `item`: the row scale, lerped by `grow` towards the scale that adds
/// `grow_extra_height` to the item's height.
pub fn draw_scale(item: &Item, cfg: &SelectionConfig) -> f64 {
    if !item.selected {
        return item.scale;
    }
    let height = item.scaled_size().height;
    let full = item.scale * (height + cfg.grow_extra_height) / height;
    item.scale + item.grow * (full - item.scale)
}

/// Layout-space rect `item` is drawn in, grown around its centre and kept inside the band
/// horizontally and the content vertically.
pub fn draw_rect(
    item: &Item,
    band: &BandConfig,
    content: (f64, f64),
    cfg: &SelectionConfig,
) -> Rect {
    let scale = draw_scale(item, cfg);
    let size = item.base * scale;
    let base = item.scaled_size();

    let mut x = item.origin.x - (size.width - base.width) * 0.5;
    let mut y = item.origin.y - (size.height - base.height) * 0.5;
    x = x.max(band.x_min);
    if x + size.width >= band.x_max {
        x = band.x_max - size.width;
    }
    y = y.max(content.0);
    if y + size.height >= content.1 {
        y = content.1 - size.height;
    }
    Rect::new(x, y, x + size.width, y + size.height)
}

/// Screen-space view of `item`, or `None` when it lies wholly outside the viewport band.
pub fn item_view(
    index: usize,
    item: &Item,
    viewport: &Viewport,
    band: &BandConfig,
    content: (f64, f64),
    brightness: f64,
    cfg: &SelectionConfig,
) -> Option<ItemView> {
    let rect = draw_rect(item, band, content, cfg);
    let above = rect.y0 < viewport.offset() && rect.y1 <= viewport.offset();
    let below = rect.y0 >= viewport.bottom() && rect.y1 > viewport.bottom();
    if above || below {
        return None;
    }

    let dy = viewport.to_screen_y(rect.y0, band) - rect.y0;
    let rect = rect + Vec2::new(0.0, dy);
    let shadow = item.selected.then(|| {
        let w = rect.width() * cfg.shadow_scale.0;
        let h = rect.height() * cfg.shadow_scale.1;
        let x = rect.x0 - (w - rect.width()) * 0.5;
        Shadow {
            rect: Rect::new(x, rect.y0, x + w, rect.y0 + h),
            alpha: cfg.shadow_alpha,
        }
    });

    Some(ItemView {
        index,
        image: item.image,
        rect,
        scale: draw_scale(item, cfg),
        brightness,
        shadow,
        outline: item.selected.then_some(item.outline),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/view/selection.rs"]
mod tests;
