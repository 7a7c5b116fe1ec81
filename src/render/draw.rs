use crate::catalog::source::ImageHandle;
use crate::foundation::core::{Point, Quad, Rect, Rgba8};
use crate::foundation::error::TitleGridResult;
use crate::render::frame::{FrameView, ItemView};

const BACKDROP: Rgba8 = Rgba8::new(48, 48, 48, 255);
const PANEL: Rgba8 = Rgba8::new(255, 0, 0, 255);
const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
const OUTLINE_WIDTH: f64 = 1.0;

/// Texture a blit or quad samples from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sprite {
    /// Box art of a title.
    Title(ImageHandle),
    /// Menu logo.
    Logo,
    /// Soft drop-shadow texture.
    Shadow,
    /// Spinner dot.
    Dot,
}

/// Draw request handed to a [`Renderer`], in submission order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    /// Restrict following commands to `rect`.
    Scissor {
        /// Clip rect.
        rect: Rect,
    },
    /// Flat-color rectangle.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Sprite drawn at `origin` with a uniform scale, modulated by `tint`.
    Blit {
        /// Source texture.
        sprite: Sprite,
        /// Top-left corner.
        origin: Point,
        /// Uniform scale.
        scale: f64,
        /// Color multiplier.
        tint: Rgba8,
    },
    /// Two-triangle quad, flat or textured.
    Quad {
        /// Corners.
        quad: Quad,
        /// Fill color (or texture multiplier).
        color: Rgba8,
        /// Texture stretched over the quad.
        texture: Option<Sprite>,
    },
}

/// Consumer of draw requests.
pub trait Renderer {
    /// Draw one command.
    fn submit(&mut self, cmd: &DrawCmd) -> TitleGridResult<()>;
}

/// In-memory renderer for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub(crate) cmds: Vec<DrawCmd>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Drop recorded commands.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn submit(&mut self, cmd: &DrawCmd) -> TitleGridResult<()> {
        self.cmds.push(cmd.clone());
        Ok(())
    }
}

/// Lower a [`FrameView`] into draw commands, back to front.
pub fn build_draw_list(view: &FrameView) -> Vec<DrawCmd> {
    let mut out = vec![DrawCmd::Scissor { rect: view.clip }];

    if let Some(rect) = view.background {
        out.push(DrawCmd::FillRect {
            rect,
            color: BACKDROP,
        });
    }

    if let Some(quad) = view.sidebar {
        let clip = view.clip;
        out.push(DrawCmd::Scissor {
            rect: Rect::new(view.grid_clip_left, clip.y0, clip.x1, clip.y1),
        });
        for item in &view.items {
            push_item(&mut out, item);
        }
        out.push(DrawCmd::Scissor { rect: view.clip });
        out.push(DrawCmd::Quad {
            quad,
            color: PANEL,
            texture: None,
        });
    }

    if let Some(mask) = view.mask {
        out.push(DrawCmd::Quad {
            quad: mask.quad,
            color: Rgba8::black_alpha(mask.alpha),
            texture: None,
        });
    }

    for dot in &view.spinner {
        out.push(DrawCmd::Blit {
            sprite: Sprite::Dot,
            origin: dot.origin,
            scale: dot.scale,
            tint: WHITE.with_alpha(dot.alpha),
        });
    }

    if let Some(logo) = view.logo {
        out.push(DrawCmd::FillRect {
            rect: logo.card,
            color: PANEL,
        });
        out.push(DrawCmd::Blit {
            sprite: Sprite::Logo,
            origin: logo.origin,
            scale: 1.0,
            tint: WHITE,
        });
    }

    if let Some(fade) = view.fade {
        out.push(DrawCmd::Quad {
            quad: Quad::from_rect(view.screen),
            color: Rgba8::black_alpha(fade),
            texture: None,
        });
    }
    out
}

fn push_item(out: &mut Vec<DrawCmd>, item: &ItemView) {
    if let Some(shadow) = item.shadow {
        out.push(DrawCmd::Quad {
            quad: Quad::from_rect(shadow.rect),
            color: Rgba8::black_alpha(shadow.alpha),
            texture: Some(Sprite::Shadow),
        });
    }
    out.push(DrawCmd::Blit {
        sprite: Sprite::Title(item.image),
        origin: item.rect.origin(),
        scale: item.scale,
        tint: Rgba8::gray(item.brightness),
    });
    if let Some(level) = item.outline {
        let color = Rgba8::gray(level);
        let x = item.rect.x0.round();
        let y = item.rect.y0.round();
        let x1 = x + item.rect.width().ceil();
        let y1 = y + item.rect.height().ceil();
        let w = OUTLINE_WIDTH;
        for rect in [
            Rect::new(x, y, x1, y + w),
            Rect::new(x, y1 - w, x1, y1),
            Rect::new(x, y, x + w, y1),
            Rect::new(x1 - w, y, x1, y1),
        ] {
            out.push(DrawCmd::FillRect { rect, color });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
