use crate::app::state::AppState;
use crate::catalog::source::ImageHandle;
use crate::foundation::core::{FrameIndex, Point, Quad, Rect};

/// Everything a renderer needs to draw one frame, in screen space.
///
/// Pure data: building it does not advance any animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameView {
    /// Frame this view belongs to.
    pub frame: FrameIndex,
    /// Application state the frame was produced in.
    pub state: AppState,
    /// Full output surface.
    pub screen: Rect,
    /// Drawable region.
    pub clip: Rect,
    /// Grid backdrop, once the grid is live.
    pub background: Option<Rect>,
    /// Left edge the grid is clipped at while the logo or sidebar covers it.
    pub grid_clip_left: f64,
    /// Grid brightness factor applied as a tint.
    pub brightness: f64,
    /// Visible items, unselected first, the selected item last.
    pub items: Vec<ItemView>,
    /// Sidebar panel.
    pub sidebar: Option<Quad>,
    /// Logo card before browsing starts.
    pub logo: Option<LogoView>,
    /// Confirm/cancel transition mask.
    pub mask: Option<MaskView>,
    /// Load spinner dots.
    pub spinner: Vec<SpinnerDot>,
    /// Fade-from-black overlay opacity.
    pub fade: Option<f64>,
}

/// One visible title.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemView {
    /// Dense item index.
    pub index: usize,
    /// Box art.
    pub image: ImageHandle,
    /// Screen-space rect.
    pub rect: Rect,
    /// Uniform draw scale of the image.
    pub scale: f64,
    /// Tint level in `[0, 1]`.
    pub brightness: f64,
    /// Drop shadow of the selected item.
    pub shadow: Option<Shadow>,
    /// Outline brightness of the selected item.
    pub outline: Option<f64>,
}

/// Soft drop shadow behind a selected item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    /// Screen-space extent.
    pub rect: Rect,
    /// Opacity.
    pub alpha: f64,
}

/// Sliding logo card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LogoView {
    /// Card backing.
    pub card: Rect,
    /// Top-left corner of the logo image.
    pub origin: Point,
}

/// Darkening mask grown from the confirmed title.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MaskView {
    /// Mask geometry.
    pub quad: Quad,
    /// Opacity.
    pub alpha: f64,
}

/// One spinner dot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpinnerDot {
    /// Top-left corner of the dot sprite.
    pub origin: Point,
    /// Sprite scale.
    pub scale: f64,
    /// Opacity.
    pub alpha: f64,
}
