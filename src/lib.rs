//! Titlegrid is the navigation and animation engine of a console title-selection menu.
//!
//! A flat catalog of titles is laid out into rows of up to `columns` items, shrinking
//! crowded rows to fit a fixed band. A [`MenuSession`] then runs the menu one frame at a
//! time:
//!
//! - fade in, show and slide away the logo, then lay out the catalog
//! - move a 2D [`Cursor`] over the irregular grid with keyboard-style auto-repeat
//! - scroll a [`Viewport`] after the selection and animate the selected item
//! - open and close the [`Sidebar`] when the cursor leaves the grid on the left
//! - confirm a title, wait for the loader, or cancel back to browsing
//!
//! Side effects (sound cues, the load request) come back from every update as [`Effect`]
//! values, and [`MenuSession::view`] describes the frame as plain geometry. [`Host`] wires
//! both to an [`AudioSink`], a [`LoaderHandoff`] and a [`Renderer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod app;
pub(crate) mod catalog;
/// Menu configuration.
pub mod config;
pub(crate) mod grid;
pub(crate) mod navigation;
pub(crate) mod render;
pub(crate) mod view;

pub use crate::foundation::core::{FrameIndex, Point, Quad, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{TitleGridError, TitleGridResult};

pub use crate::animation::ease::CubicBezier;
pub use crate::app::effects::{Cue, Effect};
pub use crate::app::host::{AudioSink, Host, LoadStatus, LoaderHandoff, ProgressSink, SilentAudio};
pub use crate::app::session::MenuSession;
pub use crate::app::spinner::Spinner;
pub use crate::app::state::AppState;
pub use crate::catalog::source::{
    CatalogEntry, CatalogSource, ImageHandle, MAX_TITLE_ID_LEN, StaticCatalog, TitleListFile,
    parse_title_list,
};
pub use crate::config::MenuConfig;
pub use crate::grid::item::Item;
pub use crate::grid::layout::{Grid, RowSpan, row_scale};
pub use crate::navigation::cursor::{Axes, Cursor, CursorOutcome, SIDEBAR_COLUMN, remap_column};
pub use crate::navigation::input::FrameInput;
pub use crate::navigation::repeat::AutoRepeat;
pub use crate::render::draw::{DrawCmd, RecordingRenderer, Renderer, Sprite, build_draw_list};
pub use crate::render::frame::{FrameView, ItemView, LogoView, MaskView, Shadow, SpinnerDot};
pub use crate::view::selection::{animate, draw_rect, draw_scale, item_view};
pub use crate::view::sidebar::Sidebar;
pub use crate::view::viewport::{Viewport, target_for};
