use std::mem::discriminant;

use tracing::{debug, error, info};

use crate::app::effects::{Cue, Effect};
use crate::app::spinner::Spinner;
use crate::app::state::AppState;
use crate::catalog::source::CatalogSource;
use crate::config::MenuConfig;
use crate::foundation::core::{FrameIndex, Point, Quad, Rect};
use crate::foundation::error::TitleGridResult;
use crate::foundation::math::lerp_rect;
use crate::grid::item::Item;
use crate::grid::layout::Grid;
use crate::navigation::cursor::{Axes, Cursor};
use crate::navigation::input::FrameInput;
use crate::render::frame::{FrameView, LogoView, MaskView};
use crate::view::selection;
use crate::view::sidebar::Sidebar;
use crate::view::viewport::Viewport;

/// Slack when comparing the accumulated transition fade against its bounds.
const FADE_EPSILON: f64 = 1e-9;

/// All state of one menu run, from the first fade-in frame to the load handoff.
///
/// Each [`MenuSession::update`] advances exactly one frame and returns the side effects it
/// wants performed; [`MenuSession::view`] describes what to draw for the current frame.
/// Controllers run in a fixed order: cursor, selection, viewport, animators, sidebar.
pub struct MenuSession {
    cfg: MenuConfig,
    catalog: Box<dyn CatalogSource>,
    state: AppState,
    frame: FrameIndex,
    grid: Grid,
    cursor: Cursor,
    viewport: Viewport,
    sidebar: Sidebar,
    spinner: Spinner,
    selected: Option<usize>,
    transition: f64,
    logo_offset: f64,
}

impl MenuSession {
    /// Start a session at the beginning of the fade-in.
    ///
    /// The catalog is read when the logo wait expires, not here.
    #[tracing::instrument(skip_all)]
    pub fn new(cfg: MenuConfig, catalog: Box<dyn CatalogSource>) -> TitleGridResult<Self> {
        cfg.validate()?;
        info!(
            columns = cfg.grid.columns,
            capacity = cfg.grid.capacity,
            "menu session started"
        );
        Ok(Self {
            state: AppState::FadeIn {
                remaining: cfg.timeline.fade_in,
            },
            frame: FrameIndex::default(),
            grid: Grid::empty(&cfg),
            cursor: Cursor::default(),
            viewport: Viewport::new(&cfg.band),
            sidebar: Sidebar::new(&cfg.sidebar, cfg.screen.height),
            spinner: Spinner::new(cfg.spinner),
            selected: None,
            transition: 0.0,
            logo_offset: 0.0,
            catalog,
            cfg,
        })
    }

    /// Advance one frame.
    pub fn update(&mut self, input: &FrameInput) -> Vec<Effect> {
        let mut fx = Vec::new();
        if !self.is_active() {
            return fx;
        }
        self.frame = self.frame.next();
        self.advance_intro(&mut fx);
        if self.state.runs_menu() {
            self.update_menu(input, &mut fx);
        }
        fx
    }

    fn advance_intro(&mut self, fx: &mut Vec<Effect>) {
        let tl = self.cfg.timeline;
        match self.state {
            AppState::FadeIn { remaining } => {
                let remaining = remaining.saturating_sub(1);
                self.enter(if remaining == 0 {
                    AppState::LogoWait {
                        remaining: tl.logo_wait,
                    }
                } else {
                    AppState::FadeIn { remaining }
                });
            }
            AppState::LogoWait { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == tl.logo_cue_at {
                    fx.push(Effect::cue(Cue::TitleLogo));
                }
                if remaining == 0 {
                    self.load_catalog(fx);
                    self.enter(AppState::LogoExit {
                        remaining: tl.logo_exit,
                    });
                } else {
                    self.enter(AppState::LogoWait { remaining });
                }
            }
            AppState::LogoExit { remaining } => {
                let done = 1.0 - f64::from(remaining) / f64::from(tl.logo_exit);
                self.logo_offset = done * tl.logo_exit_distance;
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    fx.push(Effect::ReleaseLogo);
                    self.enter(AppState::Browse);
                } else {
                    self.enter(AppState::LogoExit { remaining });
                }
            }
            _ => {}
        }
    }

    fn load_catalog(&mut self, fx: &mut Vec<Effect>) {
        let loaded = self
            .catalog
            .load()
            .and_then(|entries| Grid::build(entries, &self.cfg));
        self.grid = match loaded {
            Ok(grid) => {
                debug!(titles = grid.items().len(), "catalog loaded");
                grid
            }
            Err(e) => {
                error!(error = %e, "catalog rejected");
                fx.push(Effect::CatalogRejected {
                    reason: e.to_string(),
                });
                Grid::empty(&self.cfg)
            }
        };
        self.cursor = Cursor::default();
        self.viewport = Viewport::new(&self.cfg.band);
        self.selected = None;
    }

    fn update_menu(&mut self, input: &FrameInput, fx: &mut Vec<Effect>) {
        let browsing = self.state == AppState::Browse;
        let deadzone = self.cfg.cursor.deadzone;
        let axes = browsing.then(|| Axes {
            x: input.axis_x(deadzone),
            y: input.axis_y(deadzone),
        });

        let outcome = self.cursor.update(&self.grid, axes, &self.cfg.cursor);
        if outcome.limit_reached {
            fx.push(Effect::cue(Cue::LimitReached));
        }
        if outcome.moved {
            fx.push(Effect::cue(Cue::Move));
        }

        self.selected = self.cursor.selected_index(&self.grid);
        let selected = self.selected;
        for (idx, item) in self.grid.items_mut().iter_mut().enumerate() {
            item.selected = selected == Some(idx);
        }

        if browsing && input.confirm {
            if let Some(item) = selected.and_then(|idx| self.grid.items_mut().get_mut(idx)) {
                item.grow = 0.0;
                fx.push(Effect::cue(Cue::Confirm));
                self.enter(AppState::ConfirmGrow);
            }
        }

        for item in self.grid.items_mut() {
            selection::animate(item, &self.cfg.selection);
        }

        let midpoint = selected
            .and_then(|idx| self.grid.item(idx))
            .map(Item::midpoint_y);
        self.viewport
            .update(midpoint, &self.grid, &self.cfg.band, &self.cfg.viewport);

        if let Some(cue) = self.sidebar.update(
            self.cursor.in_sidebar(),
            &self.cfg.sidebar,
            self.cfg.screen.height,
        ) {
            fx.push(Effect::cue(cue));
        }

        self.advance_transition(input, fx);
    }

    fn advance_transition(&mut self, input: &FrameInput, fx: &mut Vec<Effect>) {
        let tl = self.cfg.timeline;
        match self.state {
            AppState::ConfirmGrow => {
                self.transition += tl.confirm_step;
                if self.transition >= 1.0 - FADE_EPSILON {
                    self.transition = 1.0;
                    self.enter(AppState::AwaitLoad);
                    if let Some(item) = self.selected_item() {
                        info!(title_id = %item.id, "requesting title load");
                        fx.push(Effect::BeginLoad {
                            title_id: item.id.clone(),
                        });
                    }
                }
            }
            AppState::AwaitLoad => {
                if input.cancel {
                    self.spinner.reset();
                    self.enter(AppState::CancelShrink);
                } else {
                    self.spinner.tick();
                }
            }
            AppState::CancelShrink => {
                self.transition -= tl.cancel_step;
                if self.transition <= FADE_EPSILON {
                    self.transition = 0.0;
                    self.enter(AppState::Browse);
                }
            }
            _ => {}
        }
    }

    fn enter(&mut self, next: AppState) {
        if discriminant(&next) != discriminant(&self.state) {
            debug!(
                frame = self.frame.0,
                from = self.state.name(),
                to = next.name(),
                "state transition"
            );
        }
        self.state = next;
    }

    /// Mark the requested load as complete; the session ends in [`AppState::Handoff`].
    ///
    /// Ignored unless the session is waiting on a load.
    pub fn load_finished(&mut self) {
        if self.state != AppState::AwaitLoad {
            debug!(state = self.state.name(), "load completion ignored");
            return;
        }
        info!(frame = self.frame.0, "handing off to loaded title");
        self.enter(AppState::Handoff);
    }

    /// Whether the menu still runs (not yet handed off).
    pub fn is_active(&self) -> bool {
        self.state != AppState::Handoff
    }

    /// Draw-facing description of the current frame.
    pub fn view(&self) -> FrameView {
        let cfg = &self.cfg;
        let band = &cfg.band;
        let screen = cfg.screen.rect();
        let menu = self.state.runs_menu();
        let grid_drawn = menu && self.state != AppState::AwaitLoad;

        let fade = match self.state {
            AppState::FadeIn { remaining } => {
                Some(f64::from(remaining) / f64::from(cfg.timeline.fade_in))
            }
            _ => None,
        };

        let logo = self.state.shows_logo().then(|| LogoView {
            card: Rect::new(
                cfg.screen.safe_x_min,
                band.y_min,
                screen.x1 - self.logo_offset,
                band.y_max,
            ),
            origin: Point::new(
                cfg.timeline.logo_origin.x - self.logo_offset,
                cfg.timeline.logo_origin.y,
            ),
        });

        let mut items = Vec::new();
        if grid_drawn {
            let content = (self.grid.content_top(), self.grid.content_bottom());
            let brightness = self.sidebar.brightness();
            let order = (0..self.grid.items().len())
                .filter(|&idx| Some(idx) != self.selected)
                .chain(self.selected);
            for idx in order {
                let Some(item) = self.grid.item(idx) else {
                    continue;
                };
                if let Some(view) = selection::item_view(
                    idx,
                    item,
                    &self.viewport,
                    band,
                    content,
                    brightness,
                    &cfg.selection,
                ) {
                    items.push(view);
                }
            }
        }

        FrameView {
            frame: self.frame,
            state: self.state,
            screen,
            clip: Rect::new(cfg.screen.safe_x_min, band.y_min, band.x_max, band.y_max),
            background: menu.then(|| Rect::new(band.x_min, band.y_min, band.x_max, band.y_max)),
            grid_clip_left: self.logo_offset.min(self.sidebar.width()),
            brightness: self.sidebar.brightness(),
            items,
            sidebar: grid_drawn.then(|| self.sidebar.quad()),
            mask: self.mask(),
            spinner: if self.state == AppState::AwaitLoad {
                self.spinner.dots()
            } else {
                Vec::new()
            },
            logo,
            fade,
        }
    }

    /// Transition mask: a small square on the confirmed title lerped out to the screen.
    fn mask(&self) -> Option<MaskView> {
        if !self.state.shows_mask() {
            return None;
        }
        let item = self.selected_item()?;
        let rect = item.layout_rect();
        let centre = Point::new(
            rect.center().x,
            self.viewport.to_screen_y(rect.center().y, &self.cfg.band),
        );
        let half = self.cfg.timeline.mask_start_size * 0.5;
        let start = Rect::new(centre.x - half, centre.y - half, centre.x + half, centre.y + half);
        Some(MaskView {
            quad: Quad::from_rect(lerp_rect(self.transition, start, self.cfg.screen.rect())),
            alpha: self.transition,
        })
    }

    fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|idx| self.grid.item(idx))
    }

    /// Current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Frames updated so far.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Configuration the session runs with.
    pub fn config(&self) -> &MenuConfig {
        &self.cfg
    }

    /// Laid-out grid (empty until the logo wait expires).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cursor position.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Scroll state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Side panel state.
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Load spinner.
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Load spinner, as the progress sink handed to the loader.
    pub fn spinner_mut(&mut self) -> &mut Spinner {
        &mut self.spinner
    }

    /// Dense index of the selected item.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Confirm transition fade in `[0, 1]`.
    pub fn transition(&self) -> f64 {
        self.transition
    }
}

impl std::fmt::Debug for MenuSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuSession")
            .field("state", &self.state)
            .field("frame", &self.frame)
            .field("cursor", &self.cursor)
            .field("selected", &self.selected)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
