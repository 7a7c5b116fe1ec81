//! Collaborator seams and the frame driver that wires them to a [`MenuSession`].

use tracing::{info, warn};

use crate::app::effects::{Cue, Effect};
use crate::app::session::MenuSession;
use crate::app::state::AppState;
use crate::foundation::error::TitleGridResult;
use crate::navigation::input::FrameInput;
use crate::render::draw::{Renderer, build_draw_list};

/// Fire-and-forget sound playback.
pub trait AudioSink {
    /// Play `cue` once.
    fn play(&mut self, cue: Cue);
}

/// Receives loader progress in `[0, 1]`.
pub trait ProgressSink {
    /// Called by the loader whenever it makes progress.
    fn on_progress(&mut self, progress: f64);
}

/// Outcome of a load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Still loading; the menu keeps waiting.
    Pending,
    /// Loaded; control passes to the title.
    Ready,
}

/// Prepares a title for boot.
///
/// `begin_load` is called once per confirmed title. Cancelling in the menu does not abort
/// a load already in flight; `poll` is simply no longer called.
pub trait LoaderHandoff {
    /// Start loading `title_id`, reporting progress to `progress`.
    fn begin_load(
        &mut self,
        title_id: &str,
        progress: &mut dyn ProgressSink,
    ) -> TitleGridResult<LoadStatus>;

    /// Check on a pending load, once per frame while the menu waits.
    fn poll(&mut self, _progress: &mut dyn ProgressSink) -> TitleGridResult<LoadStatus> {
        Ok(LoadStatus::Pending)
    }
}

/// Audio sink that drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Owns a session and its audio and loader collaborators and runs whole frames.
pub struct Host<A, L> {
    session: MenuSession,
    audio: A,
    loader: L,
}

impl<A: AudioSink, L: LoaderHandoff> Host<A, L> {
    /// Wrap `session`.
    pub fn new(session: MenuSession, audio: A, loader: L) -> Self {
        Self {
            session,
            audio,
            loader,
        }
    }

    /// Borrow the session.
    pub fn session(&self) -> &MenuSession {
        &self.session
    }

    /// Borrow the audio collaborator.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Borrow the loader collaborator.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Run one frame: update, dispatch the resulting effects, then draw.
    ///
    /// Returns the effects of the update. While the menu waits on a load the loader is
    /// polled; a failing loader is logged and leaves the menu waiting, where the user can
    /// still cancel.
    pub fn frame(
        &mut self,
        input: &FrameInput,
        renderer: &mut dyn Renderer,
    ) -> TitleGridResult<Vec<Effect>> {
        let effects = self.session.update(input);
        let mut began = false;
        for effect in &effects {
            match effect {
                Effect::PlayCue { cue } => self.audio.play(*cue),
                Effect::BeginLoad { title_id } => {
                    began = true;
                    info!(title_id = %title_id, "handing title to loader");
                    let status = self.loader.begin_load(title_id, self.session.spinner_mut());
                    self.settle(status);
                }
                Effect::ReleaseLogo | Effect::CatalogRejected { .. } => {}
            }
        }
        if !began && self.session.state() == AppState::AwaitLoad {
            let status = self.loader.poll(self.session.spinner_mut());
            self.settle(status);
        }

        if self.session.is_active() {
            for cmd in build_draw_list(&self.session.view()) {
                renderer.submit(&cmd)?;
            }
        }
        Ok(effects)
    }

    fn settle(&mut self, status: TitleGridResult<LoadStatus>) {
        match status {
            Ok(LoadStatus::Ready) => self.session.load_finished(),
            Ok(LoadStatus::Pending) => {}
            Err(e) => warn!(error = %e, "loader failed"),
        }
    }

    /// Tear down, returning the session.
    pub fn into_session(self) -> MenuSession {
        self.session
    }
}
