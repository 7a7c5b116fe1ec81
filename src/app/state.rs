/// Top-level menu state.
///
/// `FadeIn -> LogoWait -> LogoExit -> Browse`, then `Browse -> ConfirmGrow -> AwaitLoad`,
/// which either completes into `Handoff` or is cancelled through `CancelShrink` back to
/// `Browse`. Counters hold the frames remaining in the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppState {
    /// Fading in from black.
    FadeIn {
        /// Frames left.
        remaining: u32,
    },
    /// Logo card on screen.
    LogoWait {
        /// Frames left.
        remaining: u32,
    },
    /// Logo card sliding out over the grid.
    LogoExit {
        /// Frames left.
        remaining: u32,
    },
    /// Cursor input accepted.
    Browse,
    /// Transition mask growing from the confirmed title.
    ConfirmGrow,
    /// Waiting for the loader; the spinner runs.
    AwaitLoad,
    /// Transition mask shrinking back after a cancel.
    CancelShrink,
    /// Control handed to the loaded title; the menu is finished.
    Handoff,
}

impl AppState {
    /// Short lowercase name, stable for logs and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FadeIn { .. } => "fade_in",
            Self::LogoWait { .. } => "logo_wait",
            Self::LogoExit { .. } => "logo_exit",
            Self::Browse => "browse",
            Self::ConfirmGrow => "confirm_grow",
            Self::AwaitLoad => "await_load",
            Self::CancelShrink => "cancel_shrink",
            Self::Handoff => "handoff",
        }
    }

    /// Whether the grid and its controllers are live.
    pub fn runs_menu(&self) -> bool {
        matches!(
            self,
            Self::LogoExit { .. }
                | Self::Browse
                | Self::ConfirmGrow
                | Self::AwaitLoad
                | Self::CancelShrink
        )
    }

    /// Whether the logo card is still drawn.
    pub fn shows_logo(&self) -> bool {
        matches!(
            self,
            Self::FadeIn { .. } | Self::LogoWait { .. } | Self::LogoExit { .. }
        )
    }

    /// Whether the confirm transition mask is drawn.
    pub fn shows_mask(&self) -> bool {
        matches!(self, Self::ConfirmGrow | Self::AwaitLoad | Self::CancelShrink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
