/// Sound cues the menu asks the audio collaborator to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Logo jingle during the logo wait.
    TitleLogo,
    /// Cursor moved to another slot.
    Move,
    /// Cursor hit an edge.
    LimitReached,
    /// Sidebar started opening.
    SidebarOpen,
    /// Sidebar started closing.
    SidebarClose,
    /// A title was confirmed.
    Confirm,
}

/// Side effect requested by one session update, returned as data.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Play a sound cue.
    PlayCue {
        /// Cue to play.
        cue: Cue,
    },
    /// The logo image is no longer drawn and may be freed.
    ReleaseLogo,
    /// Start loading the confirmed title.
    BeginLoad {
        /// Identifier of the confirmed title.
        title_id: String,
    },
    /// The catalog could not be laid out; the menu continues empty.
    CatalogRejected {
        /// Human-readable cause.
        reason: String,
    },
}

impl Effect {
    pub(crate) fn cue(cue: Cue) -> Self {
        Self::PlayCue { cue }
    }
}
