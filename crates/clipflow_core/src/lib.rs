//! Clipflow core: pure state machine and view-model helpers.
mod clips;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use clips::{format_duration, ClipRow, ClipTable, MediaKind};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, ScriptForm, WatchState, CLIPS_READY, DEFAULT_VOICE, ERROR_PREFIX, POLL_INTERVAL,
    REGENERATION_COMPLETE, TIMEOUT_MESSAGE, WAITING_MESSAGE, WATCH_DEADLINE,
};
pub use update::update;
pub use view_model::{AppViewModel, ClipRowView};
