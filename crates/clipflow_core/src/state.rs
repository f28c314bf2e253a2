use std::time::Duration;

use crate::clips::ClipTable;
use crate::view_model::AppViewModel;

/// Fixed spacing between status polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Session-wide deadline; a watch that has not reached a terminal status by
/// then is abandoned.
pub const WATCH_DEADLINE: Duration = Duration::from_millis(300_000);

/// Voice preselected when the server's list contains it.
pub const DEFAULT_VOICE: &str = "en-US-AvaMultilingualNeural";

/// Terminal-success token from the submit endpoint (already uppercased by the
/// wire layer).
pub const CLIPS_READY: &str = "CLIPS_READY";

/// Terminal-success text from the status endpoint. Spelled differently from
/// [`CLIPS_READY`] on purpose: the two server code paths emit distinct
/// literals and both must keep matching.
pub const REGENERATION_COMPLETE: &str = "Regeneration complete";

/// Status texts with this prefix are terminal failures.
pub const ERROR_PREFIX: &str = "Error";

/// Shown when the watch enters polling.
pub const WAITING_MESSAGE: &str =
    "Downloading content – please wait... You will be switched to Clips once finished.";

/// Shown when the deadline elapses without a terminal status.
pub const TIMEOUT_MESSAGE: &str = "Process is taking longer than expected. \
     You can try refreshing the page or going to the Clips tab manually.";

/// Lifecycle of a single watch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchState {
    #[default]
    Idle,
    /// The one-shot submit request is in flight.
    Submitted,
    /// Recurring status polls are active.
    Polling,
    Done,
    Failed,
    TimedOut,
}

impl WatchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed | Self::TimedOut)
    }
}

/// Field values carried by the script submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptForm {
    pub video_title: String,
    pub script_text: String,
    pub voice: Option<String>,
    pub keywords: Option<String>,
    /// Maps to the save-regenerate button of the script form.
    pub regenerate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    watch: WatchState,
    form: ScriptForm,
    current_project_id: Option<String>,
    session_project_id: Option<String>,
    status_line: Option<String>,
    voices: Vec<String>,
    selected_voice: Option<String>,
    keyword_suggestion: Option<String>,
    awaiting_keywords: bool,
    last_preview: Option<Result<u64, String>>,
    clips: ClipTable,
    dirty: bool,
}

impl AppState {
    /// `current_project_id` is the in-memory identifier for this run;
    /// `session_project_id` is the session-store fallback restored at startup.
    pub fn new(
        form: ScriptForm,
        current_project_id: Option<String>,
        session_project_id: Option<String>,
    ) -> Self {
        Self {
            form,
            current_project_id,
            session_project_id,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            watch: self.watch,
            status_line: self.status_line.clone(),
            voices: self.voices.clone(),
            selected_voice: self.selected_voice.clone(),
            keyword_suggestion: self.keyword_suggestion.clone(),
            last_preview: self.last_preview.clone(),
            clips: self.clips.row_views(),
            dirty: self.dirty,
        }
    }

    pub fn watch(&self) -> WatchState {
        self.watch
    }

    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    pub fn form(&self) -> &ScriptForm {
        &self.form
    }

    pub fn awaiting_keywords(&self) -> bool {
        self.awaiting_keywords
    }

    /// Navigation target for a successful watch. The identifier comes from
    /// the in-memory value, then the session fallback, then empty.
    pub fn clips_url(&self) -> String {
        let id = self
            .current_project_id
            .as_deref()
            .or(self.session_project_id.as_deref())
            .unwrap_or("");
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("project_id", id)
            .finish();
        format!("/clips?{query}")
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_voices(&mut self, voices: Vec<String>) {
        self.selected_voice = voices
            .iter()
            .find(|v| v.as_str() == DEFAULT_VOICE)
            .cloned();
        self.voices = voices;
        self.mark_dirty();
    }

    pub(crate) fn set_last_preview(&mut self, result: Result<u64, String>) {
        self.last_preview = Some(result);
        self.mark_dirty();
    }

    pub(crate) fn set_awaiting_keywords(&mut self, awaiting: bool) {
        self.awaiting_keywords = awaiting;
    }

    pub(crate) fn set_keyword_suggestion(&mut self, suggestion: String) {
        self.keyword_suggestion = Some(suggestion);
        self.mark_dirty();
    }

    pub(crate) fn confirm_keywords(&mut self, keywords: String) {
        self.form.keywords = Some(keywords);
        self.keyword_suggestion = None;
        self.awaiting_keywords = false;
        self.mark_dirty();
    }

    /// Move to `Submitted` and produce the submit effect with the form as it
    /// stands, stamped with the currently selected voice when the form has
    /// none of its own.
    pub(crate) fn begin_submit(&mut self) -> Vec<crate::Effect> {
        self.watch = WatchState::Submitted;
        self.mark_dirty();
        let mut form = self.form.clone();
        if form.voice.is_none() {
            form.voice = self.selected_voice.clone();
        }
        vec![crate::Effect::SubmitScript { form }]
    }

    pub(crate) fn enter_polling(&mut self) {
        self.watch = WatchState::Polling;
        // The status line exists only from the first entry into polling.
        self.status_line = Some(WAITING_MESSAGE.to_string());
        self.mark_dirty();
    }

    pub(crate) fn finish_watch(&mut self, terminal: WatchState) {
        debug_assert!(terminal.is_terminal());
        self.watch = terminal;
        self.mark_dirty();
    }

    pub(crate) fn reset_watch(&mut self) {
        self.watch = WatchState::Idle;
        self.mark_dirty();
    }

    pub(crate) fn set_status_line(&mut self, text: impl Into<String>) {
        self.status_line = Some(text.into());
        self.mark_dirty();
    }

    pub(crate) fn set_clips(&mut self, paths: Vec<String>) {
        self.clips.replace(paths);
        self.mark_dirty();
    }

    pub(crate) fn move_clip_row(&mut self, from: usize, to: usize) {
        if self.clips.move_row(from, to) {
            self.mark_dirty();
        }
    }
}
