use crate::clips::MediaKind;
use crate::state::WatchState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub watch: WatchState,
    /// Mirrors the status element: absent until polling begins.
    pub status_line: Option<String>,
    pub voices: Vec<String>,
    pub selected_voice: Option<String>,
    /// Suggested keywords waiting for the user's edit.
    pub keyword_suggestion: Option<String>,
    /// Byte count of the stored voice preview, or why it is missing.
    pub last_preview: Option<Result<u64, String>>,
    pub clips: Vec<ClipRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRowView {
    /// 1-based position, as shown in the table.
    pub index: usize,
    pub kind: MediaKind,
    pub path: String,
}
