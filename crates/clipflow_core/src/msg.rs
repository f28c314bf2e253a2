#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App startup; triggers the initial voice-list load.
    Started,
    /// Voice list arrived (or failed; the shell already logged it).
    VoicesLoaded(Result<Vec<String>, String>),
    /// User asked for a voice preview.
    TestVoiceClicked,
    /// Preview bytes were stored (byte count) or lost.
    VoicePreviewReady(Result<u64, String>),
    /// User triggered Save & Regenerate.
    RegenerateClicked { modify_keywords: bool },
    /// Suggested keywords arrived for the user to edit.
    KeywordsSuggested(Result<Vec<String>, String>),
    /// User finished editing keywords; the edited string goes into the form.
    KeywordsConfirmed(String),
    /// The one-shot submit finished: a status token, or a transport error.
    SubmitCompleted(Result<String, String>),
    /// Recurring poll timer fired.
    PollTick,
    /// A status poll finished: verbatim body text, or a transport error.
    PollResult(Result<String, String>),
    /// The session deadline timer fired.
    DeadlineElapsed,
    /// Clip manifest paths for the table view.
    ClipsLoaded(Vec<String>),
    /// User moved a clip row.
    ClipRowMoved { from: usize, to: usize },
    /// Fallback for events with no state impact.
    NoOp,
}
