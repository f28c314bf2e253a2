use crate::ScriptForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the voice list.
    LoadVoices,
    /// Fetch preview audio for a voice.
    PreviewVoice { voice: String },
    /// Ask the server for keyword suggestions.
    SuggestKeywords { title: String, prompt: String },
    /// Send the script form to the submit endpoint.
    SubmitScript { form: ScriptForm },
    /// Arm the poll interval and the session deadline.
    StartPolling,
    /// Issue one status poll.
    PollStatus,
    /// Cancel the poll interval and the deadline together.
    StopPolling,
    /// Move the user to the clips view. Emitted at most once per session.
    NavigateToClips { url: String },
    /// Blocking notification.
    Alert { text: String },
}
