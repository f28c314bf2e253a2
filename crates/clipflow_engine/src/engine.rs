use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ApiSettings, ReqwestApi, ScriptApi};
use crate::{ApiError, EngineEvent, ScriptForm};

enum EngineCommand {
    LoadVoices,
    PreviewVoice { voice: String },
    SuggestKeywords { title: String, prompt: String },
    Submit { form: ScriptForm },
    CheckStatus,
    FetchClips { location: String },
}

/// Command side of the engine. Cheap to clone; the matching event receiver is
/// returned once from [`EngineHandle::new`] and pumped by the caller.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<(Self, mpsc::Receiver<EngineEvent>), ApiError> {
        let api: Arc<dyn ScriptApi> = Arc::new(ReqwestApi::new(settings)?);
        Ok(Self::with_api(api))
    }

    /// Engine over any [`ScriptApi`] implementation; the seam tests use.
    pub fn with_api(api: Arc<dyn ScriptApi>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn load_voices(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadVoices);
    }

    pub fn preview_voice(&self, voice: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::PreviewVoice {
            voice: voice.into(),
        });
    }

    pub fn suggest_keywords(&self, title: impl Into<String>, prompt: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SuggestKeywords {
            title: title.into(),
            prompt: prompt.into(),
        });
    }

    pub fn submit(&self, form: ScriptForm) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { form });
    }

    pub fn check_status(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckStatus);
    }

    pub fn fetch_clips(&self, location: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchClips {
            location: location.into(),
        });
    }
}

async fn run_command(api: &dyn ScriptApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::LoadVoices => EngineEvent::VoicesLoaded {
            result: api.voices().await,
        },
        EngineCommand::PreviewVoice { voice } => {
            let result = api.voice_preview(&voice).await;
            EngineEvent::VoicePreviewReady { voice, result }
        }
        EngineCommand::SuggestKeywords { title, prompt } => EngineEvent::KeywordsSuggested {
            result: api.suggest_keywords(&title, &prompt).await,
        },
        EngineCommand::Submit { form } => EngineEvent::SubmitCompleted {
            result: api.submit_script(&form).await,
        },
        EngineCommand::CheckStatus => EngineEvent::StatusChecked {
            result: api.regeneration_status().await,
        },
        EngineCommand::FetchClips { location } => EngineEvent::ClipsFetched {
            result: api.clips(&location).await,
        },
    }
}
