use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use client_logging::{client_debug, client_error, client_info, client_warn};
use clipflow_core::{Effect, Msg, POLL_INTERVAL, WATCH_DEADLINE};
use clipflow_engine::{ApiError, ApiSettings, EngineEvent, EngineHandle};

use crate::timers::WatchTimers;

/// Executes core effects against the engine and the watch timers, and pumps
/// engine events back into the message channel.
pub struct EffectRunner {
    engine: EngineHandle,
    timers: WatchTimers,
    msg_tx: mpsc::Sender<Msg>,
    base_url: String,
    poll_cycles: u64,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, ApiError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let (engine, event_rx) = EngineHandle::new(settings)?;
        spawn_event_pump(event_rx, msg_tx.clone());
        Ok(Self {
            engine,
            timers: WatchTimers::default(),
            msg_tx,
            base_url,
            poll_cycles: 0,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadVoices => self.engine.load_voices(),
                Effect::PreviewVoice { voice } => {
                    client_info!("Requesting voice preview for {}", voice);
                    self.engine.preview_voice(voice);
                }
                Effect::SuggestKeywords { title, prompt } => {
                    self.engine.suggest_keywords(title, prompt);
                }
                Effect::SubmitScript { form } => {
                    client_info!(
                        "Submitting script form title={:?} len={}",
                        form.video_title,
                        form.script_text.len()
                    );
                    self.engine.submit(map_form(form));
                }
                Effect::StartPolling => {
                    if self.timers.is_active() {
                        client_warn!("Restarting watch timers with a session still active");
                    }
                    self.poll_cycles = 0;
                    self.timers
                        .start(self.msg_tx.clone(), POLL_INTERVAL, WATCH_DEADLINE);
                }
                Effect::PollStatus => {
                    self.poll_cycles += 1;
                    client_logging::set_watch_cycle(self.poll_cycles);
                    client_debug!("Status poll cycle {}", self.poll_cycles);
                    self.engine.check_status();
                }
                Effect::StopPolling => {
                    self.timers.stop();
                    client_info!(
                        "Polling stopped after {} cycles",
                        client_logging::get_watch_cycle()
                    );
                }
                Effect::NavigateToClips { url } => {
                    println!("Opening {}{}", self.base_url, url);
                    client_info!("Navigating to {}", url);
                    self.engine.fetch_clips(url);
                }
                Effect::Alert { text } => {
                    eprintln!("{text}");
                    client_error!("{}", text);
                }
            }
        }
    }
}

/// Converts engine completions into core messages. Transport noise that the
/// state machine is not supposed to see gets logged here.
fn spawn_event_pump(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    let preview_path = voice_preview_path();
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::VoicesLoaded { result } => match result {
                    Ok(voices) => Msg::VoicesLoaded(Ok(voices)),
                    Err(err) => {
                        client_warn!("Voice list unavailable: {}", err);
                        Msg::VoicesLoaded(Err(err.to_string()))
                    }
                },
                EngineEvent::VoicePreviewReady { voice, result } => match result {
                    Ok(bytes) => match fs::write(&preview_path, &bytes) {
                        Ok(()) => {
                            client_info!(
                                "Voice preview for {} saved to {:?}",
                                voice,
                                preview_path
                            );
                            Msg::VoicePreviewReady(Ok(bytes.len() as u64))
                        }
                        Err(err) => Msg::VoicePreviewReady(Err(err.to_string())),
                    },
                    Err(err) => {
                        client_warn!("Voice preview failed: {}", err);
                        Msg::VoicePreviewReady(Err(err.to_string()))
                    }
                },
                EngineEvent::KeywordsSuggested { result } => {
                    Msg::KeywordsSuggested(result.map_err(|err| err.to_string()))
                }
                EngineEvent::SubmitCompleted { result } => {
                    Msg::SubmitCompleted(result.map_err(|err| err.to_string()))
                }
                EngineEvent::StatusChecked { result } => match result {
                    Ok(text) => Msg::PollResult(Ok(text)),
                    Err(err) => {
                        client_warn!("Status poll failed: {}", err);
                        Msg::PollResult(Err(err.to_string()))
                    }
                },
                EngineEvent::ClipsFetched { result } => match result {
                    Ok(doc) => Msg::ClipsLoaded(doc.media_clips),
                    Err(err) => {
                        client_warn!("Clip manifest not readable: {}", err);
                        Msg::NoOp
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

/// One preview slot; a new preview replaces the previous bytes.
fn voice_preview_path() -> PathBuf {
    std::env::temp_dir().join("clipflow_voice_preview.mp3")
}

fn map_form(form: clipflow_core::ScriptForm) -> clipflow_engine::ScriptForm {
    clipflow_engine::ScriptForm {
        video_title: form.video_title,
        script_text: form.script_text,
        voice: form.voice,
        keywords: form.keywords,
        regenerate: form.regenerate,
    }
}
