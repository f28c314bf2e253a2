use crate::{AppState, Effect, Msg, WatchState, ERROR_PREFIX, REGENERATION_COMPLETE, TIMEOUT_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every timer and network callback lands here, so the watch state is the
/// single value deciding whether a late message still gets to act. Messages
/// that arrive after a terminal transition fall through without effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::LoadVoices],
        Msg::VoicesLoaded(Ok(voices)) => {
            state.set_voices(voices);
            Vec::new()
        }
        // The picker stays empty; never fatal.
        Msg::VoicesLoaded(Err(_)) => Vec::new(),
        Msg::TestVoiceClicked => match state.selected_voice() {
            Some(voice) => vec![Effect::PreviewVoice {
                voice: voice.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::VoicePreviewReady(result) => {
            state.set_last_preview(result);
            Vec::new()
        }
        Msg::RegenerateClicked { modify_keywords } => {
            if state.watch() != WatchState::Idle {
                return (state, Vec::new());
            }
            if modify_keywords {
                state.set_awaiting_keywords(true);
                vec![Effect::SuggestKeywords {
                    title: state.form().video_title.clone(),
                    prompt: state.form().script_text.clone(),
                }]
            } else {
                state.begin_submit()
            }
        }
        Msg::KeywordsSuggested(result) => {
            if !state.awaiting_keywords() {
                return (state, Vec::new());
            }
            match result {
                Ok(keywords) => {
                    state.set_keyword_suggestion(keywords.join(", "));
                    Vec::new()
                }
                // Suggestion service is down; submit the form as-is.
                Err(_) => {
                    state.set_awaiting_keywords(false);
                    state.begin_submit()
                }
            }
        }
        Msg::KeywordsConfirmed(keywords) => {
            if !state.awaiting_keywords() {
                return (state, Vec::new());
            }
            state.confirm_keywords(keywords);
            state.begin_submit()
        }
        Msg::SubmitCompleted(result) => {
            if state.watch() != WatchState::Submitted {
                return (state, Vec::new());
            }
            match result {
                Err(err) => {
                    state.reset_watch();
                    vec![Effect::Alert {
                        text: format!("Network error: {err}"),
                    }]
                }
                Ok(token) if token == crate::CLIPS_READY => {
                    state.finish_watch(WatchState::Done);
                    vec![Effect::NavigateToClips {
                        url: state.clips_url(),
                    }]
                }
                Ok(_) => {
                    state.enter_polling();
                    vec![Effect::StartPolling]
                }
            }
        }
        Msg::PollTick => {
            if state.watch() == WatchState::Polling {
                vec![Effect::PollStatus]
            } else {
                Vec::new()
            }
        }
        Msg::PollResult(result) => {
            if state.watch() != WatchState::Polling {
                return (state, Vec::new());
            }
            match result {
                Ok(text) if text == REGENERATION_COMPLETE => {
                    state.finish_watch(WatchState::Done);
                    vec![
                        Effect::StopPolling,
                        Effect::NavigateToClips {
                            url: state.clips_url(),
                        },
                    ]
                }
                Ok(text) if text.starts_with(ERROR_PREFIX) => {
                    state.finish_watch(WatchState::Failed);
                    vec![
                        Effect::StopPolling,
                        Effect::Alert {
                            text: format!("There was an error during regeneration: {text}"),
                        },
                    ]
                }
                Ok(text) if !text.is_empty() => {
                    state.set_status_line(text);
                    Vec::new()
                }
                // Empty body or a transport hiccup: still in progress.
                Ok(_) | Err(_) => Vec::new(),
            }
        }
        Msg::DeadlineElapsed => {
            if state.watch() != WatchState::Polling {
                return (state, Vec::new());
            }
            state.finish_watch(WatchState::TimedOut);
            state.set_status_line(TIMEOUT_MESSAGE);
            vec![Effect::StopPolling]
        }
        Msg::ClipsLoaded(paths) => {
            state.set_clips(paths);
            Vec::new()
        }
        Msg::ClipRowMoved { from, to } => {
            state.move_clip_row(from, to);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
