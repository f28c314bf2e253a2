use std::fs;
use std::io::{self, BufRead, Write as _};
use std::sync::mpsc;

use anyhow::{anyhow, Context};
use client_logging::client_info;
use clipflow_core::{update, AppState, Msg, ScriptForm, WatchState};
use clipflow_engine::ApiSettings;

use crate::cli::Cli;
use crate::effects::EffectRunner;
use crate::persistence;
use crate::render::Renderer;

/// Runs the whole flow: load voices, submit the script, watch the
/// regeneration job, and land on the clips view. All decisions go through the
/// core update function; this loop only pumps messages, renders, and executes
/// effects.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let script_text = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading script file {:?}", cli.script))?;

    let session_path = cli
        .session_file
        .clone()
        .unwrap_or_else(persistence::default_session_path);
    let session_project_id = persistence::load_session_project_id(&session_path);
    if let Some(project_id) = &cli.project_id {
        persistence::save_session_project_id(&session_path, project_id);
    }

    let form = ScriptForm {
        video_title: cli.title.clone(),
        script_text,
        voice: cli.voice.clone(),
        keywords: cli.keywords.clone(),
        regenerate: true,
    };
    let mut state = AppState::new(form, cli.project_id.clone(), session_project_id);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(ApiSettings::new(cli.base_url.clone()), msg_tx.clone())
        .map_err(|err| anyhow!("starting engine: {err}"))?;
    let mut renderer = Renderer::default();

    client_info!("Watching regeneration against {}", cli.base_url);
    let _ = msg_tx.send(Msg::Started);

    let mut kicked_off = false;
    let mut keywords_prompted = false;

    while let Ok(msg) = msg_rx.recv() {
        let voices_answered = matches!(msg, Msg::VoicesLoaded(_));
        let clips_reply = matches!(msg, Msg::ClipsLoaded(_) | Msg::NoOp);
        let submit_error = match &msg {
            Msg::SubmitCompleted(Err(err)) => Some(err.clone()),
            _ => None,
        };

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        if state.consume_dirty() {
            renderer.render(&state.view());
        }
        runner.run(effects);

        // The submit flow starts once the voice list has been answered,
        // successfully or not.
        if voices_answered && !kicked_off {
            kicked_off = true;
            if cli.preview_voice {
                let _ = msg_tx.send(Msg::TestVoiceClicked);
            }
            let _ = msg_tx.send(Msg::RegenerateClicked {
                modify_keywords: cli.modify_keywords,
            });
        }

        if !keywords_prompted {
            if let Some(suggestion) = state.view().keyword_suggestion {
                keywords_prompted = true;
                let keywords = if cli.accept_keywords {
                    suggestion
                } else {
                    edit_keywords(&suggestion)?
                };
                let _ = msg_tx.send(Msg::KeywordsConfirmed(keywords));
            }
        }

        if let Some(err) = submit_error {
            return Err(anyhow!("submit failed: {err}"));
        }
        match state.view().watch {
            WatchState::Failed => return Err(anyhow!("regeneration failed")),
            WatchState::TimedOut => {
                return Err(anyhow!(
                    "regeneration timed out; check the clips page manually"
                ))
            }
            // Exit once the clips fetch behind the navigation has answered.
            WatchState::Done if clips_reply => return Ok(()),
            _ => {}
        }
    }

    Ok(())
}

fn edit_keywords(suggestion: &str) -> anyhow::Result<String> {
    println!("Suggested keywords: {suggestion}");
    print!("Edit keywords (empty keeps the suggestion): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let edited = line.trim();
    Ok(if edited.is_empty() {
        suggestion.to_string()
    } else {
        edited.to_string()
    })
}
