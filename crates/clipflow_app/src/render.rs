use clipflow_core::AppViewModel;

/// Prints the view model to the terminal. Tracks what was already shown so a
/// dirty render only prints what changed; the status line mirrors the web
/// client's status element.
#[derive(Default)]
pub struct Renderer {
    voices_shown: bool,
    preview_shown: bool,
    last_status: Option<String>,
    clip_rows_shown: usize,
}

impl Renderer {
    pub fn render(&mut self, view: &AppViewModel) {
        if !self.voices_shown && !view.voices.is_empty() {
            self.voices_shown = true;
            match view.selected_voice.as_deref() {
                Some(voice) => println!("{} voices available; using {}", view.voices.len(), voice),
                None => println!(
                    "{} voices available; no preferred voice found",
                    view.voices.len()
                ),
            }
        }

        if !self.preview_shown {
            match &view.last_preview {
                Some(Ok(bytes)) => {
                    self.preview_shown = true;
                    println!("Voice preview saved ({bytes} bytes)");
                }
                Some(Err(err)) => {
                    self.preview_shown = true;
                    println!("Voice preview unavailable: {err}");
                }
                None => {}
            }
        }

        if view.status_line != self.last_status {
            self.last_status = view.status_line.clone();
            if let Some(line) = &view.status_line {
                println!("{line}");
            }
        }

        if view.clips.len() != self.clip_rows_shown {
            self.clip_rows_shown = view.clips.len();
            println!("Clips:");
            for row in &view.clips {
                println!("  {:>2}. [{}] {}", row.index, row.kind.label(), row.path);
            }
        }
    }
}
