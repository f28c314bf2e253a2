use crate::view_model::ClipRowView;

/// Media classification derived from a clip path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
    Audio,
    Unknown,
}

impl MediaKind {
    pub fn classify(path: &str) -> Self {
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(path)
            .to_ascii_lowercase();
        match ext.as_str() {
            "mp4" | "mov" | "webm" => Self::Video,
            "jpg" | "jpeg" | "png" | "gif" => Self::Image,
            "mp3" | "wav" | "ogg" | "m4a" => Self::Audio,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRow {
    pub path: String,
    pub kind: MediaKind,
}

/// Ordered clip rows backing the clips table. Feeding a new manifest replaces
/// every row; rows can be moved one at a time (the drag-reorder counterpart).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipTable {
    rows: Vec<ClipRow>,
}

impl ClipTable {
    pub fn replace(&mut self, media_clips: Vec<String>) {
        self.rows = media_clips
            .into_iter()
            .map(|path| ClipRow {
                kind: MediaKind::classify(&path),
                path,
            })
            .collect();
    }

    /// Returns false and leaves the table untouched when either index is out
    /// of range.
    pub fn move_row(&mut self, from: usize, to: usize) -> bool {
        if from >= self.rows.len() || to >= self.rows.len() {
            return false;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        true
    }

    pub fn rows(&self) -> &[ClipRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn row_views(&self) -> Vec<ClipRowView> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| ClipRowView {
                index: idx + 1,
                kind: row.kind,
                path: row.path.clone(),
            })
            .collect()
    }
}

/// `m:ss`, or `h:mm:ss` from one hour up. Zero renders as `0:00`.
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "0:00".to_string();
    }
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
