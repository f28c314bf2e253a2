use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Field values carried by the script submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptForm {
    pub video_title: String,
    pub script_text: String,
    pub voice: Option<String>,
    pub keywords: Option<String>,
    pub regenerate: bool,
}

/// Clip manifest for the clips view. Servers may add fields; only the media
/// list matters here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ClipsDocument {
    #[serde(default)]
    pub media_clips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    MalformedResponse,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::InvalidUrl => write!(f, "invalid url"),
            ApiFailure::Network => write!(f, "network error"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

/// Completion events reported by the engine thread, one per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    VoicesLoaded {
        result: Result<Vec<String>, ApiError>,
    },
    VoicePreviewReady {
        voice: String,
        result: Result<Vec<u8>, ApiError>,
    },
    KeywordsSuggested {
        result: Result<Vec<String>, ApiError>,
    },
    /// The submit call finished; on success carries the derived status token.
    SubmitCompleted {
        result: Result<String, ApiError>,
    },
    /// A status poll finished; on success carries the verbatim body text.
    StatusChecked {
        result: Result<String, ApiError>,
    },
    ClipsFetched {
        result: Result<ClipsDocument, ApiError>,
    },
}
