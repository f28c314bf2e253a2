//! Clipflow engine: server API client and command execution.
mod client;
mod engine;
mod token;
mod types;

pub use client::{ApiSettings, ReqwestApi, ScriptApi};
pub use engine::EngineHandle;
pub use token::extract_submit_token;
pub use types::{ApiError, ApiFailure, ClipsDocument, EngineEvent, ScriptForm};
