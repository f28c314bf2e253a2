use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::logging::LogDestination;

/// Submit a script for clip regeneration and watch the job to completion.
#[derive(Debug, Parser)]
#[command(name = "clipflow", version, about)]
pub struct Cli {
    /// Base URL of the clipflow server.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Path of the script text to submit.
    #[arg(long)]
    pub script: PathBuf,

    /// Video title for the project.
    #[arg(long)]
    pub title: String,

    /// Voice name; when omitted the server list's preferred voice is used.
    #[arg(long)]
    pub voice: Option<String>,

    /// Comma-separated keywords to send with the form.
    #[arg(long)]
    pub keywords: Option<String>,

    /// Ask the server for keyword suggestions and edit them before submitting.
    #[arg(long)]
    pub modify_keywords: bool,

    /// Accept suggested keywords as-is instead of prompting.
    #[arg(long)]
    pub accept_keywords: bool,

    /// Project identifier carried to the clips view.
    #[arg(long)]
    pub project_id: Option<String>,

    /// Fetch a voice preview before submitting.
    #[arg(long)]
    pub preview_voice: bool,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogDest,

    /// Session file holding the project-id fallback.
    #[arg(long)]
    pub session_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogDest {
    File,
    Terminal,
    Both,
}

impl From<LogDest> for LogDestination {
    fn from(dest: LogDest) -> Self {
        match dest {
            LogDest::File => LogDestination::File,
            LogDest::Terminal => LogDestination::Terminal,
            LogDest::Both => LogDestination::Both,
        }
    }
}
