use std::time::Duration;

use client_logging::client_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::json;

use crate::token::extract_submit_token;
use crate::{ApiError, ApiFailure, ClipsDocument, ScriptForm};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ScriptApi: Send + Sync {
    async fn voices(&self) -> Result<Vec<String>, ApiError>;
    async fn voice_preview(&self, voice: &str) -> Result<Vec<u8>, ApiError>;
    async fn suggest_keywords(&self, title: &str, prompt: &str) -> Result<Vec<String>, ApiError>;
    /// Submits the script form and returns the derived status token.
    async fn submit_script(&self, form: &ScriptForm) -> Result<String, ApiError>;
    /// Reads the regeneration status endpoint's body, verbatim.
    async fn regeneration_status(&self) -> Result<String, ApiError>;
    /// Fetches the clip manifest behind a clips location (path plus query).
    async fn clips(&self, location: &str) -> Result<ClipsDocument, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, location: &str) -> Result<reqwest::Url, ApiError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))?;
        base.join(location)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ScriptApi for ReqwestApi {
    async fn voices(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/voices")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        response
            .json::<Vec<String>>()
            .await
            .map_err(map_reqwest_error)
    }

    async fn voice_preview(&self, voice: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/test_voice")?)
            .json(&json!({ "voice": voice }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }

    async fn suggest_keywords(&self, title: &str, prompt: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/keywords")?)
            .json(&json!({ "title": title, "prompt": prompt }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        response
            .json::<Vec<String>>()
            .await
            .map_err(map_reqwest_error)
    }

    async fn submit_script(&self, form: &ScriptForm) -> Result<String, ApiError> {
        let mut form_data = reqwest::multipart::Form::new()
            .text("video_title", form.video_title.clone())
            .text("script_text", form.script_text.clone());
        if let Some(voice) = &form.voice {
            form_data = form_data.text("voice", voice.clone());
        }
        if let Some(keywords) = &form.keywords {
            form_data = form_data.text("keywords", keywords.clone());
        }
        if form.regenerate {
            form_data = form_data.text("save-regenerate", "1");
        }

        let response = self
            .client
            .post(self.endpoint("/script")?)
            .query(&[("ajax", "1")])
            .header("X-Requested-With", "XMLHttpRequest")
            .header(ACCEPT, "application/json")
            .multipart(form_data)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The submit endpoint answers with a token in whatever body it has;
        // the HTTP status code is not part of that contract.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.map_err(map_reqwest_error)?;
        let token = extract_submit_token(content_type.as_deref(), &body)?;
        client_debug!("submit returned token {:?}", token);
        Ok(token)
    }

    async fn regeneration_status(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/regeneration-status")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // Whatever the code, the body text IS the status; the watcher
        // classifies it.
        response.text().await.map_err(map_reqwest_error)
    }

    async fn clips(&self, location: &str) -> Result<ClipsDocument, ApiError> {
        let response = self
            .client
            .get(self.endpoint(location)?)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        response
            .json::<ClipsDocument>()
            .await
            .map_err(map_reqwest_error)
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::new(
            ApiFailure::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiFailure::MalformedResponse, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
