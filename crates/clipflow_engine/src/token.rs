use crate::{ApiError, ApiFailure};

/// Derive the status token from a submit response.
///
/// A JSON response carries the token in `status`, falling back to `msg` when
/// `status` is absent or empty; anything else is read as a plain-text token
/// and trimmed. Tokens are uppercased so the terminal check is
/// case-insensitive. A JSON content type with an unparsable body is a failed
/// request, not a token.
pub fn extract_submit_token(content_type: Option<&str>, body: &str) -> Result<String, ApiError> {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
    if !is_json {
        return Ok(body.trim().to_uppercase());
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|err| ApiError::new(ApiFailure::MalformedResponse, err.to_string()))?;
    let token = ["status", "msg"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty()))
        .unwrap_or("");
    Ok(token.to_uppercase())
}
