use clipflow_engine::{extract_submit_token, ApiFailure};
use pretty_assertions::assert_eq;

#[test]
fn json_status_is_uppercased() {
    let token = extract_submit_token(Some("application/json"), r#"{"status":"clips_ready"}"#)
        .expect("token");
    assert_eq!(token, "CLIPS_READY");
}

#[test]
fn empty_status_falls_back_to_msg() {
    let token = extract_submit_token(
        Some("application/json"),
        r#"{"status":"","msg":"working"}"#,
    )
    .expect("token");
    assert_eq!(token, "WORKING");
}

#[test]
fn missing_fields_yield_an_empty_token() {
    let token =
        extract_submit_token(Some("application/json"), r#"{"success":true}"#).expect("token");
    assert_eq!(token, "");
}

#[test]
fn content_type_detection_is_case_insensitive() {
    let token = extract_submit_token(
        Some("Application/JSON; charset=utf-8"),
        r#"{"status":"ok"}"#,
    )
    .expect("token");
    assert_eq!(token, "OK");
}

#[test]
fn plain_text_is_trimmed_and_uppercased() {
    let token = extract_submit_token(Some("text/plain"), "  queued \n").expect("token");
    assert_eq!(token, "QUEUED");

    let token = extract_submit_token(None, "clips_ready").expect("token");
    assert_eq!(token, "CLIPS_READY");
}

#[test]
fn json_looking_text_without_a_json_content_type_stays_raw() {
    let token = extract_submit_token(Some("text/html"), r#"{"status":"x"}"#).expect("token");
    assert_eq!(token, r#"{"STATUS":"X"}"#);
}

#[test]
fn malformed_json_is_a_failed_request() {
    let err = extract_submit_token(Some("application/json"), "<html>oops</html>").unwrap_err();
    assert_eq!(err.kind, ApiFailure::MalformedResponse);
}
