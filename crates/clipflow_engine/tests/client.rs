use std::time::Duration;

use clipflow_engine::{ApiFailure, ApiSettings, ReqwestApi, ScriptApi, ScriptForm};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestApi {
    ReqwestApi::new(ApiSettings::new(server.uri())).expect("client builds")
}

fn test_form() -> ScriptForm {
    ScriptForm {
        video_title: "Desert wildlife".to_string(),
        script_text: "A short script about desert wildlife.".to_string(),
        voice: Some("en-US-AvaMultilingualNeural".to_string()),
        keywords: Some("cactus, lizard".to_string()),
        regenerate: true,
    }
}

#[tokio::test]
async fn submit_sends_the_ajax_flag_and_request_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .and(query_param("ajax", "1"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "clips_ready" })))
        .expect(1)
        .mount(&server)
        .await;

    let token = api_for(&server)
        .submit_script(&test_form())
        .await
        .expect("submit ok");
    assert_eq!(token, "CLIPS_READY");
}

#[tokio::test]
async fn submit_carries_the_form_fields_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .and(body_string_contains("name=\"video_title\""))
        .and(body_string_contains("name=\"script_text\""))
        .and(body_string_contains("name=\"voice\""))
        .and(body_string_contains("name=\"keywords\""))
        .and(body_string_contains("name=\"save-regenerate\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "clips_ready" })))
        .expect(1)
        .mount(&server)
        .await;

    let token = api_for(&server)
        .submit_script(&test_form())
        .await
        .expect("submit ok");
    assert_eq!(token, "CLIPS_READY");
}

#[tokio::test]
async fn submit_falls_back_to_the_msg_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "msg": "Script saved! Media download started.",
            "project_id": 7,
        })))
        .mount(&server)
        .await;

    let token = api_for(&server)
        .submit_script(&test_form())
        .await
        .expect("submit ok");
    assert_eq!(token, "SCRIPT SAVED! MEDIA DOWNLOAD STARTED.");
}

#[tokio::test]
async fn submit_reads_plain_text_bodies_trimmed_and_uppercased() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("  queued \n", "text/plain"))
        .mount(&server)
        .await;

    let token = api_for(&server)
        .submit_script(&test_form())
        .await
        .expect("submit ok");
    assert_eq!(token, "QUEUED");
}

#[tokio::test]
async fn submit_derives_a_token_regardless_of_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "status": "clips_ready" })))
        .mount(&server)
        .await;

    let token = api_for(&server)
        .submit_script(&test_form())
        .await
        .expect("submit ok");
    assert_eq!(token, "CLIPS_READY");
}

#[tokio::test]
async fn submit_fails_on_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "application/json"))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .submit_script(&test_form())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiFailure::MalformedResponse);
}

#[tokio::test]
async fn submit_times_out_on_a_slow_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/script"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "status": "clips_ready" })),
        )
        .mount(&server)
        .await;

    let mut settings = ApiSettings::new(server.uri());
    settings.request_timeout = Duration::from_millis(50);
    let api = ReqwestApi::new(settings).expect("client builds");

    let err = api.submit_script(&test_form()).await.unwrap_err();
    assert_eq!(err.kind, ApiFailure::Timeout);
}

#[tokio::test]
async fn status_poll_returns_the_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/regeneration-status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Downloading 3 of 10\n"))
        .mount(&server)
        .await;

    let status = api_for(&server)
        .regeneration_status()
        .await
        .expect("poll ok");
    assert_eq!(status, "Downloading 3 of 10\n");
}

#[tokio::test]
async fn status_poll_reads_the_body_even_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/regeneration-status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Error: disk full"))
        .mount(&server)
        .await;

    let status = api_for(&server)
        .regeneration_status()
        .await
        .expect("poll ok");
    assert_eq!(status, "Error: disk full");
}

#[tokio::test]
async fn voices_parses_the_json_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "en-US-AvaMultilingualNeural",
            "en-GB-RyanNeural",
        ])))
        .mount(&server)
        .await;

    let voices = api_for(&server).voices().await.expect("voices ok");
    assert_eq!(
        voices,
        vec![
            "en-US-AvaMultilingualNeural".to_string(),
            "en-GB-RyanNeural".to_string(),
        ]
    );
}

#[tokio::test]
async fn voices_surfaces_the_http_status_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/voices"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api_for(&server).voices().await.unwrap_err();
    assert_eq!(err.kind, ApiFailure::HttpStatus(503));
}

#[tokio::test]
async fn keywords_posts_title_and_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/keywords"))
        .and(body_json(json!({
            "title": "Desert wildlife",
            "prompt": "A short script.",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["cactus", "lizard"])))
        .expect(1)
        .mount(&server)
        .await;

    let keywords = api_for(&server)
        .suggest_keywords("Desert wildlife", "A short script.")
        .await
        .expect("keywords ok");
    assert_eq!(keywords, vec!["cactus".to_string(), "lizard".to_string()]);
}

#[tokio::test]
async fn voice_preview_returns_the_audio_bytes() {
    let server = MockServer::start().await;
    let audio = b"ID3fake-mp3-bytes".to_vec();
    Mock::given(method("POST"))
        .and(path("/api/test_voice"))
        .and(body_json(json!({ "voice": "en-GB-RyanNeural" })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(audio.clone(), "audio/mpeg"))
        .mount(&server)
        .await;

    let bytes = api_for(&server)
        .voice_preview("en-GB-RyanNeural")
        .await
        .expect("preview ok");
    assert_eq!(bytes, audio);
}

#[tokio::test]
async fn clips_fetch_parses_the_manifest_and_ignores_extras() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clips"))
        .and(query_param("project_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": 42,
            "media_clips": ["media/a.mp4", "media/b.png"],
            "music_clips": ["music/theme.mp3"],
            "subtitles": [],
        })))
        .mount(&server)
        .await;

    let doc = api_for(&server)
        .clips("/clips?project_id=42")
        .await
        .expect("clips ok");
    assert_eq!(
        doc.media_clips,
        vec!["media/a.mp4".to_string(), "media/b.png".to_string()]
    );
}
