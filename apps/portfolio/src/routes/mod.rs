pub mod contact;
pub mod cv;
pub mod health;
pub mod site;
pub mod terminal;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Site shell
        .route("/", get(site::handle_index))
        .route("/favicon.png", get(site::handle_favicon))
        .route("/:page", get(site::handle_page))
        // CV
        .route("/cv.pdf", get(cv::handle_download))
        .route("/cv/:id", get(cv::handle_transient))
        // Terminal + contact
        .route("/api/terminal", post(terminal::handle_command))
        .route(
            "/contact",
            get(site::handle_contact_page).post(contact::handle_contact),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    use super::*;
    use crate::config::Config;
    use crate::contact::ContactClient;
    use crate::content::builtin_content;
    use crate::cv::test_support::{generator_with, FailingBackend};
    use crate::cv::{CvStore, CV_FILE_NAME, GENERATION_ALERT};
    use crate::layout::{PdfBackend, PdfWriterBackend};
    use crate::terminal::{CommandTable, CV_CONFIRMATION};

    fn state_with(backend: Arc<dyn PdfBackend>, contact: Option<ContactClient>) -> AppState {
        let content = builtin_content();
        AppState {
            config: Config::for_tests(),
            commands: Arc::new(CommandTable::from_content(&content.terminal)),
            content: Arc::new(content),
            cv_store: Arc::new(CvStore::new(generator_with(backend), 8)),
            contact,
        }
    }

    fn app() -> Router {
        build_router(state_with(Arc::new(PdfWriterBackend), None))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_terminal(app: Router, input: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/terminal")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "input": input }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn post_terminal_form(app: Router, body: &'static str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/terminal")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn post_contact(app: Router, body: &'static str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn text_body(response: Response) -> String {
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    // ────────────────────────────────────────────
    // Health + site shell
    // ────────────────────────────────────────────

    #[tokio::test]
    async fn test_health() {
        let response = get(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_page_route_marks_active_page() {
        let response = get(app(), "/education").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text_body(response).await;
        assert!(html.contains("<section id=\"education\" class=\"page active\">"));
    }

    #[tokio::test]
    async fn test_contact_page_shares_path_with_relay() {
        let response = get(app(), "/contact").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text_body(response).await;
        assert!(html.contains("<section id=\"contact\" class=\"page active\">"));
        assert!(html.contains("action=\"/contact\" method=\"post\""));
    }

    #[tokio::test]
    async fn test_contact_page_accepts_menu_query() {
        let html = text_body(get(app(), "/contact?menu=open").await).await;
        assert!(html.contains("<section id=\"contact\" class=\"page active\">"));
        assert!(html.contains("class=\"nav-links show\""));
    }

    #[tokio::test]
    async fn test_unknown_page_falls_back_to_home() {
        let html = text_body(get(app(), "/nowhere").await).await;
        assert!(html.contains("<section id=\"home\" class=\"page active\">"));
    }

    #[tokio::test]
    async fn test_menu_query_opens_menu() {
        let html = text_body(get(app(), "/?menu=open").await).await;
        assert!(html.contains("class=\"nav-links show\""));
    }

    #[tokio::test]
    async fn test_desktop_width_hides_hamburger() {
        let html = text_body(get(app(), "/about?menu=open&width=1200").await).await;
        assert!(!html.contains("hamburger"));
        assert!(html.contains("class=\"nav-links\""));
    }

    #[tokio::test]
    async fn test_favicon_is_png() {
        let response = get(app(), "/favicon.png").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    }

    // ────────────────────────────────────────────
    // CV
    // ────────────────────────────────────────────

    #[tokio::test]
    async fn test_cv_download_is_attachment() {
        let response = get(app(), "/cv.pdf").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"{CV_FILE_NAME}\"").as_str()
        );
        let body = to_bytes(response.into_body(), 10 * 1024 * 1024).await.unwrap();
        assert!(body.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_generation_failure_returns_alert_text() {
        let app = build_router(state_with(Arc::new(FailingBackend), None));
        let response = get(app, "/cv.pdf").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "GENERATION_ERROR");
        assert_eq!(body["error"]["message"], GENERATION_ALERT);
    }

    #[tokio::test]
    async fn test_invalid_and_unknown_cv_ids() {
        assert_eq!(get(app(), "/cv/not-a-uuid").await.status(), StatusCode::BAD_REQUEST);
        let unknown = format!("/cv/{}", uuid::Uuid::new_v4());
        assert_eq!(get(app(), &unknown).await.status(), StatusCode::NOT_FOUND);
    }

    // ────────────────────────────────────────────
    // Terminal API
    // ────────────────────────────────────────────

    #[tokio::test]
    async fn test_terminal_help_is_case_insensitive() {
        let upper = json_body(post_terminal(app(), "HELP").await).await;
        let lower = json_body(post_terminal(app(), "help").await).await;

        assert_eq!(upper["echo"], "root@bikash# HELP");
        assert_eq!(upper["entries"], lower["entries"]);
        assert_eq!(lower["entries"][0]["kind"], "output");
        assert_eq!(lower["interval_ms"], 5);
    }

    #[tokio::test]
    async fn test_terminal_blank_input_is_silent() {
        let body = json_body(post_terminal(app(), "   ").await).await;
        assert!(body["echo"].is_null());
        assert_eq!(body["entries"], json!([]));
        assert_eq!(body["clear"], false);
    }

    #[tokio::test]
    async fn test_terminal_unknown_command_is_error_entry() {
        let body = json_body(post_terminal(app(), "ls").await).await;
        assert_eq!(body["entries"][0]["kind"], "error");
        assert_eq!(
            body["entries"][0]["text"],
            "Command not found: ls\nType 'help' to see available commands"
        );
    }

    #[tokio::test]
    async fn test_terminal_clear_sets_flag() {
        let body = json_body(post_terminal(app(), "clear").await).await;
        assert_eq!(body["clear"], true);
        assert_eq!(body["entries"], json!([]));
    }

    #[tokio::test]
    async fn test_terminal_cv_returns_openable_location() {
        let app = app();
        let body = json_body(post_terminal(app.clone(), "cv").await).await;

        assert_eq!(body["entries"][0]["text"], CV_CONFIRMATION);
        let location = body["cv_location"].as_str().unwrap().to_string();

        let response = get(app, &location).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("inline; filename=\"{CV_FILE_NAME}\"").as_str()
        );
    }

    #[tokio::test]
    async fn test_terminal_form_post_renders_terminal_page() {
        let response = post_terminal_form(app(), "input=help").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text_body(response).await;

        assert!(html.contains("<section id=\"terminal\" class=\"page active\">"));
        assert!(html.contains("root@bikash# help"));
        assert!(html.contains("Available commands:"));
    }

    #[tokio::test]
    async fn test_terminal_form_clear_empties_output_pane() {
        let html = text_body(post_terminal_form(app(), "input=clear").await).await;
        assert!(html.contains("<pre id=\"terminal-output\"></pre>"));
    }

    #[tokio::test]
    async fn test_terminal_form_cv_shows_location() {
        let html = text_body(post_terminal_form(app(), "input=CV").await).await;
        assert!(html.contains(CV_CONFIRMATION));
        assert!(html.contains("/cv/"));
    }

    #[tokio::test]
    async fn test_terminal_rejects_unknown_media_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/terminal")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("help"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    // ────────────────────────────────────────────
    // Contact relay
    // ────────────────────────────────────────────

    #[tokio::test]
    async fn test_contact_relays_and_reports_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/f/xyz")
            .with_status(200)
            .create_async()
            .await;
        let client = ContactClient::new(format!("{}/f/xyz", server.url()));
        let app = build_router(state_with(Arc::new(PdfWriterBackend), Some(client)));

        let response = post_contact(app, "name=Ada&email=ada%40example.com&message=Hi").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Message sent successfully!");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_contact_rejection_reports_failure_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/f/xyz")
            .with_status(500)
            .create_async()
            .await;
        let client = ContactClient::new(format!("{}/f/xyz", server.url()));
        let app = build_router(state_with(Arc::new(PdfWriterBackend), Some(client)));

        let response = post_contact(app, "name=Ada&email=ada%40example.com&message=Hi").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "Oops! There was a problem submitting your form"
        );
    }

    #[tokio::test]
    async fn test_contact_without_endpoint_is_unavailable() {
        let response = post_contact(app(), "name=Ada&email=ada%40example.com&message=Hi").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_contact_requires_every_field() {
        let response = post_contact(app(), "name=Ada&email=&message=Hi").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
