//! HTTP-level tests for the slide-data endpoint, exercising the same routes
//! main() registers.

use actix_web::{App, test, web};

use slidecast::handlers;
use slidecast::models::deck::SlideDir;

use tempfile::TempDir;

mod common;
use common::{setup_slide_dir, write_file};

async fn slides_response(dir: &std::path::Path) -> actix_web::dev::ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(SlideDir::new(dir)))
            .route("/api/slides", web::get().to(handlers::deck_handlers::slides)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/slides").to_request();
    test::call_service(&app, req).await
}

#[actix_web::test]
async fn test_slides_endpoint_returns_deck_json() {
    let dir = setup_slide_dir();
    write_file(dir.path(), "01_intro.md", "# Welcome\nfirst line");
    write_file(dir.path(), "02_pic.txt", "https://example.com/x.png");

    let resp = slides_response(dir.path()).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["template"]["footer-text"], "test deck");
    assert_eq!(body["slides"][0]["type"], "content");
    assert_eq!(body["slides"][0]["title"], "Welcome");
    assert_eq!(body["slides"][1]["type"], "image");
    assert_eq!(body["slides"][1]["is_remote_image"], true);
}

#[actix_web::test]
async fn test_slides_endpoint_reports_missing_template() {
    let dir = TempDir::new().expect("temp dir");
    write_file(dir.path(), "01_intro.md", "# Welcome");

    let resp = slides_response(dir.path()).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().expect("error message").contains("I/O error"));
    assert!(body.get("slides").is_none());
}

#[actix_web::test]
async fn test_slides_endpoint_skips_bad_files_but_succeeds() {
    let dir = setup_slide_dir();
    write_file(dir.path(), "01_bad.txt", "nothing recognizable");
    write_file(dir.path(), "02_good.md", "# Survives");

    let resp = slides_response(dir.path()).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let slides = body["slides"].as_array().expect("slides array");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0]["title"], "Survives");
}
