use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};

use kindred_testing::auth::MockAdmin;

use crate::helpers::{HOME_MANAGER, TestApp, count, spawn_app, spawn_app_with_admin_token};

fn upload(filename: &str, title: Option<&str>, bytes: &[u8]) -> MultipartForm {
    let form = MultipartForm::new().add_text("action", "add_banner");
    let form = match title {
        Some(title) => form.add_text("image_name", title.to_owned()),
        None => form,
    };
    form.add_part(
        "banner_image",
        Part::bytes(bytes.to_vec())
            .file_name(filename.to_owned())
            .mime_type("image/png"),
    )
}

async fn save_vm(app: &TestApp, vision: &str, mission: &str) {
    let response = app
        .server
        .post(HOME_MANAGER)
        .form(&[
            ("action", "save_vm"),
            ("vision_description", vision),
            ("mission_description", mission),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), HOME_MANAGER);
}

// ── GET /admin/dashboard ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_dashboard_with_manager_link() {
    let app = spawn_app().await;

    let response = app.server.get("/admin/dashboard").await;

    response.assert_status_ok();
    assert!(response.text().contains("href=\"/admin/home-manager\""));
}

// ── GET /admin/home-manager ──────────────────────────────────────────────────

#[tokio::test]
async fn should_render_editor_forms_without_statistics() {
    let app = spawn_app().await;
    app.add_statistic("Schools", "14", 1, "active").await;

    let html = app.server.get(HOME_MANAGER).await.text();

    assert!(html.contains("value=\"save_vm\""));
    assert!(html.contains("value=\"add_banner\""));
    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert!(!html.contains("class=\"statistics\""));
    assert!(!html.contains("Schools"));
}

#[tokio::test]
async fn should_prefill_editor_with_saved_texts() {
    let app = spawn_app().await;
    save_vm(&app, "Clean water", "Dig wells").await;

    let html = app.server.get(HOME_MANAGER).await.text();

    assert!(html.contains(">Clean water</textarea>"));
    assert!(html.contains(">Dig wells</textarea>"));
}

// ── POST save_vm ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_single_vision_mission_record_across_saves() {
    let app = spawn_app().await;
    save_vm(&app, "First vision", "First mission").await;
    let first = app.vision_mission().await.unwrap();
    save_vm(&app, "Second vision", "Second mission").await;

    assert_eq!(app.vision_mission_rows().await, 1);
    let saved = app.vision_mission().await.unwrap();
    assert_eq!(saved.id, first.id);
    assert_eq!(saved.vision, "Second vision");
    assert_eq!(saved.mission, "Second mission");
    assert!(saved.last_updated >= first.last_updated);
}

#[tokio::test]
async fn should_store_missing_fields_as_empty_text() {
    let app = spawn_app().await;
    save_vm(&app, "Only vision", "Only mission").await;

    app.server
        .post(HOME_MANAGER)
        .form(&[("action", "save_vm"), ("vision_description", "New vision")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let saved = app.vision_mission().await.unwrap();
    assert_eq!(saved.vision, "New vision");
    assert_eq!(saved.mission, "");
}

#[tokio::test]
async fn should_show_flash_once_after_redirect() {
    let app = spawn_app().await;
    save_vm(&app, "Vision", "Mission").await;

    let first = app.server.get(HOME_MANAGER).await.text();
    assert_eq!(count(&first, "Mission updated successfully"), 1);
    assert!(first.contains("Vision &#38; Mission updated successfully"));

    let second = app.server.get(HOME_MANAGER).await.text();
    assert!(!second.contains("updated successfully"));
}

// ── POST add_banner ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_add_banner_and_write_file() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(HOME_MANAGER)
        .multipart(upload("spring gala.png", Some("Spring gala"), b"PNGDATA"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), HOME_MANAGER);
    let banners = app.all_banners().await;
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].title, "Spring gala");
    assert_eq!(banners[0].image_url, "uploads/spring_gala.png");
    assert_eq!(banners[0].display_order, 1);
    assert!(banners[0].is_shown);
    assert_eq!(app.files.uploaded_files(), vec!["spring_gala.png"]);
    assert_eq!(app.files.read("spring_gala.png"), b"PNGDATA");

    let html = app.server.get(HOME_MANAGER).await.text();
    assert!(html.contains("Banner added successfully"));
}

#[tokio::test]
async fn should_default_missing_title_to_empty() {
    let app = spawn_app().await;

    app.server
        .post(HOME_MANAGER)
        .multipart(upload("logo.png", None, b"x"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert_eq!(app.all_banners().await[0].title, "");
}

#[tokio::test]
async fn should_ignore_add_banner_without_file() {
    let app = spawn_app().await;
    let form = MultipartForm::new()
        .add_text("action", "add_banner")
        .add_text("image_name", "No image");

    let response = app.server.post(HOME_MANAGER).multipart(form).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), HOME_MANAGER);
    assert!(app.all_banners().await.is_empty());
    let html = app.server.get(HOME_MANAGER).await.text();
    assert!(!html.contains("No image"));
    assert!(!html.contains("Banner added successfully"));
}

#[tokio::test]
async fn should_ignore_upload_with_empty_filename() {
    let app = spawn_app().await;

    app.server
        .post(HOME_MANAGER)
        .multipart(upload("", Some("Blank"), b""))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert!(app.all_banners().await.is_empty());
    assert!(app.files.uploaded_files().is_empty());
}

#[tokio::test]
async fn should_ignore_upload_whose_name_sanitizes_to_nothing() {
    let app = spawn_app().await;

    app.server
        .post(HOME_MANAGER)
        .multipart(upload("../..", Some("Sneaky"), b"x"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert!(app.all_banners().await.is_empty());
    assert!(app.files.uploaded_files().is_empty());
}

#[tokio::test]
async fn should_keep_uploads_inside_upload_dir() {
    let app = spawn_app().await;

    app.server
        .post(HOME_MANAGER)
        .multipart(upload("../../escape.png", Some("Escape"), b"x"))
        .await;

    assert_eq!(app.files.uploaded_files(), vec!["escape.png"]);
    assert_eq!(app.all_banners().await[0].image_url, "uploads/escape.png");
}

#[tokio::test]
async fn should_overwrite_file_but_keep_both_records_for_same_name() {
    let app = spawn_app().await;

    app.server
        .post(HOME_MANAGER)
        .multipart(upload("hero.png", Some("First"), b"first"))
        .await;
    app.server
        .post(HOME_MANAGER)
        .multipart(upload("hero.png", Some("Second"), b"second"))
        .await;

    assert_eq!(app.files.uploaded_files(), vec!["hero.png"]);
    assert_eq!(app.files.read("hero.png"), b"second");
    let banners = app.all_banners().await;
    assert_eq!(banners.len(), 2);
    assert!(banners.iter().all(|b| b.image_url == "uploads/hero.png"));
    assert_eq!(banners[0].title, "First");
    assert_eq!(banners[1].title, "Second");
}

// ── POST edge cases ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_redirect_unknown_action_without_changes() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(HOME_MANAGER)
        .form(&[("action", "delete_everything")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), HOME_MANAGER);
    assert!(app.vision_mission().await.is_none());
    assert!(app.all_banners().await.is_empty());
}

#[tokio::test]
async fn should_redirect_empty_post() {
    let app = spawn_app().await;

    let response = app.server.post(HOME_MANAGER).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), HOME_MANAGER);
}

#[tokio::test]
async fn should_reject_malformed_multipart() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(HOME_MANAGER)
        .bytes("not really multipart".into())
        .content_type("multipart/form-data")
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("400"));
}

#[tokio::test]
async fn should_reject_upload_over_size_limit() {
    let app = spawn_app().await;
    let oversized = vec![0u8; 2 * 1024 * 1024];

    let response = app
        .server
        .post(HOME_MANAGER)
        .multipart(upload("huge.png", Some("Huge"), &oversized))
        .await;

    response.assert_status_payload_too_large();
    assert!(response.text().contains("413"));
    assert!(app.all_banners().await.is_empty());
    assert!(app.files.uploaded_files().is_empty());
}

// ── admin gate ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_admin_routes_without_token() {
    let app = spawn_app_with_admin_token("s3cret").await;

    app.server
        .get("/admin/dashboard")
        .await
        .assert_status_unauthorized();
    app.server
        .get(HOME_MANAGER)
        .await
        .assert_status_unauthorized();
    app.server
        .post(HOME_MANAGER)
        .form(&[("action", "save_vm"), ("vision_description", "x")])
        .await
        .assert_status_unauthorized();
    assert!(app.vision_mission().await.is_none());
}

#[tokio::test]
async fn should_reject_wrong_token() {
    let app = spawn_app_with_admin_token("s3cret").await;
    let (name, value) = MockAdmin::new("guess").header();

    app.server
        .get(HOME_MANAGER)
        .add_header(name, value)
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn should_accept_bearer_token() {
    let app = spawn_app_with_admin_token("s3cret").await;
    let (name, value) = MockAdmin::new("s3cret").header();

    app.server
        .get(HOME_MANAGER)
        .add_header(name, value)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn should_accept_token_cookie() {
    let app = spawn_app_with_admin_token("s3cret").await;
    let (name, value) = MockAdmin::new("s3cret").cookie();

    app.server
        .get("/admin/dashboard")
        .add_header(name, value)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn should_keep_public_page_open_when_gated() {
    let app = spawn_app_with_admin_token("s3cret").await;

    app.server.get("/").await.assert_status_ok();
}
