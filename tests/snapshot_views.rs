//! Snapshot tests for view renderers.
//!
//! Each test drives the controller into a known frame and renders it,
//! comparing against fixture files or the document structure.

mod common;

use std::sync::Arc;

use common::{Failure, MockApi};
use useradmin::app::UserAdmin;
use useradmin::models::Field;
use useradmin::progress::LoadingIndicator;
use useradmin::view::ViewRenderer;
use useradmin::view::html::HtmlRenderer;
use useradmin::view::json::JsonRenderer;

/// Placeholder collection, editing Ervin, with a failed save.
async fn failed_edit_frame() -> UserAdmin {
    let api = Arc::new(MockApi::placeholder());
    let mut admin = UserAdmin::new(api.clone(), LoadingIndicator::new(false));
    admin.load().await;
    admin.open_edit(2);
    admin.set_field(Field::Email, "ervin@new.tv");
    api.fail_with(Failure::Transport);
    admin.submit().await;
    admin
}

#[tokio::test]
async fn snapshot_json_page() {
    let admin = failed_edit_frame().await;
    let output = JsonRenderer.render(&admin.page());

    let actual: serde_json::Value = serde_json::from_str(&output).unwrap();
    let expected_str = std::fs::read_to_string("tests/fixtures/expected_page.json").unwrap();
    let expected: serde_json::Value = serde_json::from_str(&expected_str).unwrap();

    assert_eq!(
        actual, expected,
        "JSON page does not match snapshot.\nActual:\n{output}"
    );
}

#[tokio::test]
async fn html_page_structure() {
    let admin = failed_edit_frame().await;
    let output = HtmlRenderer.render(&admin.page());

    assert!(output.contains(r#"id="userTableBody""#));
    assert_eq!(output.matches("<tr data-user-id=").count(), 2);
    assert!(output.contains(r#"<tr data-user-id="2">"#));
    assert!(output.contains("Failed to save user. Please try again."));
    assert!(output.contains("Edit User"));
    assert!(output.contains("Save Changes"));
    assert!(output.contains("ervin@new.tv"));
}

#[tokio::test]
async fn html_empty_collection_placeholder() {
    let api = Arc::new(MockApi::new(vec![], 1));
    let mut admin = UserAdmin::new(api, LoadingIndicator::new(false));
    admin.load().await;

    let output = HtmlRenderer.render(&admin.page());
    assert!(output.contains(r#"<td colspan="6""#));
    assert!(output.contains("No users found"));
    assert!(!output.contains("data-user-id"));
}
