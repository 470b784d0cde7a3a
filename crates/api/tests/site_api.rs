//! HTTP-level tests for the public site: home, project pages and the
//! contact form.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, location, post_empty, post_form, post_multipart};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_renders_home_template() {
    let app = common::build_test_app(common::memory_state());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["template"], "website/home.html");
}

#[tokio::test]
async fn created_project_is_served_by_slug() {
    let app = common::build_test_app(common::memory_state());

    let response = post_form(
        app.clone(),
        "/cms/projects/add",
        "title=My+Project&description=Built+with+Rust+%26+care",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = get(app, "/projects/my-project").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["template"], "website/view_project.html");
    assert_eq!(json["data"]["project"]["slug"], "my-project");
    assert_eq!(json["data"]["project"]["title"], "My Project");
    assert_eq!(json["data"]["project"]["description"], "Built with Rust & care");
}

#[tokio::test]
async fn project_listing_shows_every_project_in_order() {
    let app = common::build_test_app(common::memory_state());
    for title in ["First", "Second", "Third"] {
        post_form(app.clone(), "/cms/projects/add", &format!("title={title}")).await;
    }

    let json = body_json(get(app, "/projects").await).await;
    assert_eq!(json["template"], "website/projects.html");

    let titles: Vec<&str> = json["data"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn unknown_project_is_plain_text_404() {
    let app = common::build_test_app(common::memory_state());
    let response = get(app, "/projects/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Project not found");
}

#[tokio::test]
async fn sqlite_backend_serves_the_same_pages() {
    let app = common::build_test_app(common::sqlite_state().await);

    post_form(app.clone(), "/cms/projects/add", "title=My+Project&description=D").await;

    let json = body_json(get(app, "/projects/my-project").await).await;
    assert_eq!(json["data"]["project"]["title"], "My Project");
    assert_eq!(json["data"]["project"]["description"], "D");
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_form_renders() {
    let app = common::build_test_app(common::memory_state());
    let json = body_json(get(app, "/contact").await).await;
    assert_eq!(json["template"], "website/contact.html");
}

#[tokio::test]
async fn contact_submission_stores_exactly_one_message() {
    let state = common::memory_state();
    let store = common::store(&state);
    let app = common::build_test_app(state);

    let response = post_form(
        app,
        "/contact",
        "first_name=A&last_name=B&email=a%40b.com&subject=S&message=M",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    let m = &messages[0];
    assert_eq!(m.first_name, "A");
    assert_eq!(m.last_name, "B");
    assert_eq!(m.email, "a@b.com");
    assert_eq!(m.subject, "S");
    assert_eq!(m.message, "M");

    let fetched = store.get_message(m.id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(m));
}

#[tokio::test]
async fn contact_accepts_camel_case_names() {
    let state = common::memory_state();
    let store = common::store(&state);
    let app = common::build_test_app(state);

    post_form(app, "/contact", "firstName=Grace&lastName=Hopper&message=Hi").await;

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages[0].first_name, "Grace");
    assert_eq!(messages[0].last_name, "Hopper");
}

#[tokio::test]
async fn contact_missing_fields_are_empty() {
    let state = common::memory_state();
    let store = common::store(&state);
    let app = common::build_test_app(state);

    let response = post_form(app, "/contact", "subject=Only+a+subject").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].subject, "Only a subject");
    assert_eq!(messages[0].first_name, "");
    assert_eq!(messages[0].email, "");
}

#[tokio::test]
async fn contact_accepts_multipart_submissions() {
    let state = common::memory_state();
    let store = common::store(&state);
    let app = common::build_test_app(state);

    let response = post_multipart(
        app,
        "/contact",
        &[
            ("firstName", "A"),
            ("lastName", "B"),
            ("email", "a@b.com"),
            ("subject", "S"),
            ("message", "M"),
        ],
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].first_name, "A");
    assert_eq!(messages[0].last_name, "B");
    assert_eq!(messages[0].email, "a@b.com");
    assert_eq!(messages[0].message, "M");
}

#[tokio::test]
async fn contact_without_body_stores_empty_message() {
    let state = common::memory_state();
    let store = common::store(&state);
    let app = common::build_test_app(state);

    let response = post_empty(app, "/contact").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].first_name, "");
    assert_eq!(messages[0].subject, "");
    assert_eq!(messages[0].message, "");
}
