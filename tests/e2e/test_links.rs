use crate::e2e::helpers;

use helpers::assertions::link_titles;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

async fn library_session(ctx: &TestContext) -> Uuid {
    let response = ctx
        .client
        .post(
            "/api/sessions",
            &json!({
                "links": [
                    { "title": "rustlings", "url": "https://github.com/rust-lang/rustlings", "category": "Learning" },
                    { "title": "Tokio", "url": "https://tokio.rs", "category": "Tools" },
                    { "title": "bevy", "url": "https://github.com/bevyengine/bevy", "category": "Project Repos" },
                    { "title": "Axum", "url": "https://github.com/tokio-rs/axum", "category": "Tools" },
                    { "title": "Rust in 100 seconds", "url": "https://youtube.com/watch?v=5C_HPTJg5ek", "category": "Videos" }
                ]
            }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    response.body.as_ref().unwrap()["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_newest_links_first_by_default(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    let response = ctx.list_links(session_id, "").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        link_titles(body),
        vec!["Rust in 100 seconds", "Axum", "bevy", "Tokio", "rustlings"]
    );
    assert_eq!(body["displayed"], 5);
    assert_eq!(body["total"], 5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_sort_titles_case_insensitively(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    let response = ctx.list_links(session_id, "?sort=title-asc").await.unwrap();
    assert_eq!(
        link_titles(response.body.as_ref().unwrap()),
        vec!["Axum", "bevy", "Rust in 100 seconds", "rustlings", "Tokio"]
    );

    let response = ctx.list_links(session_id, "?sort=title-desc").await.unwrap();
    assert_eq!(
        link_titles(response.body.as_ref().unwrap()),
        vec!["Tokio", "rustlings", "Rust in 100 seconds", "bevy", "Axum"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_sort_by_category_then_title(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    let response = ctx.list_links(session_id, "?sort=category-asc").await.unwrap();

    assert_eq!(
        link_titles(response.body.as_ref().unwrap()),
        vec!["rustlings", "bevy", "Axum", "Tokio", "Rust in 100 seconds"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_category(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    let response = ctx
        .list_links(session_id, "?category=Tools&sort=title-asc")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(link_titles(body), vec!["Axum", "Tokio"]);
    assert_eq!(body["displayed"], 2);
    assert_eq!(body["total"], 5);

    let response = ctx.list_links(session_id, "?category=all").await.unwrap();
    assert_eq!(response.body.as_ref().unwrap()["displayed"], 5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_category_and_sort(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    ctx.list_links(session_id, "?category=Podcasts")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown category: Podcasts");

    ctx.list_links(session_id, "?sort=popularity")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown sort order: popularity");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_keyword_relevance(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    let response = ctx
        .list_links(session_id, "?keywords=tok&sort=title-asc")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(link_titles(body), vec!["Tokio"]);
    assert_eq!(body["displayed"], 1);
    assert_eq!(body["total"], 5);
    assert_eq!(ctx.relevance.calls(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_skip_relevance_filter_for_blank_keywords(ctx: &TestContext) {
    let session_id = library_session(ctx).await;

    let response = ctx.list_links(session_id, "?keywords=%20%20").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["displayed"], 5);
    assert_eq!(ctx.relevance.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_bad_gateway_when_relevance_filter_fails(ctx: &TestContext) {
    let session_id = library_session(ctx).await;
    ctx.relevance.fail();

    let response = ctx.list_links(session_id, "?keywords=async").await.unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("relevance provider unavailable");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_categories_in_order(ctx: &TestContext) {
    let response = ctx.client.get("/api/categories").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().unwrap()["categories"],
        json!(["Learning", "Tools", "Project Repos", "Videos", "Other"])
    );
}
