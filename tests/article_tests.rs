
use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test,
};
use actix_http::Request;
use serde_json::{json, Value};
use test_utils::*;

async fn create_article<S, B>(service: &S, app: &TestApp, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/admin/content/articles")
        .cookie(app.session_cookie())
        .set_json(body)
        .to_request();
    let resp = test::call_service(service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    test::read_body_json(resp).await
}

fn article(title: &str) -> Value {
    json!({
        "title": title,
        "excerpt": "Short summary",
        "contentMarkdown": "## Body"
    })
}

#[actix_rt::test]
async fn slug_is_derived_and_suffixed_on_collision() {
    let app = TestApp::new();
    let service = app.service().await;

    let first = create_article(&service, &app, article("Hello World!!")).await;
    assert_eq!(first["slug"], "hello-world");

    let second = create_article(&service, &app, article("Hello World!!")).await;
    let slug = second["slug"].as_str().unwrap();

    assert_ne!(slug, "hello-world");
    let suffix = slug.strip_prefix("hello-world-").expect("suffixed slug");
    assert!(!suffix.is_empty() && suffix.len() <= 4);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert_eq!(app.store.article_count(), 2);
}

#[actix_rt::test]
async fn supplied_slug_is_kept() {
    let app = TestApp::new();
    let service = app.service().await;

    let mut body = article("Whatever");
    body["slug"] = json!("custom-slug");

    let created = create_article(&service, &app, body).await;
    assert_eq!(created["slug"], "custom-slug");

    let req = test::TestRequest::get().uri("/content/articles/custom-slug").to_request();
    let fetched: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(fetched["title"], "Whatever");
}

#[actix_rt::test]
async fn create_fills_defaults() {
    let app = TestApp::new();
    let service = app.service().await;

    let mut body = article("Defaults");
    body["originalArticleUrl"] = json!("");

    let created = create_article(&service, &app, body).await;

    assert_eq!(created["imageUrl"], "https://placehold.co/600x400.png");
    assert_eq!(created["imageHint"], "default article image");
    assert_eq!(created["author"], "Site Owner");
    assert_eq!(created["originalArticleUrl"], Value::Null);
    assert!(created["publishedDate"].is_string());
}

#[actix_rt::test]
async fn create_rejects_missing_body() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::post()
        .uri("/admin/content/articles")
        .cookie(app.session_cookie())
        .set_json(json!({"title": "No body", "excerpt": "x"}))
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "contentMarkdown is required");
    assert_eq!(app.store.article_count(), 0);
}

#[actix_rt::test]
async fn pagination_walks_past_the_end_without_error() {
    let app = TestApp::new();
    let service = app.service().await;

    for day in 1..=7 {
        let mut body = article(&format!("Post {}", day));
        body["publishedDate"] = json!(format!("2024-01-{:02}T10:00:00Z", day));
        create_article(&service, &app, body).await;
    }

    let req = test::TestRequest::get().uri("/content/articles?page=1&limit=6").to_request();
    let page: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(page["articles"].as_array().unwrap().len(), 6);
    assert_eq!(page["totalItems"], 7);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["currentPage"], 1);
    assert_eq!(page["articles"][0]["title"], "Post 7");

    let req = test::TestRequest::get().uri("/content/articles?page=2&limit=6").to_request();
    let page: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(page["articles"].as_array().unwrap().len(), 1);
    assert_eq!(page["articles"][0]["title"], "Post 1");

    let req = test::TestRequest::get().uri("/content/articles?page=3&limit=6").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["articles"], json!([]));
    assert_eq!(page["currentPage"], 3);
    assert_eq!(page["totalPages"], 2);
}

#[actix_rt::test]
async fn junk_paging_values_fall_back_to_defaults() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::get().uri("/content/articles?page=-2&limit=abc").to_request();
    let page: Value = test::call_and_read_body_json(&service, req).await;

    assert_eq!(page["currentPage"], 1);
    assert_eq!(page["totalItems"], 0);
    assert_eq!(page["totalPages"], 0);
}

#[actix_rt::test]
async fn moving_to_a_taken_slug_conflicts_and_changes_nothing() {
    let app = TestApp::new();
    let service = app.service().await;

    let first = create_article(&service, &app, article("First")).await;
    let second = create_article(&service, &app, article("Second")).await;

    let mut body = article("First, renamed");
    body["slug"] = json!("second");

    let req = test::TestRequest::put()
        .uri("/admin/content/articles/first")
        .cookie(app.session_cookie())
        .set_json(body)
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    for (slug, before) in [("first", &first), ("second", &second)] {
        let req = test::TestRequest::get().uri(&format!("/content/articles/{}", slug)).to_request();
        let after: Value = test::call_and_read_body_json(&service, req).await;
        assert_eq!(&after, before);
    }
}

#[actix_rt::test]
async fn update_merges_and_can_rename_the_slug() {
    let app = TestApp::new();
    let service = app.service().await;

    let mut body = article("Original");
    body["author"] = json!("Ada");
    body["originalArticleUrl"] = json!("https://example.com/original");
    let created = create_article(&service, &app, body).await;

    let mut body = article("Renamed");
    body["slug"] = json!("renamed");

    let req = test::TestRequest::put()
        .uri("/admin/content/articles/original")
        .cookie(app.session_cookie())
        .set_json(body)
        .to_request();
    let updated: Value = test::call_and_read_body_json(&service, req).await;

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["slug"], "renamed");
    assert_eq!(updated["author"], "Ada");
    assert_eq!(updated["publishedDate"], created["publishedDate"]);
    assert_eq!(updated["originalArticleUrl"], Value::Null);

    let req = test::TestRequest::get().uri("/content/articles/original").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn delete_removes_and_then_reports_not_found() {
    let app = TestApp::new();
    let service = app.service().await;

    create_article(&service, &app, article("Doomed")).await;

    for expected in [StatusCode::OK, StatusCode::NOT_FOUND] {
        let req = test::TestRequest::delete()
            .uri("/admin/content/articles/doomed")
            .cookie(app.session_cookie())
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_rt::test]
async fn invalid_source_url_is_rejected() {
    let app = TestApp::new();
    let service = app.service().await;

    let mut body = article("Linked");
    body["originalArticleUrl"] = json!("ftp://example.com/file");

    let req = test::TestRequest::post()
        .uri("/admin/content/articles")
        .cookie(app.session_cookie())
        .set_json(body)
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"][0]["field"], "originalArticleUrl");
}
