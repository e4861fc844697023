
use actix_web::{cookie::time::Duration, http::StatusCode, test};
use chrono::Utc;
use portfolio_site::{
    auth::jwt::JwtService,
    repositories::token::TokenService,
    settings::AppConfig,
};
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn login_with_configured_credentials_sets_a_day_long_session() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(vec![("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)])
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let cookie = response_cookie(&resp, "admin-auth-token").expect("session cookie");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(86_400)));

    let claims = JwtService::new(&app.config).verify(cookie.value()).expect("verifiable token");
    let ttl = claims.exp as i64 - Utc::now().timestamp();
    assert!((ttl - 24 * 3600).abs() <= 60, "unexpected ttl {ttl}");
}

#[actix_rt::test]
async fn login_accepts_a_json_body() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_json(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(response_cookie(&resp, "admin-auth-token").is_some());
}

#[actix_rt::test]
async fn wrong_credentials_fail_without_a_cookie() {
    let app = TestApp::new();
    let service = app.service().await;

    for (email, password) in [(ADMIN_EMAIL, "wrong"), ("intruder@example.com", ADMIN_PASSWORD), ("", "")] {
        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_form(vec![("email", email), ("password", password)])
            .to_request();
        let resp = test::call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(response_cookie(&resp, "admin-auth-token").is_none());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": false, "message": "invalid credentials"}));
    }
}

#[actix_rt::test]
async fn missing_admin_configuration_is_reported_generically() {
    let app = TestApp::with_config(AppConfig {
        admin_password: String::new(),
        ..test_config()
    });
    let service = app.service().await;

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(vec![("email", ADMIN_EMAIL), ("password", "")])
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "server misconfigured");
}

#[actix_rt::test]
async fn anonymous_admin_request_redirects_to_login_with_origin() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::get().uri("/admin/content/articles").to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/admin/login?from=%2Fadmin%2Fcontent%2Farticles");
}

#[actix_rt::test]
async fn anonymous_writes_are_redirected_and_change_nothing() {
    let app = TestApp::new();
    let service = app.service().await;

    let hero = json!({"mainHeading": "Intruder", "subHeadingPrimary": "x"});
    let service_body = json!({"title": "x", "description": "y", "imageUrl": "z", "imageHint": "w"});

    let requests = vec![
        test::TestRequest::put().uri("/admin/content/hero").set_json(&hero),
        test::TestRequest::put().uri("/%61dmin/content/hero").set_json(&hero),
        test::TestRequest::put().uri("/%61%64%6D%69%6E/content/hero").set_json(&hero),
        test::TestRequest::post().uri("/admin/content/services").set_json(&service_body),
        test::TestRequest::post().uri("/%61dmin/content/services").set_json(&service_body),
        test::TestRequest::delete().uri("/admin/content/articles/some-slug"),
    ];

    for req in requests {
        let resp = test::call_service(&service, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert!(location(&resp).starts_with("/admin/login"));
    }

    assert_eq!(app.store.service_count(), 0);

    let req = test::TestRequest::get().uri("/content/hero").to_request();
    let stored: Value = test::call_and_read_body_json(&service, req).await;
    assert_ne!(stored["mainHeading"], "Intruder");
}

#[actix_rt::test]
async fn encoded_admin_path_redirects_with_decoded_origin() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::get().uri("/%61dmin/content/hero").to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/admin/login?from=%2Fadmin%2Fcontent%2Fhero");
}

#[actix_rt::test]
async fn tampered_token_is_cleared_and_redirected() {
    let app = TestApp::new();
    let service = app.service().await;

    let mut cookie = app.session_cookie();
    cookie.set_value(format!("{}x", cookie.value()));

    let req = test::TestRequest::get().uri("/admin").cookie(cookie).to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/admin/login");

    let cleared = response_cookie(&resp, "admin-auth-token").expect("expiring cookie");
    assert_eq!(cleared.value(), "");
    assert!(set_cookie_header(&resp, "admin-auth-token").contains("Max-Age=-1"));
}

#[actix_rt::test]
async fn expired_token_is_cleared_and_redirected() {
    let app = TestApp::new();
    let service = app.service().await;

    let expired = JwtService::with_expiration(JWT_SECRET, chrono::Duration::hours(-2))
        .issue(ADMIN_EMAIL)
        .unwrap();
    let cookie = app.state.session_cookie.issue(expired);

    let req = test::TestRequest::get().uri("/admin/content/hero").cookie(cookie).to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/admin/login");
    assert!(set_cookie_header(&resp, "admin-auth-token").contains("Max-Age=-1"));
}

#[actix_rt::test]
async fn login_page_sends_signed_in_admin_home() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::get()
        .uri("/admin/login")
        .cookie(app.session_cookie())
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/admin");
}

#[actix_rt::test]
async fn login_page_is_open_to_anonymous_visitors() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::get().uri("/admin/login?from=/admin").to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["from"], "/admin");
}

#[actix_rt::test]
async fn dashboard_shows_session_details() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(app.session_cookie())
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["role"], "admin");
    assert_eq!(body["message"], format!("Welcome, {}", ADMIN_EMAIL));
}

#[actix_rt::test]
async fn logout_expires_the_cookie() {
    let app = TestApp::new();
    let service = app.service().await;

    let req = test::TestRequest::post()
        .uri("/admin/logout")
        .cookie(app.session_cookie())
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/login");

    let cleared = response_cookie(&resp, "admin-auth-token").expect("expiring cookie");
    assert_eq!(cleared.value(), "");
    assert!(set_cookie_header(&resp, "admin-auth-token").contains("Max-Age=-1"));
}

#[actix_rt::test]
async fn public_content_needs_no_session() {
    let app = TestApp::new();
    let service = app.service().await;

    for uri in ["/", "/health", "/content/hero", "/content/services", "/content/articles"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
    }
}
