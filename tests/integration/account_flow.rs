//! End-to-end account flow: sign up, login, list, profile, edit form, update
//!
//! Success paths first, then the failure statuses of each endpoint.

use actix_web::http::StatusCode;
use actix_web::http::header::COOKIE;
use actix_web::test::{TestRequest, call_service};
use lighter_account::requests::user::UserUpdateRequest;
use lighter_account::UserRepository;
use lighter_account::testing::setup;

use super::{body_string, location, sign_up_request};

// =============================================================================
// SUCCESS PATH TESTS
// =============================================================================

#[actix_web::test]
async fn sign_up_redirects_home() {
    let (service, state) = lighter_account::service!();

    let req = TestRequest::post()
        .uri("/users/create")
        .set_form(sign_up_request("comac", "pw1234"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).as_deref(), Some("/"));

    let stored = state.users.find("comac").await.unwrap().unwrap();
    assert_eq!(stored.name, "코맥");
    assert_eq!(stored.email, "park@naver.com");
    assert_ne!(stored.password, "pw1234", "password must be stored hashed");
}

#[actix_web::test]
async fn login_sets_session_cookie() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;

    let req = TestRequest::post()
        .uri("/users/login")
        .set_form(super::login_request("comac", "pw1234"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).as_deref(), Some("/"));

    let cookie = setup::set_cookie(&resp).expect("Set-Cookie header");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(state.sessions.len(), 1);
}

#[actix_web::test]
async fn list_contains_every_user_id() {
    let (service, _) = lighter_account::service!();

    for user_id in ["comac", "comac2"] {
        let req = TestRequest::post()
            .uri("/users/create")
            .set_form(sign_up_request(user_id, "pw1234"))
            .to_request();
        assert_eq!(call_service(&service, req).await.status(), StatusCode::FOUND);
    }

    let cookie = login!(&service, "comac", "pw1234");

    let req = TestRequest::get()
        .uri("/users")
        .insert_header((COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("comac"));
    assert!(body.contains("comac2"));
    assert!(body.find("comac2").unwrap() > body.find(">comac<").unwrap());
}

#[actix_web::test]
async fn profile_shows_user() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    let cookie = login!(&service, "comac", "pw1234");

    let req = TestRequest::get()
        .uri("/users/profile?userId=comac")
        .insert_header((COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("comac"));
    assert!(body.contains("comac@naver.com"));
    assert!(body.contains("/users/updateForm?userId=comac"));
}

#[actix_web::test]
async fn update_form_is_prefilled() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    let cookie = login!(&service, "comac", "pw1234");

    let req = TestRequest::get()
        .uri("/users/updateForm?userId=comac")
        .insert_header((COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"value="comac""#));
    assert!(body.contains(r#"value="comac@naver.com""#));
    assert!(!body.contains("pw1234"));
}

#[actix_web::test]
async fn update_changes_every_field() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    let cookie = login!(&service, "comac", "pw1234");

    let req = TestRequest::put()
        .uri("/users/update?userId=comac")
        .insert_header((COOKIE, cookie.clone()))
        .set_form(UserUpdateRequest {
            user_id: "cocomac".to_string(),
            password: "pw123456".to_string(),
            name: "코코맥".to_string(),
            email: "cocomac@naver.com".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).as_deref(), Some("/users"));

    assert!(state.users.find("comac").await.unwrap().is_none());
    let updated = state.users.find("cocomac").await.unwrap().unwrap();
    assert_eq!(updated.name, "코코맥");
    assert_eq!(updated.email, "cocomac@naver.com");

    // The same browser is still logged in, now as the new id
    let req = TestRequest::get()
        .uri("/users/profile?userId=cocomac")
        .insert_header((COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("코코맥"));

    // Only the new password works
    let req = TestRequest::post()
        .uri("/users/login")
        .set_form(super::login_request("cocomac", "pw1234"))
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    login!(&service, "cocomac", "pw123456");
}

#[actix_web::test]
async fn update_accepts_browser_post() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    let cookie = setup::login(&state, "comac");

    let req = TestRequest::post()
        .uri("/users/update?userId=comac")
        .insert_header((COOKIE, cookie))
        .set_form(&[
            ("_method", "put"),
            ("userId", "comac"),
            ("password", "pw1234"),
            ("name", "박코맥"),
            ("email", "comac@naver.com"),
        ])
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let updated = state.users.find("comac").await.unwrap().unwrap();
    assert_eq!(updated.name, "박코맥");
}

// =============================================================================
// FAILURE PATH TESTS
// =============================================================================

#[actix_web::test]
async fn duplicate_sign_up_keeps_existing_account() {
    let (service, state) = lighter_account::service!();
    let original = setup::create_user(&state, "comac", "pw1234").await;

    let req = TestRequest::post()
        .uri("/users/create")
        .set_form(sign_up_request("comac", "other"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).as_deref(), Some("/users/form"));
    assert_eq!(state.users.find("comac").await.unwrap(), Some(original));
    assert_eq!(state.users.count().await.unwrap(), 1);

    // The original password still logs in
    login!(&service, "comac", "pw1234");
}

#[actix_web::test]
async fn invalid_sign_up_lists_each_field() {
    let (service, _) = lighter_account::service!();

    let req = TestRequest::post()
        .uri("/users/create")
        .set_form(&[
            ("userId", "  "),
            ("password", ""),
            ("name", "코맥"),
            ("email", "not-an-email"),
        ])
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert!(body["errors"]["userId"].is_array());
    assert!(body["errors"]["password"].is_array());
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["name"].is_null());
}

#[actix_web::test]
async fn wrong_password_is_unauthorized() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;

    for (user_id, password) in [("comac", "wrong"), ("nobody", "pw1234")] {
        let req = TestRequest::post()
            .uri("/users/login")
            .set_form(super::login_request(user_id, password))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(setup::set_cookie(&resp).is_none());
    }
    assert!(state.sessions.is_empty());
}

#[actix_web::test]
async fn protected_pages_require_login() {
    let (service, _) = lighter_account::service!();

    for uri in [
        "/users",
        "/users/profile?userId=comac",
        "/users/updateForm?userId=comac",
    ] {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let req = TestRequest::put()
        .uri("/users/update?userId=comac")
        .set_form(sign_up_request("comac", "pw1234"))
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn unknown_profile_is_not_found() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    let cookie = setup::login(&state, "comac");

    let req = TestRequest::get()
        .uri("/users/profile?userId=ghost")
        .insert_header((COOKIE, cookie.clone()))
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = TestRequest::get()
        .uri("/users/profile")
        .insert_header((COOKIE, cookie))
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn other_accounts_cannot_be_edited() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    setup::create_user(&state, "comac2", "pw1234").await;
    let cookie = setup::login(&state, "comac");

    let req = TestRequest::get()
        .uri("/users/updateForm?userId=comac2")
        .insert_header((COOKIE, cookie.clone()))
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = TestRequest::put()
        .uri("/users/update?userId=comac2")
        .insert_header((COOKIE, cookie))
        .set_form(sign_up_request("hijacked", "pw1234"))
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::FORBIDDEN
    );

    assert!(state.users.find("comac2").await.unwrap().is_some());
    assert!(state.users.find("hijacked").await.unwrap().is_none());
}

#[actix_web::test]
async fn rename_onto_taken_id_is_rejected() {
    let (service, state) = lighter_account::service!();
    setup::create_user(&state, "comac", "pw1234").await;
    setup::create_user(&state, "comac2", "pw1234").await;
    let cookie = setup::login(&state, "comac");

    let req = TestRequest::put()
        .uri("/users/update?userId=comac")
        .insert_header((COOKIE, cookie))
        .set_form(sign_up_request("comac2", "pw1234"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        state.users.find("comac").await.unwrap().unwrap().name,
        "코맥"
    );
    assert_eq!(state.users.count().await.unwrap(), 2);
}
