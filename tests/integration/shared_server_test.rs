//! The whole user controller suite against one long-lived server
//!
//! Every scenario signs up its own accounts without cleaning up, so later
//! scenarios sign up ids that already exist. Each sign-up must still redirect.

use actix_web::http::StatusCode;
use actix_web::http::header::COOKIE;
use actix_web::test::{TestRequest, call_service};
use lighter_account::UserRepository;
use lighter_account::requests::user::UserUpdateRequest;

use super::{body_string, sign_up_request};

macro_rules! sign_up {
    ($service:expr, $user_id:expr) => {{
        let req = TestRequest::post()
            .uri("/users/create")
            .set_form(sign_up_request($user_id, "pw1234"))
            .to_request();
        let resp = call_service($service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "sign up {}", $user_id);
    }};
}

#[actix_web::test]
async fn scenarios_in_sequence_on_one_server() {
    let (service, state) = lighter_account::service!();

    // Sign up
    sign_up!(&service, "comac");

    // Login
    sign_up!(&service, "comac2");
    login!(&service, "comac2", "pw1234");

    // List
    sign_up!(&service, "comac");
    sign_up!(&service, "comac2");
    let cookie = login!(&service, "comac2", "pw1234");
    let req = TestRequest::get()
        .uri("/users")
        .insert_header((COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("comac"));
    assert!(body.contains("comac2"));

    // Profile
    sign_up!(&service, "comac");
    let cookie = login!(&service, "comac", "pw1234");
    let req = TestRequest::get()
        .uri("/users/profile?userId=comac")
        .insert_header((COOKIE, cookie))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    // Edit form
    sign_up!(&service, "comac");
    let cookie = login!(&service, "comac", "pw1234");
    let req = TestRequest::get()
        .uri("/users/updateForm?userId=comac")
        .insert_header((COOKIE, cookie))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    // Update
    sign_up!(&service, "comac");
    let cookie = login!(&service, "comac", "pw1234");
    let req = TestRequest::put()
        .uri("/users/update?userId=comac")
        .insert_header((COOKIE, cookie))
        .set_form(UserUpdateRequest {
            user_id: "cocomac".to_string(),
            password: "pw123456".to_string(),
            name: "코코맥".to_string(),
            email: "cocomac@naver.com".to_string(),
        })
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::FOUND);

    let ids: Vec<String> = state
        .users
        .all()
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.user_id)
        .collect();
    assert_eq!(ids, vec!["cocomac", "comac2"]);

    // Running the suite again on the same server still passes its first step
    sign_up!(&service, "comac");
    sign_up!(&service, "comac2");
    assert_eq!(state.users.count().await.unwrap(), 3);
}
