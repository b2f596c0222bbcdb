//! Security headers on real routes

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};

#[actix_web::test]
async fn html_pages_carry_security_headers() {
    let (service, _) = lighter_account::service!();

    for uri in ["/", "/users/form", "/users/loginForm"] {
        let resp = call_service(&service, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let headers = resp.headers();
        assert!(headers.contains_key("content-security-policy"), "{}", uri);
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert!(
            headers
                .get("content-type")
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }
}

#[actix_web::test]
async fn error_responses_carry_security_headers() {
    let (service, _) = lighter_account::service!();

    let resp = call_service(&service, TestRequest::get().uri("/users").to_request()).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key("content-security-policy"));
}
