use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;

pub mod user;

/// `302 Found` pointing at `location`
pub fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
