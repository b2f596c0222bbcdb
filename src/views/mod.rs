//! Server rendered pages
//!
//! Every value interpolated into markup goes through [`escape`], and every value
//! placed in a query string goes through [`query_value`].

use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};

pub mod home;
pub mod user;

/// A rendered HTML document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Html(pub String);

impl Html {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Responder for Html {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(self.0)
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Percent-encode a query string value, then escape it for an attribute
pub fn query_value(value: &str) -> String {
    escape(&urlencoding::encode(value))
}

/// Wrap page content in the shared layout. `current` is the logged-in user id.
pub fn layout(title: &str, current: Option<&str>, content: &str) -> Html {
    let navigation = match current {
        Some(user_id) => format!(
            r#"<span class="current-user">{user}</span>
      <a href="/users">Users</a>
      <a href="/users/profile?userId={query}">Profile</a>
      <a href="/users/logout">Logout</a>"#,
            user = escape(user_id),
            query = query_value(user_id),
        ),
        None => r#"<a href="/users/loginForm">Login</a>
      <a href="/users/form">Sign up</a>"#
            .to_string(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ko">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      {navigation}
    </nav>
    <main>
{content}
    </main>
  </body>
</html>
"#,
        title = escape(title),
    ))
}
