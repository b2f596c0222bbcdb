use super::{Html, escape, layout};

pub fn index(current: Option<&str>) -> Html {
    let greeting = match current {
        Some(user_id) => format!("<p>Logged in as <strong>{}</strong>.</p>", escape(user_id)),
        None => "<p>Sign up or log in to see the member list.</p>".to_string(),
    };

    layout(
        "Home",
        current,
        &format!("      <h1>Members</h1>\n      {}", greeting),
    )
}
