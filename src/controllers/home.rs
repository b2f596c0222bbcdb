use crate::middlewares::Auth;
use crate::views::{self, Html};

#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses((status = 200, description = "Home page", content_type = "text/html", body = String)),
)]
#[get("/")]
pub async fn index(auth: Option<Auth>) -> Html {
    views::home::index(auth.as_ref().map(Auth::user_id))
}
