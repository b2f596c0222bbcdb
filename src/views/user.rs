use super::{Html, escape, layout, query_value};
use crate::responses::user::User;

pub fn list(users: &[User], current: &str) -> Html {
    let rows: String = users
        .iter()
        .enumerate()
        .map(|(index, user)| {
            format!(
                r#"        <tr>
          <th scope="row">{number}</th>
          <td><a href="/users/profile?userId={query}">{user_id}</a></td>
          <td>{name}</td>
          <td>{email}</td>
        </tr>
"#,
                number = index + 1,
                query = query_value(&user.user_id),
                user_id = escape(&user.user_id),
                name = escape(&user.name),
                email = escape(&user.email),
            )
        })
        .collect();

    layout(
        "Users",
        Some(current),
        &format!(
            r#"      <h1>Users</h1>
      <table>
        <thead>
          <tr><th>#</th><th>User id</th><th>Name</th><th>Email</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
      </table>"#
        ),
    )
}

pub fn profile(user: &User, current: &str) -> Html {
    let edit = if user.user_id == current {
        format!(
            r#"
      <a href="/users/updateForm?userId={}">Edit</a>"#,
            query_value(&user.user_id)
        )
    } else {
        String::new()
    };

    layout(
        "Profile",
        Some(current),
        &format!(
            r#"      <h1>Profile</h1>
      <dl>
        <dt>User id</dt><dd>{user_id}</dd>
        <dt>Name</dt><dd>{name}</dd>
        <dt>Email</dt><dd>{email}</dd>
      </dl>{edit}"#,
            user_id = escape(&user.user_id),
            name = escape(&user.name),
            email = escape(&user.email),
        ),
    )
}

/// Pre-filled edit form. The password is never echoed back.
pub fn update_form(user: &User, current: &str) -> Html {
    layout(
        "Edit account",
        Some(current),
        &format!(
            r#"      <h1>Edit account</h1>
      <form method="post" action="/users/update?userId={query}">
        <input type="hidden" name="_method" value="put">
        <label>User id <input type="text" name="userId" value="{user_id}" required></label>
        <label>Password <input type="password" name="password" required></label>
        <label>Name <input type="text" name="name" value="{name}" required></label>
        <label>Email <input type="email" name="email" value="{email}" required></label>
        <button type="submit">Save</button>
      </form>"#,
            query = query_value(&user.user_id),
            user_id = escape(&user.user_id),
            name = escape(&user.name),
            email = escape(&user.email),
        ),
    )
}

pub fn sign_up_form(current: Option<&str>) -> Html {
    layout(
        "Sign up",
        current,
        r#"      <h1>Sign up</h1>
      <form method="post" action="/users/create">
        <label>User id <input type="text" name="userId" required></label>
        <label>Password <input type="password" name="password" required></label>
        <label>Name <input type="text" name="name" required></label>
        <label>Email <input type="email" name="email" required></label>
        <button type="submit">Sign up</button>
      </form>"#,
    )
}

pub fn login_form(current: Option<&str>) -> Html {
    layout(
        "Login",
        current,
        r#"      <h1>Login</h1>
      <form method="post" action="/users/login">
        <label>User id <input type="text" name="userId" required></label>
        <label>Password <input type="password" name="password" required></label>
        <button type="submit">Login</button>
      </form>"#,
    )
}
