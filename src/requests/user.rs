use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{Error, Validation};
use crate::security::Validator;
use crate::security::validation::{NAME_MAX_LENGTH, USER_ID_MAX_LENGTH};

/// Sign-up form
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStoreRequest {
    #[schema(example = "comac")]
    pub user_id: String,
    #[schema(example = "pw1234")]
    pub password: String,
    #[schema(example = "코맥")]
    pub name: String,
    #[schema(example = "park@naver.com")]
    pub email: String,
}

/// Edit form, carrying the new values of every field
///
/// Browser forms also send `_method=put`, which is ignored here.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[schema(example = "cocomac")]
    pub user_id: String,
    #[schema(example = "pw123456")]
    pub password: String,
    #[schema(example = "코코맥")]
    pub name: String,
    #[schema(example = "cocomac@naver.com")]
    pub email: String,
}

/// `?userId=` selecting the account a page or update applies to
#[derive(Clone, Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// Account to show or modify
    pub user_id: Option<String>,
}

impl UserIdQuery {
    pub fn require(&self) -> Result<&str, Error> {
        match self.user_id.as_deref().map(str::trim) {
            Some(user_id) if !user_id.is_empty() => Ok(user_id),
            _ => Err(Error::bad_request("userId query parameter is required")),
        }
    }
}

impl UserStoreRequest {
    /// Trim surrounding whitespace; the password is kept verbatim
    pub fn normalized(self) -> Self {
        Self {
            user_id: self.user_id.trim().to_string(),
            password: self.password,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
        }
    }

    pub fn validate(&self) -> Validation {
        validate_fields(&self.user_id, &self.password, &self.name, &self.email)
    }
}

impl UserUpdateRequest {
    pub fn normalized(self) -> Self {
        Self {
            user_id: self.user_id.trim().to_string(),
            password: self.password,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
        }
    }

    pub fn validate(&self) -> Validation {
        validate_fields(&self.user_id, &self.password, &self.name, &self.email)
    }
}

fn validate_fields(user_id: &str, password: &str, name: &str, email: &str) -> Validation {
    let mut validation = Validation::new();

    if user_id.is_empty() {
        validation.add("userId", "User id field is required");
    } else if !Validator::validate_user_id(user_id) {
        validation.add(
            "userId",
            format!(
                "User id may only contain letters, digits, '_', '-' and '.' (max {} characters)",
                USER_ID_MAX_LENGTH
            ),
        );
    }

    if password.is_empty() {
        validation.add("password", "Password field is required");
    } else if !Validator::validate_password(password) {
        validation.add("password", "Password is too long");
    }

    if name.is_empty() {
        validation.add("name", "Name field is required");
    } else if !Validator::validate_name(name) {
        validation.add(
            "name",
            format!("Name must be at most {} characters", NAME_MAX_LENGTH),
        );
    }

    if email.is_empty() {
        validation.add("email", "Email field is required");
    } else if !Validator::validate_email(email) {
        validation.add("email", "Email is invalid");
    }

    validation
}
