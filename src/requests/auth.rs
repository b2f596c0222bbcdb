use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Validation;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "comac")]
    pub user_id: String,
    #[schema(example = "pw1234")]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Validation {
        let mut validation = Validation::new();

        if self.user_id.trim().is_empty() {
            validation.add("userId", "User id field is required");
        }

        if self.password.is_empty() {
            validation.add("password", "Password field is required");
        }

        validation
    }
}
