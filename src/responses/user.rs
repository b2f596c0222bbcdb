use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User as Model;

/// Public view of an account, without the password hash
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "comac")]
    pub user_id: String,
    #[schema(example = "코맥")]
    pub name: String,
    #[schema(example = "park@naver.com")]
    pub email: String,
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name,
            email: model.email,
        }
    }
}

impl From<&Model> for User {
    fn from(model: &Model) -> Self {
        Self::from(model.clone())
    }
}
