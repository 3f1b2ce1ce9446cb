//! Data Transfer Objects - request types for the API.
//!
//! Body fields are optional at the serde level so a missing field is reported
//! as a field violation by `validator` rather than as a parse error.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Content is required"),
        length(min = 1, message = "Content is required")
    )]
    pub content: Option<String>,
}

/// Body of `PUT /posts/{id}`. Absent and `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is not valid"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Content is not valid"))]
    pub content: Option<String>,
}

/// Raw query string of `GET /posts`, before coercion and allow-list checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page: Option<String>,
    pub search_key: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
