//! Request validation - turns raw DTOs into validated domain input.
//!
//! Nothing here touches storage; every rejection happens before the service
//! is called.

use quill_core::FieldViolation;
use quill_core::domain::{ListFilter, MAX_PAGE, NewPost, PostChanges, SortField, SortOrder};
use quill_shared::dto::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};
use validator::{Validate, ValidationErrors};

use crate::middleware::error::AppError;

/// Body fields of the post DTOs, in declaration order.
const POST_FIELDS: &[&str] = &["title", "content"];

/// Flatten `validator` output into violations, ordered as the fields are
/// declared in `field_order`.
fn violations(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldViolation> {
    let rank = |field: &str| {
        field_order
            .iter()
            .position(|f| *f == field)
            .unwrap_or(field_order.len())
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| rank(&*a.0).cmp(&rank(&*b.0)).then_with(|| a.0.cmp(&b.0)));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::new(field.to_string(), message)
            })
        })
        .collect()
}

fn check(input: &impl Validate, field_order: &[&str]) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|errors| AppError::Validation(violations(&errors, field_order)))
}

pub fn new_post(req: CreatePostRequest) -> Result<NewPost, AppError> {
    check(&req, POST_FIELDS)?;
    // Both fields are present and non-empty past `check`.
    Ok(NewPost {
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
    })
}

pub fn post_changes(req: UpdatePostRequest) -> Result<PostChanges, AppError> {
    check(&req, POST_FIELDS)?;
    Ok(PostChanges {
        title: req.title,
        content: req.content,
    })
}

/// Coerce and allow-list the listing query string.
///
/// `page` must parse as an integer in `1..=MAX_PAGE`; an empty `searchKey`
/// means no search.
pub fn list_filter(query: ListPostsQuery) -> Result<ListFilter, AppError> {
    let mut violations = Vec::new();

    let page = match query.page.as_deref() {
        None => 1,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(page) if (1..=MAX_PAGE).contains(&page) => page,
            _ => {
                violations.push(FieldViolation::new(
                    "page",
                    "page must be a positive integer",
                ));
                1
            }
        },
    };

    let sort_by = match query.sort_by.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<SortField>() {
            Ok(field) => Some(field),
            Err(()) => {
                violations.push(FieldViolation::new("sortBy", "sortBy is not valid"));
                None
            }
        },
    };

    let sort_order = match query.sort_order.as_deref() {
        None => SortOrder::default(),
        Some(raw) => raw.parse::<SortOrder>().unwrap_or_else(|()| {
            violations.push(FieldViolation::new("sortOrder", "sortOrder is not valid"));
            SortOrder::default()
        }),
    };

    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    Ok(ListFilter {
        page,
        search_key: query.search_key.filter(|key| !key.is_empty()),
        sort_by,
        sort_order,
    })
}
