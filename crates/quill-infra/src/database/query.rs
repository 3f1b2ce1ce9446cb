//! Statement construction for post listing and partial updates.
//!
//! Caller input only ever reaches a statement as a bound value. Column names
//! and sort directions come from fixed enum lookups.

use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select, UpdateMany,
};
use uuid::Uuid;

use quill_core::domain::{ListFilter, PostChanges, SortField, SortOrder};

use super::entity::post::{self, Entity as PostEntity};

const LIKE_ESCAPE: char = '\\';

fn sort_column(field: SortField) -> post::Column {
    match field {
        SortField::Title => post::Column::Title,
        SortField::CreatedAt => post::Column::CreatedAt,
    }
}

fn sort_direction(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

/// `%key%` with LIKE metacharacters in `key` escaped.
fn contains_pattern(key: &str) -> String {
    let mut pattern = String::with_capacity(key.len() + 2);
    pattern.push('%');
    for c in key.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn apply_search(select: Select<PostEntity>, filter: &ListFilter) -> Select<PostEntity> {
    match filter.search_key.as_deref() {
        Some(key) => select.filter(
            post::Column::Title.like(LikeExpr::new(contains_pattern(key)).escape(LIKE_ESCAPE)),
        ),
        None => select,
    }
}

/// The paged data query: search, optional ordering, limit and offset.
pub fn list_query(filter: &ListFilter) -> Select<PostEntity> {
    let mut select = apply_search(PostEntity::find(), filter);

    if let Some(field) = filter.sort_by {
        select = select.order_by(sort_column(field), sort_direction(filter.sort_order));
    }

    select.limit(filter.limit()).offset(filter.offset())
}

/// The count query: the same search as [`list_query`], never ordered or paged.
pub fn count_query(filter: &ListFilter) -> Select<PostEntity> {
    apply_search(PostEntity::find(), filter)
}

/// An `UPDATE` touching only the fields present in `changes`.
///
/// Returns `None` when there is nothing to write.
pub fn update_query(
    id: Uuid,
    changes: PostChanges,
    now: DateTimeWithTimeZone,
) -> Option<UpdateMany<PostEntity>> {
    if changes.is_empty() {
        return None;
    }

    let mut update = PostEntity::update_many();
    if let Some(title) = changes.title {
        update = update.col_expr(post::Column::Title, Expr::value(title));
    }
    if let Some(content) = changes.content {
        update = update.col_expr(post::Column::Content, Expr::value(content));
    }

    Some(
        update
            .col_expr(post::Column::UpdatedAt, Expr::value(now))
            .filter(post::Column::Id.eq(id)),
    )
}
