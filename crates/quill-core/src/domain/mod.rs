//! Domain entities - the core business objects.

mod listing;
mod post;

pub use listing::{ListFilter, MAX_PAGE, PAGE_SIZE, PageResult, Pagination, SortField, SortOrder};
pub use post::{NewPost, Post, PostChanges};
