//! Filter-Sort Pipeline
//!
//! Pure projection of the post repository through the current filter state.

use crate::models::{Post, SortDirection};

/// Whether a post passes the query and category filters.
///
/// An empty query or an empty/absent category matches everything. The query
/// is a case-insensitive substring of the title; the category must match exactly.
pub fn matches(post: &Post, query_lower: &str, category: Option<&str>) -> bool {
    let query_ok = query_lower.is_empty() || post.title.to_lowercase().contains(query_lower);
    let category_ok = match category {
        Some(category) if !category.is_empty() => post.category == category,
        _ => true,
    };
    query_ok && category_ok
}

/// Filter and date-sort `posts`. Never mutates the input; ties keep input order.
pub fn project(posts: &[Post], query: &str, category: Option<&str>, direction: SortDirection) -> Vec<Post> {
    let query_lower = query.to_lowercase();
    let mut view: Vec<Post> = posts
        .iter()
        .filter(|post| matches(post, &query_lower, category))
        .cloned()
        .collect();

    match direction {
        SortDirection::Asc => view.sort_by(|a, b| a.date.cmp(&b.date)),
        SortDirection::Desc => view.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    view
}
