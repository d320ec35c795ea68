//! Filter State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Post, SortDirection};
use crate::pipeline;
use crate::repository::PostRepository;

/// Search, category and sort selections for the current session
#[derive(Clone, Debug, Default, Store)]
pub struct FilterState {
    /// Title search text
    pub query: String,
    /// Selected category ("" = all)
    pub category: String,
    /// Date sort direction
    pub sort_direction: SortDirection,
}

/// Type alias for the store
pub type FilterStore = Store<FilterState>;

/// Get the filter store from context
pub fn use_filter_store() -> FilterStore {
    expect_context::<FilterStore>()
}

/// Derived view, recomputed whenever a filter field changes
pub fn derived_view(store: FilterStore, repo: PostRepository) -> Memo<Vec<Post>> {
    Memo::new(move |_| {
        let query = store.query().get();
        let category = store.category().get();
        let direction = store.sort_direction().get();
        let category = (!category.is_empty()).then_some(category.as_str());
        pipeline::project(repo.posts(), &query, category, direction)
    })
}
