//! Litmus Blog App
//!
//! Root component: loads config, posts and preferences, wires the filter
//! store to the derived view.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterControls, PostList, SiteFooter, SiteHeader};
use crate::config::{BlogConfig, SharedConfig};
use crate::context::{open_storage, provide_preferences};
use crate::repository::PostRepository;
use crate::store::{derived_view, FilterState};

#[component]
pub fn App() -> impl IntoView {
    let config: SharedConfig = Arc::new(BlogConfig::load());
    provide_context(config.clone());
    provide_preferences(open_storage(), config.storage.clone());

    let repo = PostRepository::load();
    let store = Store::new(FilterState::default());
    provide_context(store);

    let posts = derived_view(store, repo);
    Effect::new(move |_| {
        log::debug!("[APP] Showing {} posts", posts.get().len());
    });

    view! {
        <div class="container">
            <SiteHeader />
            <FilterControls />
            <PostList posts=posts />
            <SiteFooter />
        </div>
    }
}
