//! Filter Controls Component
//!
//! Search box, category selector and date sort selector bound to the filter store.

use leptos::prelude::*;

use crate::components::Tooltip;
use crate::config::use_config;
use crate::models::SortDirection;
use crate::store::{use_filter_store, FilterStateStoreFields};

#[component]
pub fn FilterControls() -> impl IntoView {
    let store = use_filter_store();
    let config = use_config();
    let categories = config.categories.names();
    let placeholder = config.site.search_placeholder.clone();

    view! {
        <div class="controls">
            <div class="control-item">
                <Tooltip text="Search blog posts by title">
                    <input
                        id="searchQuery"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || store.query().get()
                        on:input=move |ev| { *store.query().write() = event_target_value(&ev); }
                    />
                </Tooltip>
            </div>

            <div class="control-item">
                <Tooltip text="Filter posts by category">
                    <select
                        id="categoryFilter"
                        prop:value=move || store.category().get()
                        on:change=move |ev| { *store.category().write() = event_target_value(&ev); }
                    >
                        <option value="">"All"</option>
                        {categories.into_iter().map(|name| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        }).collect_view()}
                    </select>
                </Tooltip>
            </div>

            <div class="control-item">
                <Tooltip text="Sort posts by date">
                    <select
                        id="sortOrder"
                        prop:value=move || store.sort_direction().get().as_str()
                        on:change=move |ev| {
                            *store.sort_direction().write() = SortDirection::from_value(&event_target_value(&ev));
                        }
                    >
                        <option value="desc">"Newest"</option>
                        <option value="asc">"Oldest"</option>
                    </select>
                </Tooltip>
            </div>
        </div>
    }
}
