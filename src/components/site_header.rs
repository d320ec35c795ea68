//! Site Header Component

use leptos::prelude::*;

use crate::config::use_config;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = use_config();

    view! {
        <header class="app-header">
            <h1 style="font-family: 'Old English Text MT', serif;">{config.site.title.clone()}</h1>
        </header>
    }
}
