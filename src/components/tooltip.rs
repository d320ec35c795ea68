//! Tooltip Component
//!
//! Hover tooltip wrapped around any child content.

use leptos::prelude::*;

#[component]
pub fn Tooltip(#[prop(into)] text: String, children: Children) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <span
            class="custom-tooltip-wrapper"
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {children()}
            <Show when=move || visible.get()>
                <div class="custom-tooltip" style="z-index: 1000;">{text.clone()}</div>
            </Show>
        </span>
    }
}
