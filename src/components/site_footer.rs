//! Site Footer Component
//!
//! "Litmus" / "Litmus+" toggles and the clock.

use leptos::prelude::*;

use crate::components::{Clock, Tooltip};
use crate::context::use_preferences;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let prefs = use_preferences();

    view! {
        <footer class="footer">
            <Tooltip text="Activate coloring mode for the page.">
                <label for="litmus-toggle" class="checkbox-label">
                    <input
                        id="litmus-toggle"
                        type="checkbox"
                        prop:checked=move || prefs.color_mode_enabled()
                        on:change=move |_| prefs.toggle_color_mode()
                    />
                    "Litmus"
                </label>
            </Tooltip>

            <Tooltip text="Enable character-by-character color cycling. Works only if Litmus is active.">
                <label for="litmus-plus-toggle" class="checkbox-label">
                    <input
                        id="litmus-plus-toggle"
                        type="checkbox"
                        prop:checked=move || prefs.color_cycle_enabled()
                        prop:disabled=move || !prefs.color_mode_enabled()
                        on:change=move |_| prefs.toggle_color_cycle()
                    />
                    "Litmus+"
                </label>
            </Tooltip>

            <Clock />
        </footer>
    }
}
