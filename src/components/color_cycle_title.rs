//! Color Cycle Title Component
//!
//! Post title rendered one `<span>` per character, colored from the palette.
//! The rotation timer only exists while both "Litmus" flags are on.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::color_cycle::{character_colors, sync_ticker, ColorCycle};
use crate::config::use_config;
use crate::context::use_preferences;

#[component]
pub fn ColorCycleTitle(#[prop(into)] text: String) -> impl IntoView {
    let config = use_config();
    let prefs = use_preferences();
    let interval_ms = config.litmus.interval_ms;
    let cycle = RwSignal::new(ColorCycle::new(config.litmus.palette.len()));
    let ticker = StoredValue::new_local(None::<Interval>);

    // Start the timer when cycling turns on, drop (cancel) it when it turns off
    Effect::new(move |_| {
        let active = prefs.flags.get().cycling_active();
        ticker.update_value(|slot| {
            sync_ticker(slot, active, || {
                Interval::new(interval_ms, move || {
                    cycle.update(|c| {
                        c.tick(prefs.flags.get_untracked());
                    });
                })
            });
        });
    });

    on_cleanup(move || {
        ticker.update_value(|slot| {
            slot.take();
        });
    });

    let palette = config.litmus.palette.clone();
    let neutral = config.litmus.neutral_color.clone();

    view! {
        <h2 class="blog-post-title">
            {move || {
                let index = cycle.get().index();
                let color_mode = prefs.color_mode_enabled();
                character_colors(&text, index, color_mode, &palette, &neutral)
                    .into_iter()
                    .map(|(ch, color)| {
                        let color = color.to_string();
                        view! { <span style:color=color>{ch.to_string()}</span> }
                    })
                    .collect_view()
            }}
        </h2>
    }
}
