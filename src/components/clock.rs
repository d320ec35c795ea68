//! Clock Component
//!
//! Date and time in the visitor's timezone, refreshed every tick.
//! Renders nothing until the timezone is resolved.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::use_config;
use crate::timezone::{
    format_clock, intl_supports, local_timezone, resolve_timezone, usable_locale, IpGeolocation,
};

#[component]
pub fn Clock() -> impl IntoView {
    let config = use_config();
    let (timezone, set_timezone) = signal(None::<String>);
    let (now, set_now) = signal(js_sys::Date::now());

    let locale = usable_locale(&config.clock.locale, |l| intl_supports(l, "UTC"));

    // Resolve once per mount
    let url = config.clock.geolocation_url.clone();
    let zone_locale = locale.clone();
    spawn_local(async move {
        let source = IpGeolocation::new(url);
        let tz = resolve_timezone(&source, |tz| intl_supports(&zone_locale, tz), local_timezone).await;
        set_timezone.set(Some(tz));
    });

    let ticker = StoredValue::new_local(Some(Interval::new(config.clock.interval_ms, move || {
        set_now.set(js_sys::Date::now());
    })));
    on_cleanup(move || {
        ticker.update_value(|slot| {
            slot.take();
        });
    });

    let line = move || {
        let tz = timezone.get()?;
        match format_clock(now.get(), &locale, &tz) {
            Ok(line) => Some(line),
            Err(e) => {
                log::warn!("[CLOCK] {}", e);
                None
            }
        }
    };

    view! {
        {move || line().map(|text| view! {
            <div class="time-display">
                <p>{text}</p>
            </div>
        })}
    }
}
