//! Clock Timezone and Formatting
//!
//! Resolves the display timezone once (IP geolocation, falling back to the
//! browser's own zone) and formats date/time through the browser `Intl` API.

use js_sys::{Array, Function, Reflect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{BlogError, Result};

/// Something that can name the visitor's IANA timezone
#[allow(async_fn_in_trait)]
pub trait TimezoneSource {
    async fn lookup(&self) -> Result<String>;
}

/// Geolocation response body; only the timezone matters
#[derive(Debug, Deserialize)]
struct GeoResponse {
    timezone: Option<String>,
}

/// IP-to-timezone lookup over HTTPS
pub struct IpGeolocation {
    client: reqwest::Client,
    url: String,
}

impl IpGeolocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl TimezoneSource for IpGeolocation {
    async fn lookup(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BlogError::Geolocation(format!("HTTP {}", status)));
        }
        let body: GeoResponse = response.json().await?;
        parse_timezone(body)
    }
}

fn parse_timezone(body: GeoResponse) -> Result<String> {
    body.timezone
        .filter(|tz| !tz.trim().is_empty())
        .ok_or_else(|| BlogError::Geolocation("response has no timezone".to_string()))
}

/// Resolve once: the source's answer, or `fallback()` on any failure.
///
/// An answer `is_supported` rejects counts as a failure.
pub async fn resolve_timezone<S, V, F>(source: &S, is_supported: V, fallback: F) -> String
where
    S: TimezoneSource,
    V: Fn(&str) -> bool,
    F: FnOnce() -> String,
{
    let answer = source.lookup().await.and_then(|tz| {
        if is_supported(&tz) {
            Ok(tz)
        } else {
            Err(BlogError::Geolocation(format!("unsupported timezone {:?}", tz)))
        }
    });
    match answer {
        Ok(tz) => {
            log::info!("[CLOCK] Timezone from geolocation: {}", tz);
            tz
        }
        Err(e) => {
            let tz = fallback();
            log::warn!("[CLOCK] {}; falling back to {}", e, tz);
            tz
        }
    }
}

/// The browser's resolved timezone (`Intl.DateTimeFormat().resolvedOptions().timeZone`)
pub fn local_timezone() -> String {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "UTC".to_string())
}

/// `toLocaleTimeString` options: 2-digit h:m:s, 12-hour clock
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOptions<'a> {
    pub hour: &'a str,
    pub minute: &'a str,
    pub second: &'a str,
    pub hour12: bool,
    pub time_zone: &'a str,
}

impl<'a> TimeOptions<'a> {
    pub fn new(time_zone: &'a str) -> Self {
        Self {
            hour: "2-digit",
            minute: "2-digit",
            second: "2-digit",
            hour12: true,
            time_zone,
        }
    }
}

/// `toLocaleDateString` options: 2-digit day, long month, numeric year
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOptions<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub time_zone: &'a str,
}

impl<'a> DateOptions<'a> {
    pub fn new(time_zone: &'a str) -> Self {
        Self {
            day: "2-digit",
            month: "long",
            year: "numeric",
            time_zone,
        }
    }
}

pub const DEFAULT_LOCALE: &str = "en-US";

/// `configured` if the browser accepts it, else `DEFAULT_LOCALE`
pub fn usable_locale<A>(configured: &str, accepts: A) -> String
where
    A: Fn(&str) -> bool,
{
    if accepts(configured) {
        configured.to_string()
    } else {
        log::warn!("[CLOCK] Locale {:?} rejected; using {}", configured, DEFAULT_LOCALE);
        DEFAULT_LOCALE.to_string()
    }
}

/// Whether `Intl.DateTimeFormat` accepts this locale and zone pair
pub fn intl_supports(locale: &str, time_zone: &str) -> bool {
    serde_wasm_bindgen::to_value(&TimeOptions::new(time_zone))
        .map_err(|e| BlogError::Format(e.to_string()))
        .and_then(|options| date_time_format(locale, &options))
        .is_ok()
}

fn js_error(e: JsValue) -> BlogError {
    BlogError::Format(format!("{:?}", e))
}

/// `new Intl.DateTimeFormat(locale, options)`, with a `RangeError` returned as `Err`
fn date_time_format(locale: &str, options: &JsValue) -> Result<js_sys::Intl::DateTimeFormat> {
    let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl")).map_err(js_error)?;
    let constructor: Function = Reflect::get(&intl, &JsValue::from_str("DateTimeFormat"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let args = Array::of2(&JsValue::from_str(locale), options);
    let format = Reflect::construct(&constructor, &args).map_err(js_error)?;
    Ok(format.unchecked_into())
}

fn format_with<O: Serialize>(locale: &str, options: &O, date: &JsValue) -> Result<String> {
    let options = serde_wasm_bindgen::to_value(options).map_err(|e| BlogError::Format(e.to_string()))?;
    date_time_format(locale, &options)?
        .format()
        .call1(&JsValue::UNDEFINED, date)
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| BlogError::Format("formatter returned a non-string".to_string()))
}

/// Clock line as displayed: "<date> + <time>"
pub fn clock_line(date: &str, time: &str) -> String {
    format!("{} + {}", date, time)
}

/// Format `millis` (epoch ms) in `time_zone` for `locale`
pub fn format_clock(millis: f64, locale: &str, time_zone: &str) -> Result<String> {
    let now = JsValue::from(js_sys::Date::new(&JsValue::from_f64(millis)));
    let time = format_with(locale, &TimeOptions::new(time_zone), &now)?;
    let date = format_with(locale, &DateOptions::new(time_zone), &now)?;
    Ok(clock_line(&date, &time))
}
