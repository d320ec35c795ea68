//! Leptos ScrollFade Utilities
//!
//! Scroll-driven fade for Leptos using window scroll/resize events.
//! Elements fade in as they rise through the bottom band of the viewport.

use leptos::ev;
use leptos::prelude::*;

/// Default fraction of the viewport height where the fade starts
pub const DEFAULT_FADE_START: f64 = 0.3;

/// Map an element's position to an opacity in `[0, 1]`.
///
/// `element_top` is the element's offset from the document top, `scroll_offset`
/// the current vertical scroll and `viewport_height` the window's inner height.
/// An undefined ratio (0/0, NaN input) resolves to fully visible.
pub fn opacity_of(element_top: f64, scroll_offset: f64, viewport_height: f64, fade_start: f64) -> f64 {
    let distance = element_top - scroll_offset;
    let fade_band = viewport_height * fade_start;
    let raw = (viewport_height - distance) / (viewport_height - fade_band);
    if raw.is_nan() {
        return 1.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Scroll state signals
#[derive(Clone, Copy)]
pub struct ScrollSignals {
    pub scroll_y_read: ReadSignal<f64>,
    pub scroll_y_write: WriteSignal<f64>,
    pub viewport_height_read: ReadSignal<f64>,
    pub viewport_height_write: WriteSignal<f64>,
}

impl ScrollSignals {
    /// Opacity for an element at `element_top` given the current scroll state (tracked)
    pub fn opacity(&self, element_top: f64, fade_start: f64) -> f64 {
        opacity_of(
            element_top,
            self.scroll_y_read.get(),
            self.viewport_height_read.get(),
            fade_start,
        )
    }

    /// Re-read window metrics; every tracked opacity recomputes
    pub fn refresh(&self) {
        if let Some((scroll_y, height)) = read_window_metrics() {
            self.scroll_y_write.set(scroll_y);
            self.viewport_height_write.set(height);
        }
    }
}

pub fn create_scroll_signals() -> ScrollSignals {
    let (scroll_y, height) = read_window_metrics().unwrap_or((0.0, 0.0));
    let (scroll_y_read, scroll_y_write) = signal(scroll_y);
    let (viewport_height_read, viewport_height_write) = signal(height);
    ScrollSignals {
        scroll_y_read,
        scroll_y_write,
        viewport_height_read,
        viewport_height_write,
    }
}

/// Current (scroll_y, inner_height) of the window, if there is one
fn read_window_metrics() -> Option<(f64, f64)> {
    let win = web_sys::window()?;
    let scroll_y = win.scroll_y().ok()?;
    let height = win.inner_height().ok()?.as_f64()?;
    Some((scroll_y, height))
}

/// Bind window scroll and resize handlers to the signals.
///
/// Listeners are removed when the calling reactive owner is cleaned up.
pub fn bind_window_scroll(signals: ScrollSignals) {
    let on_scroll = window_event_listener(ev::scroll, move |_| signals.refresh());
    let on_resize = window_event_listener(ev::resize, move |_| signals.refresh());

    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_above_band_is_opaque() {
        // 100px below the viewport top in an 800px window
        assert_eq!(opacity_of(100.0, 0.0, 800.0, DEFAULT_FADE_START), 1.0);
    }

    #[test]
    fn test_element_below_viewport_is_transparent() {
        assert_eq!(opacity_of(2000.0, 0.0, 800.0, DEFAULT_FADE_START), 0.0);
        assert_eq!(opacity_of(800.0, 0.0, 800.0, DEFAULT_FADE_START), 0.0);
    }

    #[test]
    fn test_linear_inside_band() {
        // band = 240, distance = 680 -> (800 - 680) / (800 - 240)
        let opacity = opacity_of(1180.0, 500.0, 800.0, DEFAULT_FADE_START);
        assert!((opacity - 120.0 / 560.0).abs() < 1e-9);
    }

    #[test]
    fn test_scrolled_past_stays_opaque() {
        // Negative distance: element is above the viewport
        assert_eq!(opacity_of(0.0, 5000.0, 800.0, DEFAULT_FADE_START), 1.0);
    }

    #[test]
    fn test_always_within_unit_interval() {
        let tops = [-1e6, -10.0, 0.0, 123.4, 799.9, 1e6];
        let scrolls = [-500.0, 0.0, 250.0, 1e5];
        let heights = [0.0, 1.0, 600.0, 1080.0];
        for &top in &tops {
            for &scroll in &scrolls {
                for &height in &heights {
                    let o = opacity_of(top, scroll, height, DEFAULT_FADE_START);
                    assert!((0.0..=1.0).contains(&o), "{} {} {} -> {}", top, scroll, height, o);
                }
            }
        }
    }

    #[test]
    fn test_zero_height_viewport() {
        assert_eq!(opacity_of(0.0, 0.0, 0.0, DEFAULT_FADE_START), 1.0);
    }

    #[test]
    fn test_custom_fade_start() {
        // No band: divide by the full viewport height
        let opacity = opacity_of(400.0, 0.0, 800.0, 0.0);
        assert!((opacity - 0.5).abs() < 1e-9);
    }
}
