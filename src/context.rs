//! Preference Context
//!
//! The "Litmus" flags provided via Leptos Context API, persisted on change.

use leptos::prelude::*;

use crate::config::StorageConfig;
use crate::preferences::{KeyValueStorage, LocalStorage, MemoryStorage, PreferenceFlags};

/// Preference signals provided via context
#[derive(Clone, Copy)]
pub struct PreferenceContext {
    /// Current flags - read
    pub flags: ReadSignal<PreferenceFlags>,
    /// Current flags - write
    set_flags: WriteSignal<PreferenceFlags>,
}

impl PreferenceContext {
    pub fn new(flags: (ReadSignal<PreferenceFlags>, WriteSignal<PreferenceFlags>)) -> Self {
        Self {
            flags: flags.0,
            set_flags: flags.1,
        }
    }

    pub fn color_mode_enabled(&self) -> bool {
        self.flags.get().color_mode_enabled
    }

    pub fn color_cycle_enabled(&self) -> bool {
        self.flags.get().color_cycle_enabled
    }

    /// Toggle "Litmus"
    pub fn toggle_color_mode(&self) {
        self.set_flags.update(|f| f.color_mode_enabled = !f.color_mode_enabled);
    }

    /// Toggle "Litmus+"
    pub fn toggle_color_cycle(&self) {
        self.set_flags.update(|f| f.color_cycle_enabled = !f.color_cycle_enabled);
    }
}

/// Open browser storage, falling back to an in-memory map for this session
pub fn open_storage() -> Box<dyn KeyValueStorage> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[PREFS] {}; preferences will not persist", e);
            Box::new(MemoryStorage::default())
        }
    }
}

/// Load the flags, provide them as context and write them back on every change
pub fn provide_preferences(storage: Box<dyn KeyValueStorage>, keys: StorageConfig) -> PreferenceContext {
    let initial = PreferenceFlags::load(storage.as_ref(), &keys);
    log::info!("[PREFS] Loaded {:?}", initial);
    let (flags, set_flags) = signal(initial);

    Effect::new(move |_| {
        let current = flags.get();
        if let Err(e) = current.save(storage.as_ref(), &keys) {
            log::warn!("[PREFS] Failed to save: {}", e);
        }
    });

    let ctx = PreferenceContext::new((flags, set_flags));
    provide_context(ctx);
    ctx
}

/// Get the preferences from context
pub fn use_preferences() -> PreferenceContext {
    expect_context::<PreferenceContext>()
}
