//! Title Color Cycling
//!
//! Per-character color assignment for "Litmus" titles. The rotating index
//! only moves while both preference flags are on.

use crate::preferences::PreferenceFlags;

/// Rotating palette offset for one title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    index: usize,
    palette_len: usize,
}

impl ColorCycle {
    pub fn new(palette_len: usize) -> Self {
        Self {
            index: 0,
            palette_len: palette_len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// One timer tick. Advances by one only when cycling is active; returns whether it moved.
    pub fn tick(&mut self, flags: PreferenceFlags) -> bool {
        if !flags.cycling_active() {
            return false;
        }
        self.index = (self.index + 1) % self.palette_len;
        true
    }
}

/// Keep `slot` holding a timer exactly while `active`.
///
/// Turning inactive drops (cancels) the held timer; turning active creates one
/// with `make` unless one is already running.
pub fn sync_ticker<T>(slot: &mut Option<T>, active: bool, make: impl FnOnce() -> T) {
    if !active {
        *slot = None;
    } else if slot.is_none() {
        *slot = Some(make());
    }
}

/// Color of each character of `text`.
///
/// With color mode on, character `i` gets `palette[(i + index) % len]`;
/// otherwise every character gets `neutral`.
pub fn character_colors<'a>(
    text: &str,
    index: usize,
    color_mode_enabled: bool,
    palette: &'a [String],
    neutral: &'a str,
) -> Vec<(char, &'a str)> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let color = if color_mode_enabled && !palette.is_empty() {
                palette[(i + index) % palette.len()].as_str()
            } else {
                neutral
            };
            (ch, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const ON: PreferenceFlags = PreferenceFlags {
        color_mode_enabled: true,
        color_cycle_enabled: true,
    };

    fn palette() -> Vec<String> {
        (0..8).map(|i| format!("c{}", i)).collect()
    }

    #[test]
    fn test_advances_one_per_tick_while_active() {
        let mut cycle = ColorCycle::new(8);
        for expected in 1..=20 {
            assert!(cycle.tick(ON));
            assert_eq!(cycle.index(), expected % 8);
        }
    }

    #[test]
    fn test_freezes_when_either_flag_off() {
        let mut cycle = ColorCycle::new(8);
        cycle.tick(ON);
        cycle.tick(ON);

        let cases = [
            PreferenceFlags { color_mode_enabled: false, color_cycle_enabled: true },
            PreferenceFlags { color_mode_enabled: true, color_cycle_enabled: false },
            PreferenceFlags { color_mode_enabled: false, color_cycle_enabled: false },
        ];
        for flags in cases {
            for _ in 0..5 {
                assert!(!cycle.tick(flags));
            }
            assert_eq!(cycle.index(), 2);
        }

        // Resumes from the frozen value
        cycle.tick(ON);
        assert_eq!(cycle.index(), 3);
    }

    #[test]
    fn test_character_colors_rotate() {
        let palette = palette();
        let colors = character_colors("abc", 0, true, &palette, "n");
        assert_eq!(colors, vec![('a', "c0"), ('b', "c1"), ('c', "c2")]);

        let colors = character_colors("abc", 7, true, &palette, "n");
        assert_eq!(colors, vec![('a', "c7"), ('b', "c0"), ('c', "c1")]);
    }

    #[test]
    fn test_character_colors_neutral_when_mode_off() {
        let palette = palette();
        let colors = character_colors("héllo", 3, false, &palette, "n");
        assert_eq!(colors.len(), 5);
        assert!(colors.iter().all(|(_, c)| *c == "n"));
    }

    /// Stand-in timer that counts how many were cancelled
    struct Timer(Rc<Cell<usize>>);

    impl Drop for Timer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_ticker_follows_active_flag() {
        let created = Cell::new(0);
        let dropped = Rc::new(Cell::new(0));
        let mut slot = None;
        let sync = |slot: &mut Option<Timer>, active: bool| {
            sync_ticker(slot, active, || {
                created.set(created.get() + 1);
                Timer(dropped.clone())
            })
        };

        sync(&mut slot, true);
        assert!(slot.is_some());
        assert_eq!((created.get(), dropped.get()), (1, 0));

        // Already running: no second timer
        sync(&mut slot, true);
        sync(&mut slot, true);
        assert_eq!((created.get(), dropped.get()), (1, 0));

        sync(&mut slot, false);
        assert!(slot.is_none());
        assert_eq!((created.get(), dropped.get()), (1, 1));

        sync(&mut slot, false);
        assert_eq!((created.get(), dropped.get()), (1, 1));

        sync(&mut slot, true);
        assert_eq!((created.get(), dropped.get()), (2, 1));

        // Component cleanup
        slot.take();
        assert_eq!((created.get(), dropped.get()), (2, 2));
    }

    #[test]
    fn test_empty_text() {
        assert!(character_colors("", 0, true, &palette(), "n").is_empty());
    }
}
