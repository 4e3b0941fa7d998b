//! Instructor unlock flags shared across every concurrent session.
//!
//! One process-wide board, passed by reference (usually in an `Arc`) to each
//! session handler. All access goes through the internal lock, so readers
//! always observe a complete snapshot, never a partially updated map. An
//! unlock is a broadcast: it affects every student session immediately.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use sim_events::{FIRST_EVENT_WEEK, LAST_EVENT_WEEK};

/// Per-week unlock gate controlled by the instructor.
#[derive(Debug)]
pub struct UnlockBoard {
    weeks: Mutex<BTreeMap<u8, bool>>,
}

impl Default for UnlockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl UnlockBoard {
    /// A board with every event week locked.
    pub fn new() -> Self {
        UnlockBoard {
            weeks: Mutex::new(
                (FIRST_EVENT_WEEK..=LAST_EVENT_WEEK)
                    .map(|w| (w, false))
                    .collect(),
            ),
        }
    }

    /// A consistent copy of the full unlock map.
    pub fn snapshot(&self) -> BTreeMap<u8, bool> {
        self.lock().clone()
    }

    /// Replace the unlock flags wholesale. Weeks outside the event range are
    /// ignored; weeks absent from `flags` become locked.
    pub fn set_unlocked(&self, flags: BTreeMap<u8, bool>) {
        let mut weeks = self.lock();
        for (week, unlocked) in weeks.iter_mut() {
            *unlocked = flags.get(week).copied().unwrap_or(false);
        }
    }

    /// Flip one week's gate. Weeks outside the event range are ignored.
    pub fn set_week(&self, week: u8, unlocked: bool) {
        if let Some(flag) = self.lock().get_mut(&week) {
            *flag = unlocked;
        }
    }

    /// Unlock every event week at once.
    pub fn unlock_all(&self) {
        for flag in self.lock().values_mut() {
            *flag = true;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<u8, bool>> {
        // The board holds no invariants a panicking writer could break.
        self.weeks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
