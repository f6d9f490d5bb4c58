//! One-shot ambient music trigger
//!
//! The presentation layer starts background music exactly once per
//! process, decoupled from game state. The cue is explicit process-wide
//! state rather than a hidden module-global flag; nothing in the chess
//! core depends on it, and tests can use their own `MusicCue` instances.

use std::sync::atomic::{AtomicBool, Ordering};

/// Idempotent one-shot trigger.
pub struct MusicCue {
    started: AtomicBool,
}

impl MusicCue {
    pub const fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// Run `start` if the cue has not fired yet; later calls are no-ops.
    /// Returns whether `start` ran.
    pub fn start_once<F: FnOnce()>(&self, start: F) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            return false;
        }
        start();
        true
    }

    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

impl Default for MusicCue {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide cue for the ambient soundtrack.
pub static AMBIENT_MUSIC: MusicCue = MusicCue::new();

#[cfg(test)]
#[path = "audio_tests.rs"]
mod audio_tests;
