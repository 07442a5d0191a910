//! Wall-clock-aware pomodoro countdown.
//!
//! The timer persists `(remainingSeconds, running, lastTickMs)` on every state change. When it is
//! rehydrated while running, the whole seconds that elapsed in real time are deducted, so a
//! reload or a suspended tab does not pause the countdown.

use serde::{Deserialize, Serialize};

use crate::persistence::{PersistentStore, POMODORO_STATE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroState {
    pub remaining_seconds: u32,
    pub running: bool,
    pub last_tick_ms: u64,
}

/// Lenient view of a stored record; older or hand-edited values may be partial or fractional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPomodoro {
    remaining_seconds: Option<f64>,
    running: Option<bool>,
    last_tick_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroPhase {
    /// Not running, full duration left.
    Idle,
    /// Not running, partially elapsed.
    Paused,
    Running,
    /// Reached zero. Stays here until reset.
    Expired,
}

#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    store: PersistentStore,
    total_seconds: u32,
    remaining_seconds: u32,
    running: bool,
}

impl PomodoroTimer {
    /// Restores the timer at `now_ms`, crediting real time that passed while it was running.
    pub fn hydrate(store: PersistentStore, total_seconds: u32, now_ms: u64) -> Self {
        let (remaining_seconds, running) = match store.get::<StoredPomodoro>(POMODORO_STATE_KEY) {
            Some(stored) => resume_from(&stored, total_seconds, now_ms),
            None => (total_seconds, false),
        };
        let timer = Self {
            store,
            total_seconds,
            remaining_seconds,
            running,
        };
        timer.persist(now_ms);
        timer
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> PomodoroPhase {
        if self.remaining_seconds == 0 {
            PomodoroPhase::Expired
        } else if self.running {
            PomodoroPhase::Running
        } else if self.remaining_seconds == self.total_seconds {
            PomodoroPhase::Idle
        } else {
            PomodoroPhase::Paused
        }
    }

    pub fn state(&self, now_ms: u64) -> PomodoroState {
        PomodoroState {
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            last_tick_ms: now_ms,
        }
    }

    /// `MM:SS`, minutes not capped at 59.
    pub fn clock_label(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }

    /// Starts counting down. No-op once expired.
    pub fn start(&mut self, now_ms: u64) {
        if self.remaining_seconds == 0 || self.running {
            return;
        }
        self.running = true;
        self.persist(now_ms);
    }

    pub fn pause(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        self.running = false;
        self.persist(now_ms);
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.remaining_seconds = self.total_seconds;
        self.running = false;
        self.persist(now_ms);
    }

    /// One-second tick. Returns whether the timer is still running afterwards.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
        }
        self.persist(now_ms);
        self.running
    }

    fn persist(&self, now_ms: u64) {
        self.store.set(POMODORO_STATE_KEY, &self.state(now_ms));
    }
}

fn resume_from(stored: &StoredPomodoro, total_seconds: u32, now_ms: u64) -> (u32, bool) {
    let mut remaining = stored
        .remaining_seconds
        .filter(|value| value.is_finite())
        .map(|value| value.floor().clamp(0.0, f64::from(total_seconds)) as u32)
        .unwrap_or(total_seconds);
    let running = stored.running.unwrap_or(false);

    if running {
        if let Some(last_tick_ms) = stored.last_tick_ms.filter(|value| value.is_finite()) {
            let elapsed_ms = (now_ms as f64 - last_tick_ms).max(0.0);
            let elapsed_seconds = (elapsed_ms / 1000.0).floor();
            remaining = (f64::from(remaining) - elapsed_seconds).max(0.0) as u32;
        }
    }

    (remaining, running && remaining > 0)
}
