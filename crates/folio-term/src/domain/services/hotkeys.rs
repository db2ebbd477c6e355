#[cfg(test)]
#[path = "hotkeys_test.rs"]
mod tests;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tui_textarea::{Input, Key};

/// A modifier combination plus a character, e.g. Ctrl+Alt+P.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ch: char,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyChord {
    pub const TOGGLE_TERMINAL: KeyChord = KeyChord {
        ch: 'p',
        ctrl: true,
        alt: true,
    };

    pub fn matches(&self, input: &Input) -> bool {
        match input.key {
            Key::Char(c) => {
                c.to_ascii_lowercase() == self.ch && input.ctrl == self.ctrl && input.alt == self.alt
            }
            _ => false,
        }
    }
}

type Callback = Arc<dyn Fn() + Send + Sync>;
type Bindings = DashMap<u64, (KeyChord, Callback)>;

/// Process-wide keyboard shortcut registry.
#[derive(Clone, Default)]
pub struct Hotkeys {
    bindings: Arc<Bindings>,
    next_id: Arc<AtomicU64>,
}

impl Hotkeys {
    /// The binding lives until the returned guard is dropped.
    pub fn register<F>(&self, chord: KeyChord, callback: F) -> HotkeyGuard
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.bindings.insert(id, (chord, Arc::new(callback)));
        tracing::debug!(id, ?chord, "registered hotkey");

        return HotkeyGuard {
            id,
            bindings: Arc::downgrade(&self.bindings),
        };
    }

    /// Runs every callback bound to the input. Returns true when any matched.
    pub fn dispatch(&self, input: &Input) -> bool {
        let callbacks = self
            .bindings
            .iter()
            .filter(|entry| entry.value().0.matches(input))
            .map(|entry| entry.value().1.clone())
            .collect::<Vec<Callback>>();

        for callback in callbacks.iter() {
            callback();
        }

        !callbacks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

pub struct HotkeyGuard {
    id: u64,
    bindings: Weak<Bindings>,
}

impl Drop for HotkeyGuard {
    fn drop(&mut self) {
        if let Some(bindings) = self.bindings.upgrade() {
            bindings.remove(&self.id);
            tracing::debug!(id = self.id, "deregistered hotkey");
        }
    }
}

/// Shared on/off cell. The hotkey writes it, the console reads it.
#[derive(Debug, Clone, Default)]
pub struct ActiveFlag {
    inner: Arc<AtomicBool>,
}

impl ActiveFlag {
    pub fn get(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    pub fn set(&self, active: bool) {
        self.inner.store(active, Ordering::SeqCst);
    }

    pub fn toggle(&self) -> bool {
        !self.inner.fetch_xor(true, Ordering::SeqCst)
    }
}
