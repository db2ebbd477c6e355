#[cfg(test)]
#[path = "preloader_test.rs"]
mod tests;

use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::time::Duration;

use once_cell::sync::Lazy;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::time;

use super::timers;
use super::timers::TaskHandle;
use crate::domain::models::profile;
use crate::domain::models::Event;

pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(30);
pub const FINISH_DELAY: Duration = Duration::from_millis(500);
pub const TYPEWRITER_INTERVAL: Duration = Duration::from_millis(100);
pub const MATRIX_INTERVAL: Duration = Duration::from_millis(50);
pub const MATRIX_CAPACITY: usize = 50;
pub const ROLE_INTERVAL: Duration = Duration::from_secs(3);

const MATRIX_ALPHABET: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズブヅプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッン0123456789";

static MATRIX_GLYPHS: Lazy<Vec<char>> = Lazy::new(|| MATRIX_ALPHABET.chars().collect());

/// Synthetic loading percentage, saturating at 100.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    value: u8,
}

impl Progress {
    pub const MAX: u8 = 100;

    pub fn advance(&mut self) -> u8 {
        if self.value < Progress::MAX {
            self.value += 1;
        }
        self.value
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= Progress::MAX
    }
}

/// Reveals a string one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Typewriter {
        return Typewriter {
            text: text.chars().collect(),
            revealed: 0,
        };
    }

    pub fn advance(&mut self) -> String {
        if self.revealed < self.text.len() {
            self.revealed += 1;
        }
        self.visible()
    }

    pub fn visible(&self) -> String {
        self.text[..self.revealed].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.text.len()
    }
}

/// Keeps the most recent glyphs of the falling-character effect.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatrixRain {
    glyphs: VecDeque<char>,
}

impl MatrixRain {
    pub fn random_glyph() -> char {
        let mut rng = rand::rng();
        MATRIX_GLYPHS[rng.random_range(0..MATRIX_GLYPHS.len())]
    }

    pub fn push(&mut self, glyph: char) {
        self.glyphs.push_back(glyph);
        while self.glyphs.len() > MATRIX_CAPACITY {
            self.glyphs.pop_front();
        }
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &char> {
        self.glyphs.iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoleRotator {
    index: usize,
}

impl RoleRotator {
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % profile::ROLES.len();
    }

    pub fn current(&self) -> &'static str {
        profile::ROLES[self.index]
    }
}

/// Timers driving the startup screen. Dropping this cancels all of them.
pub struct PreloaderTimers {
    pub progress: TaskHandle,
    pub typewriter: TaskHandle,
    pub matrix: TaskHandle,
}

pub struct Preloader {}

impl Preloader {
    pub fn start(event_tx: &mpsc::UnboundedSender<Event>) -> PreloaderTimers {
        return PreloaderTimers {
            progress: Preloader::start_progress(event_tx.clone()),
            typewriter: Preloader::start_typewriter(event_tx.clone(), profile::GREETING),
            matrix: Preloader::start_matrix(event_tx.clone()),
        };
    }

    /// Posts each new percentage, then `PreloaderFinished` exactly once.
    pub fn start_progress(tx: mpsc::UnboundedSender<Event>) -> TaskHandle {
        timers::spawn(move |token| async move {
            let mut progress = Progress::default();
            let mut ticker = timers::interval(PROGRESS_INTERVAL);

            while !progress.is_complete() {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return,
                    _ = ticker.tick() => {
                        if tx.send(Event::PreloaderProgress(progress.advance())).is_err() {
                            return;
                        }
                    }
                }
            }

            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = time::sleep(FINISH_DELAY) => {
                    tracing::debug!("preloader finished");
                    let _ = tx.send(Event::PreloaderFinished);
                }
            }
        })
    }

    pub fn start_typewriter(tx: mpsc::UnboundedSender<Event>, text: &str) -> TaskHandle {
        let mut typewriter = Typewriter::new(text);
        timers::spawn_interval(TYPEWRITER_INTERVAL, move || {
            if tx.send(Event::TypewriterFrame(typewriter.advance())).is_err()
                || typewriter.is_complete()
            {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        })
    }

    pub fn start_matrix(tx: mpsc::UnboundedSender<Event>) -> TaskHandle {
        timers::spawn_interval(MATRIX_INTERVAL, move || {
            if tx.send(Event::MatrixGlyph(MatrixRain::random_glyph())).is_err() {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        })
    }

    pub fn start_roles(tx: mpsc::UnboundedSender<Event>) -> TaskHandle {
        timers::spawn_interval(ROLE_INTERVAL, move || {
            if tx.send(Event::RoleTick).is_err() {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        })
    }
}
