#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod tests;

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use chrono::Timelike;
use tokio::sync::mpsc;

use super::timers;
use super::timers::TaskHandle;
use crate::domain::models::Event;
use crate::domain::models::Theme;
use crate::domain::models::ThemePreference;

pub const THEME_POLL_INTERVAL: Duration = Duration::from_secs(60);

pub trait Clock: Send + Sync {
    /// Local hour of day, 0-23.
    fn hour(&self) -> u32;
}

pub type ClockRef = Arc<dyn Clock>;

#[derive(Default)]
pub struct LocalClock {}

impl Clock for LocalClock {
    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Holds at most one theme marker at a time.
#[derive(Debug, Default)]
pub struct ThemeScope {
    marker: Option<String>,
}

impl ThemeScope {
    pub fn apply(&mut self, theme: Theme) {
        let marker = theme.marker();
        if let Some(previous) = self.marker.take() {
            tracing::debug!(%previous, next = %marker, "replacing theme marker");
        }
        self.marker = Some(marker);
    }

    pub fn active(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}

pub struct ThemeController {
    auto_mode: bool,
    clock: ClockRef,
    poller: Option<TaskHandle>,
    scope: ThemeScope,
    theme: Theme,
    ticks: Option<mpsc::UnboundedSender<Event>>,
}

impl ThemeController {
    pub fn new(clock: ClockRef, preference: ThemePreference) -> ThemeController {
        let mut controller = ThemeController {
            auto_mode: preference == ThemePreference::Auto,
            clock,
            poller: None,
            scope: ThemeScope::default(),
            theme: Theme::default(),
            ticks: None,
        };

        match preference {
            ThemePreference::Auto => controller.reevaluate(),
            ThemePreference::Manual(theme) => controller.apply(theme),
        }

        return controller;
    }

    /// Posts `Event::ThemeTick` once a minute while auto mode is on.
    pub fn with_poller(mut self, ticks: mpsc::UnboundedSender<Event>) -> ThemeController {
        self.ticks = Some(ticks);
        self.sync_poller();
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    pub fn scope(&self) -> &ThemeScope {
        &self.scope
    }

    pub fn clock(&self) -> ClockRef {
        self.clock.clone()
    }

    /// Ignored while auto mode is on.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.auto_mode {
            tracing::debug!(requested = %theme, "ignoring manual theme while auto mode is on");
            return;
        }

        self.apply(theme);
    }

    pub fn toggle_auto_mode(&mut self) {
        self.auto_mode = !self.auto_mode;
        tracing::info!(auto_mode = self.auto_mode, theme = %self.theme, "theme mode changed");

        self.reevaluate();
        self.sync_poller();
    }

    /// Recomputes the theme from the clock. No-op outside auto mode.
    pub fn reevaluate(&mut self) {
        if !self.auto_mode {
            return;
        }

        let theme = Theme::for_hour(self.clock.hour());
        self.apply(theme);
    }

    /// Label shown next to the theme selector.
    pub fn status_label(&self) -> String {
        if self.auto_mode {
            return "Auto Mode".to_string();
        }

        format!("{} Theme", self.theme.label())
    }

    fn apply(&mut self, theme: Theme) {
        if self.theme == theme && self.scope.active().is_some() {
            return;
        }

        self.theme = theme;
        self.scope.apply(theme);
    }

    fn sync_poller(&mut self) {
        if !self.auto_mode {
            self.poller = None;
            return;
        }

        if self.poller.is_some() {
            return;
        }

        if let Some(tx) = self.ticks.clone() {
            self.poller = Some(timers::spawn_interval(THEME_POLL_INTERVAL, move || {
                if tx.send(Event::ThemeTick).is_err() {
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            }));
        }
    }
}
