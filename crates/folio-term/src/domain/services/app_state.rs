use anyhow::Result;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::hotkeys::ActiveFlag;
use super::hotkeys::HotkeyGuard;
use super::hotkeys::Hotkeys;
use super::hotkeys::KeyChord;
use super::preloader::MatrixRain;
use super::preloader::Preloader;
use super::preloader::PreloaderTimers;
use super::preloader::RoleRotator;
use super::timers::TaskHandle;
use super::ClockRef;
use super::CommandInterpreter;
use super::ContactDesk;
use super::TerminalSession;
use super::ThemeController;
use crate::domain::models::profile;
use crate::domain::models::profile::ProjectFilter;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GithubStats;
use crate::domain::models::Route;
use crate::domain::models::SideEffect;
use crate::domain::models::ThemePreference;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub clock: ClockRef,
    pub github_user: String,
    pub show_preloader: bool,
    pub theme: ThemePreference,
}

pub struct AppState {
    pub contact: ContactDesk,
    pub github_stats: Option<GithubStats>,
    pub github_user: String,
    pub hotkeys: Hotkeys,
    pub loading: bool,
    pub matrix: MatrixRain,
    pub progress: u8,
    pub project_filter: ProjectFilter,
    pub role: RoleRotator,
    pub route: Route,
    pub should_quit: bool,
    pub terminal: TerminalSession,
    pub theme: ThemeController,
    pub typed: String,
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    // Stats are fetched once per session, on the first About visit.
    github_requested: bool,
    preloader: Option<PreloaderTimers>,
    _role_timer: TaskHandle,
    _terminal_hotkey: HotkeyGuard,
}

impl AppState {
    pub fn new(
        props: AppStateProps,
        event_tx: mpsc::UnboundedSender<Event>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> AppState {
        let hotkeys = Hotkeys::default();
        let active = ActiveFlag::default();
        let toggle = active.clone();
        let terminal_hotkey = hotkeys.register(KeyChord::TOGGLE_TERMINAL, move || {
            let now_active = toggle.toggle();
            tracing::debug!(active = now_active, "terminal toggled");
        });

        let mut preloader = None;
        if props.show_preloader {
            preloader = Some(Preloader::start(&event_tx));
        }

        let theme = ThemeController::new(props.clock, props.theme).with_poller(event_tx.clone());

        return AppState {
            contact: ContactDesk::default(),
            github_stats: None,
            github_user: props.github_user.to_string(),
            hotkeys,
            loading: props.show_preloader,
            matrix: MatrixRain::default(),
            progress: 0,
            project_filter: ProjectFilter::default(),
            role: RoleRotator::default(),
            route: Route::Home,
            should_quit: false,
            terminal: TerminalSession::new(CommandInterpreter::new(&props.github_user), active),
            theme,
            typed: String::new(),
            _role_timer: Preloader::start_roles(event_tx.clone()),
            action_tx,
            event_tx,
            github_requested: false,
            preloader,
            _terminal_hotkey: terminal_hotkey,
        };
    }

    /// Applies one event. Returns an error only when the action channel is gone.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::KeyboardCTRLC => {
                self.should_quit = true;
            }
            Event::KeyboardCharInput(input) => {
                self.handle_input(input)?;
            }
            Event::KeyboardEnter => {
                self.handle_enter()?;
            }
            Event::KeyboardPaste(text) => {
                if self.loading {
                    return Ok(());
                }
                if self.terminal_has_focus() {
                    self.terminal.push_str(&text);
                } else if self.route == Route::Contact {
                    self.contact.push_str(&text);
                }
            }
            Event::PreloaderProgress(value) => {
                self.progress = self.progress.max(value);
            }
            Event::PreloaderFinished => {
                self.loading = false;
                self.preloader = None;
            }
            Event::TypewriterFrame(text) => {
                self.typed = text;
            }
            Event::MatrixGlyph(glyph) => {
                self.matrix.push(glyph);
            }
            Event::RoleTick => {
                self.role.advance();
            }
            Event::ThemeTick => {
                self.theme.reevaluate();
            }
            Event::GithubStatsLoaded(stats) => {
                self.github_stats = Some(stats);
            }
            Event::ContactDelivered => {
                self.contact.delivered(&self.event_tx);
            }
            Event::ContactFailed(reason) => {
                self.contact.failed(reason);
            }
            Event::ContactReset => {
                self.contact.reset_status();
            }
            Event::UITick => {}
        }

        return Ok(());
    }

    pub fn navigate(&mut self, route: Route) -> Result<()> {
        tracing::debug!(from = %self.route, to = %route, "navigating");
        self.route = route;

        if route == Route::About && !self.github_requested {
            self.github_requested = true;
            self.action_tx
                .send(Action::FetchGithubStats(self.github_user.to_string()))?;
        }

        return Ok(());
    }

    pub fn terminal_has_focus(&self) -> bool {
        self.terminal.is_active() && !self.terminal.minimized
    }

    fn handle_input(&mut self, input: Input) -> Result<()> {
        if self.hotkeys.dispatch(&input) {
            return Ok(());
        }

        if self.loading {
            return Ok(());
        }

        if self.terminal.is_active() && input.key == Key::Esc {
            self.terminal.toggle_minimized();
            return Ok(());
        }

        if self.terminal_has_focus() {
            match input {
                Input {
                    key: Key::Backspace,
                    ..
                } => self.terminal.backspace(),
                Input {
                    key: Key::Char(c),
                    ctrl: false,
                    alt: false,
                    ..
                } => self.terminal.push_char(c),
                _ => {}
            }
            return Ok(());
        }

        self.handle_page_input(input)
    }

    fn handle_page_input(&mut self, input: Input) -> Result<()> {
        match input {
            Input { key: Key::Left, .. } => {
                return self.navigate(self.route.previous());
            }
            Input {
                key: Key::Right, ..
            } => {
                return self.navigate(self.route.next());
            }
            Input {
                key: Key::F(2), ..
            } => {
                self.theme.toggle_auto_mode();
                return Ok(());
            }
            Input {
                key: Key::F(3), ..
            } => {
                self.theme.set_theme(self.theme.theme().next());
                return Ok(());
            }
            _ => {}
        }

        if self.route == Route::Contact {
            match input {
                Input {
                    key: Key::Tab,
                    shift: false,
                    ..
                } => self.contact.focus_next(),
                Input {
                    key: Key::Tab,
                    shift: true,
                    ..
                } => self.contact.focus_previous(),
                Input {
                    key: Key::Backspace,
                    ..
                } => self.contact.backspace(),
                Input {
                    key: Key::F(4), ..
                } => self.contact.map.zoom_to_location(),
                Input {
                    key: Key::Char(c),
                    ctrl: false,
                    alt: false,
                    ..
                } => self.contact.push_char(c),
                _ => {}
            }
            return Ok(());
        }

        match input.key {
            Key::Char('q') => {
                self.should_quit = true;
            }
            Key::Char('a') => {
                self.theme.toggle_auto_mode();
            }
            Key::Char('t') => {
                self.theme.set_theme(self.theme.theme().next());
            }
            Key::Char('g') => {
                self.action_tx
                    .send(Action::OpenExternal(profile::profile_url(&self.github_user)))?;
            }
            Key::Char('f') if self.route == Route::Projects => {
                self.project_filter = self.project_filter.next();
            }
            _ => {}
        }

        return Ok(());
    }

    fn handle_enter(&mut self) -> Result<()> {
        if self.loading {
            return Ok(());
        }

        if self.terminal_has_focus() {
            let effect = self.terminal.submit();
            return self.apply_side_effect(effect);
        }

        if self.route == Route::Contact {
            if let Some(form) = self.contact.submit() {
                self.action_tx.send(Action::SendContact(form))?;
            }
        }

        return Ok(());
    }

    fn apply_side_effect(&mut self, effect: SideEffect) -> Result<()> {
        match effect {
            SideEffect::NavigateTo(route) => self.navigate(route)?,
            SideEffect::OpenExternal(url) => self.action_tx.send(Action::OpenExternal(url))?,
            SideEffect::Clear | SideEffect::Exit | SideEffect::None => {}
        }

        return Ok(());
    }
}
