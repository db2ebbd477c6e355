#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;

use super::hotkeys::ActiveFlag;
use super::interpreter::CommandInterpreter;
use crate::domain::models::Scrollback;
use crate::domain::models::SideEffect;

/// Banner above the transcript until the first `clear`.
pub const WELCOME: &str = r#"Welcome to the terminal. Type "help" for available commands."#;

/// Console window state: input line, transcript and the minimized toggle.
pub struct TerminalSession {
    pub input: String,
    pub minimized: bool,
    pub scrollback: Scrollback,
    pub show_welcome: bool,
    active: ActiveFlag,
    interpreter: CommandInterpreter,
}

impl TerminalSession {
    pub fn new(interpreter: CommandInterpreter, active: ActiveFlag) -> TerminalSession {
        return TerminalSession {
            input: String::new(),
            minimized: false,
            scrollback: Scrollback::default(),
            show_welcome: true,
            active,
            interpreter,
        };
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn deactivate(&mut self) {
        self.active.set(false);
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.input.push_str(&text.replace(['\r', '\n'], " "));
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Runs the input line. The input is always reset afterwards.
    pub fn submit(&mut self) -> SideEffect {
        let input = std::mem::take(&mut self.input);
        let effect = self.interpreter.submit(&input, &mut self.scrollback);

        match effect {
            SideEffect::Clear => self.show_welcome = false,
            SideEffect::Exit => self.deactivate(),
            _ => {}
        }

        return effect;
    }
}
