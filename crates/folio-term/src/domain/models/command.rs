#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use super::Route;

/// Closed set of console commands. The whole input line is one command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Help,
    About,
    Projects,
    Contact,
    Home,
    Clear,
    Exit,
    Github,
    Skills,
    Whoami,
    #[strum(serialize = "")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    Known(Command),
    /// Holds the trimmed, lower-cased input.
    Unknown(String),
}

impl Command {
    /// Resolves free text into a command. Every string resolves to something.
    pub fn resolve(input: &str) -> ResolvedCommand {
        let normalized = input.trim().to_lowercase();
        match Command::from_str(&normalized) {
            Ok(command) => ResolvedCommand::Known(command),
            Err(_) => ResolvedCommand::Unknown(normalized),
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Command::About => Some(Route::About),
            Command::Projects => Some(Route::Projects),
            Command::Contact => Some(Route::Contact),
            Command::Home => Some(Route::Home),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    None,
    NavigateTo(Route),
    Clear,
    Exit,
    OpenExternal(String),
}
