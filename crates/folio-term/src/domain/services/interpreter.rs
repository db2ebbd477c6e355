#[cfg(test)]
#[path = "interpreter_test.rs"]
mod tests;

use crate::domain::models::profile;
use crate::domain::models::Command;
use crate::domain::models::ResolvedCommand;
use crate::domain::models::Scrollback;
use crate::domain::models::SideEffect;
use crate::domain::models::TranscriptLine;

pub fn help_text() -> String {
    let text = r#"
Available commands:
- help: Show this help message
- about: Navigate to about page
- projects: Navigate to projects page
- contact: Navigate to contact page
- home: Navigate to home page
- clear: Clear the terminal
- exit: Close the terminal
- github: Open GitHub profile
- skills: List skills
- whoami: Display info about me
"#;

    text.trim().to_string()
}

pub fn skills_text() -> String {
    let text = r#"
Skills:
- Frontend: React, TypeScript, Next.js
- Backend: Node.js, Express
- Database: MongoDB, PostgreSQL
- Other: Git, Docker, AWS
"#;

    text.trim().to_string()
}

pub fn not_found_text(command: &str) -> String {
    format!("Command not found: {command}. Type \"help\" for available commands.")
}

/// Maps console input to transcript lines and a side effect.
pub struct CommandInterpreter {
    profile_url: String,
}

impl CommandInterpreter {
    pub fn new(github_user: &str) -> CommandInterpreter {
        return CommandInterpreter {
            profile_url: profile::profile_url(github_user),
        };
    }

    /// `clear` and `exit` return before anything is appended. Every other input
    /// appends the echoed line followed by the response, even when it is empty.
    pub fn submit(&self, input: &str, scrollback: &mut Scrollback) -> SideEffect {
        let resolved = Command::resolve(input);
        tracing::debug!(command = ?resolved, "console submission");

        let (response, effect) = match resolved {
            ResolvedCommand::Known(Command::Clear) => {
                scrollback.clear();
                return SideEffect::Clear;
            }
            ResolvedCommand::Known(Command::Exit) => {
                return SideEffect::Exit;
            }
            ResolvedCommand::Known(Command::Help) => (help_text(), SideEffect::None),
            ResolvedCommand::Known(Command::Github) => (
                "Opening GitHub profile...".to_string(),
                SideEffect::OpenExternal(self.profile_url.clone()),
            ),
            ResolvedCommand::Known(Command::Skills) => (skills_text(), SideEffect::None),
            ResolvedCommand::Known(Command::Whoami) => {
                (profile::WHOAMI.to_string(), SideEffect::None)
            }
            ResolvedCommand::Known(Command::Empty) => (String::new(), SideEffect::None),
            ResolvedCommand::Known(command) => match command.route() {
                Some(route) => (
                    format!("Navigating to {} page...", route.title()),
                    SideEffect::NavigateTo(route),
                ),
                None => (String::new(), SideEffect::None),
            },
            ResolvedCommand::Unknown(command) => (not_found_text(&command), SideEffect::None),
        };

        scrollback.push(TranscriptLine::prompt(input));
        scrollback.push(TranscriptLine::output(&response));

        return effect;
    }
}
