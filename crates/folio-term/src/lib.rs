//! Terminal portfolio for a single developer.
//!
//! This crate renders a biography, skills, projects and a contact form inside a
//! terminal, with a startup preloader, time-driven colour themes and a hidden
//! command console toggled by a global hotkey.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Command, Event, Route, SideEffect, Theme};
pub use domain::services::{AppStateProps, CommandInterpreter, ThemeController};
pub use infrastructure::clients::ClientManager;
