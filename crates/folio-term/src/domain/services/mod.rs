mod actions;
mod app_state;
mod contact;
mod events;
pub mod hotkeys;
mod interpreter;
pub mod preloader;
mod terminal;
mod theme_controller;
pub mod timers;

pub use actions::*;
pub use app_state::*;
pub use contact::*;
pub use events::*;
pub use interpreter::*;
pub use terminal::*;
pub use theme_controller::*;
