mod action;
mod clients;
mod command;
mod contact;
mod event;
mod github;
mod map;
pub mod profile;
mod route;
mod theme;
mod transcript;

pub use action::*;
pub use clients::*;
pub use command::*;
pub use contact::*;
pub use event::*;
pub use github::*;
pub use map::*;
pub use route::*;
pub use theme::*;
pub use transcript::*;
