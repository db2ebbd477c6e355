//! Core domain logic for the terminal portfolio.
//!
//! This module contains the command interpreter, the theme and preloader state
//! machines and the data models they operate on, independent of rendering and
//! network details.

pub mod models;
pub mod services;
