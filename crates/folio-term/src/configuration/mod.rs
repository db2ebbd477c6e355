//! Configuration management for the terminal portfolio.
//!
//! This module provides centralized configuration handling for the initial theme,
//! the GitHub profile and the contact form's email relay.

mod config;

pub use config::*;
