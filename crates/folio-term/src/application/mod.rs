//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing, the main UI loop and the widgets
//! that draw each page.

pub mod cli;
pub mod ui;
mod views;
