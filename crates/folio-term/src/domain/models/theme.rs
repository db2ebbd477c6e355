#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};
use thiserror::Error;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumVariantNames,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Cyberpunk,
    Glassmorphism,
    Minimal,
}

impl Theme {
    /// Theme selected by auto mode for a local hour of day (0-23).
    pub fn for_hour(hour: u32) -> Theme {
        match hour {
            5..=11 => Theme::Minimal,
            12..=16 => Theme::Glassmorphism,
            17..=19 => Theme::Cyberpunk,
            _ => Theme::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Cyberpunk => "Cyberpunk",
            Theme::Glassmorphism => "Glass",
            Theme::Minimal => "Minimal",
        }
    }

    /// Scope marker name, one per theme.
    pub fn marker(&self) -> String {
        format!("theme-{self}")
    }

    pub fn next(&self) -> Theme {
        let themes = Theme::iter().collect::<Vec<Theme>>();
        let idx = themes.iter().position(|e| e == self).unwrap_or(0);
        return themes[(idx + 1) % themes.len()];
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme '{0}', expected auto, dark, cyberpunk, glassmorphism or minimal")]
pub struct ThemeParseError(pub String);

/// Startup theme selection read from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Auto,
    Manual(Theme),
}

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() || normalized == "auto" {
            return Ok(ThemePreference::Auto);
        }

        Theme::from_str(&normalized)
            .map(ThemePreference::Manual)
            .map_err(|_| ThemeParseError(s.to_string()))
    }
}

/// Top level backdrop. Uses its own night window, independent of `Theme::for_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Night,
    Day,
}

impl Backdrop {
    pub fn for_hour(hour: u32) -> Backdrop {
        if hour >= 18 || hour < 6 {
            return Backdrop::Night;
        }

        return Backdrop::Day;
    }
}
