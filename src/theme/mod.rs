//! Light/dark theming as an explicitly passed handle.
//!
//! The host application owns persistence of the chosen mode; the chart view
//! only reads resolved tokens, so tests can hand it a fixed context without
//! touching process-global state.

use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Defer to the host environment's preference.
    System,
}

/// A concrete appearance after `System` resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// Neutral chrome color tokens for one resolved theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens {
    pub background: Color,
    pub foreground: Color,
    pub muted_foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
}

#[must_use]
pub fn tokens_for(resolved: ResolvedTheme) -> ThemeTokens {
    match resolved {
        ResolvedTheme::Light => ThemeTokens {
            background: Color::rgb(1.0, 1.0, 1.0),
            foreground: Color::rgb(0.05, 0.09, 0.15),
            muted_foreground: Color::rgb(0.42, 0.45, 0.50),
            muted: Color::rgb(0.95, 0.96, 0.97),
            border: Color::rgba(0.0, 0.0, 0.0, 0.08),
            primary: Color::from_hsl(25.0, 0.70, 0.45),
        },
        ResolvedTheme::Dark => ThemeTokens {
            background: Color::rgb(0.04, 0.05, 0.08),
            foreground: Color::rgb(0.90, 0.93, 0.97),
            muted_foreground: Color::rgb(0.58, 0.62, 0.68),
            muted: Color::rgb(0.10, 0.12, 0.16),
            border: Color::rgba(1.0, 1.0, 1.0, 0.10),
            primary: Color::from_hsl(25.0, 0.75, 0.58),
        },
    }
}

/// Handle to the process-wide theme choice.
///
/// Initialized once at application start and toggled only through the mode
/// control; the chart view holds it by value and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContext {
    mode: ThemeMode,
    system_default: ResolvedTheme,
}

impl ThemeContext {
    #[must_use]
    pub const fn new(mode: ThemeMode, system_default: ResolvedTheme) -> Self {
        Self {
            mode,
            system_default,
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self::new(ThemeMode::Light, ResolvedTheme::Light)
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::new(ThemeMode::Dark, ResolvedTheme::Dark)
    }

    /// System mode following the host preference.
    #[must_use]
    pub const fn system(host_preference: ResolvedTheme) -> Self {
        Self::new(ThemeMode::System, host_preference)
    }

    #[must_use]
    pub fn mode(self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn resolved(self) -> ResolvedTheme {
        match self.mode {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => self.system_default,
        }
    }

    /// Flips to the opposite of the currently resolved appearance.
    ///
    /// Toggling from `System` pins an explicit mode.
    pub fn toggle(&mut self) {
        self.mode = match self.resolved() {
            ResolvedTheme::Light => ThemeMode::Dark,
            ResolvedTheme::Dark => ThemeMode::Light,
        };
    }

    #[must_use]
    pub fn tokens(self) -> ThemeTokens {
        tokens_for(self.resolved())
    }
}
