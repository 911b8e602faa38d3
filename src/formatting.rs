//! Colored diagnostics on stderr.
//!
//! Reports always go to stdout uncolored; only warnings and errors are
//! styled. Color follows the usual conventions: `--plain` or `NO_COLOR`
//! disable it, `CLICOLOR=0` disables it, `CLICOLOR_FORCE=1` forces it, and
//! otherwise it is used when stderr is a terminal.

use colored::*;
use std::cell::RefCell;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Resolve the color mode from environment-style lookups.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // NO_COLOR (no-color.org)
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// No colors at all.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Receiver of user-facing warnings and errors.
pub trait Diagnostics {
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes diagnostics to stderr, colored when enabled.
pub struct StderrDiagnostics {
    use_color: bool,
}

impl StderrDiagnostics {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        colored::control::set_override(use_color);
        Self { use_color }
    }
}

impl Diagnostics for StderrDiagnostics {
    fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{}", message.red().bold());
        } else {
            eprintln!("{}", message);
        }
    }
}

/// Keeps diagnostics in memory so tests can inspect them.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stderr().is_terminal()
}
