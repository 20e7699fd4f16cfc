use colored::*;
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
            Self::Auto => std::io::stdout().is_terminal(),
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
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Install this configuration as the process-wide `colored` override.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

/// Status tags for per-file progress lines.
pub fn tag_ok() -> ColoredString {
    "[ok]".green().bold()
}

pub fn tag_skip() -> ColoredString {
    "[skip]".yellow().bold()
}

pub fn tag_fail() -> ColoredString {
    "[fail]".red().bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes() {
        assert!(ColorMode::Always.should_use_color());
        assert!(!ColorMode::Never.should_use_color());
        assert_eq!(FormattingConfig::plain().color, ColorMode::Never);
    }

    #[test]
    fn plain_tags_have_no_escape_codes() {
        colored::control::set_override(false);
        assert_eq!(tag_skip().to_string(), "[skip]");
        assert_eq!(tag_ok().to_string(), "[ok]");
    }
}
