use crate::cli::logs::types::LogLevel;
use ahash::RandomState;
use clap::ValueEnum;
use owo_colors::{AnsiColors, OwoColorize, Style};
use serde::Deserialize;
use std::fmt;
use std::hash::BuildHasher;

/// Colors a pod name can be assigned.
const POD_PALETTE: &[AnsiColors] = &[
    AnsiColors::Blue,
    AnsiColors::Cyan,
    AnsiColors::Green,
    AnsiColors::Magenta,
    AnsiColors::Yellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightCyan,
    AnsiColors::BrightGreen,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightYellow,
];

// Fixed seeds: a pod keeps its color for the whole run (and across runs).
const POD_HASH_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when writing to a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn colorizer(self, is_terminal: bool) -> Colorizer {
        let enabled = match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                is_terminal && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
            }
        };
        Colorizer::new(enabled)
    }
}

/// Applies ANSI styles to output fragments, or passes them through untouched
/// when disabled.
#[derive(Clone)]
pub struct Colorizer {
    enabled: bool,
    pod_hasher: RandomState,
}

impl fmt::Debug for Colorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colorizer")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        let (k0, k1, k2, k3) = POD_HASH_SEEDS;
        Self {
            enabled,
            pod_hasher: RandomState::with_seeds(k0, k1, k2, k3),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn level(&self, level: LogLevel, text: &str) -> String {
        let style = match level {
            LogLevel::Error => Style::new().red().bold(),
            LogLevel::Warning => Style::new().yellow().bold(),
            LogLevel::Info => Style::new().green(),
            LogLevel::Debug => Style::new().blue(),
            LogLevel::Trace => Style::new().magenta(),
        };
        self.paint(text, style)
    }

    pub fn pod(&self, pod: &str) -> String {
        self.paint(pod, Style::new().color(self.pod_color(pod)))
    }

    pub fn pod_color(&self, pod: &str) -> AnsiColors {
        let index = self.pod_hasher.hash_one(pod) % POD_PALETTE.len() as u64;
        POD_PALETTE[index as usize]
    }

    pub fn logger(&self, logger: &str) -> String {
        self.paint(logger, Style::new().cyan())
    }

    pub fn timestamp(&self, ts: &str) -> String {
        self.paint(ts, Style::new().dimmed())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Style::new().red())
    }
}
