//! Configuration types for rota.
//!
//! [`Config::load`] reads `~/.config/rota/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[markers]
title            = "SCHEDULE"
notes            = ["DELI"]
section_labels   = ["CASHIERS"]
off              = "OFF"
guaranteed_hours = "GH"
keywords         = ["OPEN", "CLOSE"]

[parser]
multi_week = false

[ocr]
binary       = "tesseract"
lang         = "eng"
psm          = 6
timeout_secs = 60
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/rota/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
}

/// `[markers]` section: the literals the line classifier and the shift
/// normalizer match against. Comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkersConfig {
    /// Substring that identifies the banner line.
    #[serde(default = "default_title")]
    pub title: String,
    /// Substrings that identify note lines.
    #[serde(default = "default_notes")]
    pub notes: Vec<String>,
    /// First-token headings of roster sections; such lines are skipped.
    #[serde(default = "default_section_labels")]
    pub section_labels: Vec<String>,
    #[serde(default = "default_off")]
    pub off: String,
    #[serde(default = "default_guaranteed_hours")]
    pub guaranteed_hours: String,
    /// Open/close responsibilities; cells containing one are kept verbatim.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_title() -> String { "SCHEDULE".to_string() }
fn default_notes() -> Vec<String> { vec!["DELI".to_string()] }
fn default_section_labels() -> Vec<String> { vec!["CASHIERS".to_string()] }
fn default_off() -> String { "OFF".to_string() }
fn default_guaranteed_hours() -> String { "GH".to_string() }
fn default_keywords() -> Vec<String> { vec!["OPEN".to_string(), "CLOSE".to_string()] }

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            notes: default_notes(),
            section_labels: default_section_labels(),
            off: default_off(),
            guaranteed_hours: default_guaranteed_hours(),
            keywords: default_keywords(),
        }
    }
}

/// `[parser]` section of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Start a new week at every date-header row instead of overwriting the
    /// dates of the single week.
    #[serde(default)]
    pub multi_week: bool,
}

/// `[ocr]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OcrConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Tesseract page segmentation mode.
    #[serde(default = "default_psm")]
    pub psm: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_binary() -> String { "tesseract".to_string() }
fn default_lang() -> String { "eng".to_string() }
fn default_psm() -> u8 { 6 }
fn default_timeout_secs() -> u64 { 60 }

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            lang: default_lang(),
            psm: default_psm(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/rota/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit file on top of the built-in defaults. The file must
    /// exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
            .with_context(|| format!("failed to load config from {}", path.display()))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("rota")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
