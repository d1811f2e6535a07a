use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::converter::ConversionOptions;

/// Application configuration module
/// This module handles the persisted settings of the converter: the remembered
/// output folder and the last-used conversion options.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Remembered output folder (empty: write next to the input)
    #[serde(default)]
    pub output_path: String,

    /// Whether the output folder is remembered between runs
    #[serde(default = "default_true")]
    pub save_output_path: bool,

    /// Prefix cue text with the speaker label
    #[serde(default = "default_true")]
    pub include_speaker: bool,

    /// Timestamp offset in seconds
    #[serde(default)]
    pub offset: f64,

    /// Minimum cue duration in seconds
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_duration() -> f64 {
    1.0
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.conversion_options()
            .validate()
            .context("Invalid conversion settings in configuration")?;
        Ok(())
    }

    /// Conversion options described by this configuration
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            offset_seconds: self.offset,
            min_duration_seconds: self.min_duration,
            include_speaker: self.include_speaker,
        }
    }

    /// Remembered output folder, if any
    pub fn remembered_output_dir(&self) -> Option<&Path> {
        if self.output_path.trim().is_empty() {
            None
        } else {
            Some(Path::new(&self.output_path))
        }
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration, writing a default file first if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty JSON.
    ///
    /// The output folder is only persisted when `save_output_path` is set.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut stored = self.clone();
        if !stored.save_output_path {
            stored.output_path.clear();
        }

        let config_json = serde_json::to_string_pretty(&stored)
            .context("Failed to serialize config to JSON")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_path: String::new(),
            save_output_path: true,
            include_speaker: true,
            offset: 0.0,
            min_duration: default_min_duration(),
            log_level: LogLevel::default(),
        }
    }
}
