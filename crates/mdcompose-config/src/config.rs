use std::{
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use mdcompose::HtmlOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File names probed, in order, when no config file is given explicitly.
const CONFIG_FILENAMES: [&str; 4] = [
  "mdcompose.toml",
  "mdcompose.json",
  ".mdcompose.toml",
  ".mdcompose.json",
];

/// Configuration for the mdcompose CLI.
///
/// Fields are typically loaded from a TOML or JSON config file and may be
/// overridden with `--config KEY=VALUE` flags or dedicated CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Path of the generated Markdown document.
  pub output: PathBuf,

  /// Path of the HTML rendition of the document, if one should be written.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_output: Option<PathBuf>,

  /// Whether to also print the Markdown document to standard output.
  pub print: bool,

  /// Options for Markdown to HTML conversion.
  pub html: HtmlOptions,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      output:      PathBuf::from("document.md"),
      html_output: None,
      print:       false,
      html:        HtmlOptions::default(),
    }
  }
}

/// One config file as written, before it is layered over the defaults.
///
/// Keys missing from the file stay [`None`], so merging a later file only
/// replaces what that file actually sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
  /// See [`Config::output`].
  pub output:      Option<PathBuf>,
  /// See [`Config::html_output`].
  pub html_output: Option<PathBuf>,
  /// See [`Config::print`].
  pub print:       Option<bool>,
  /// Keys of the `[html]` table.
  pub html:        PartialHtmlOptions,
}

/// The `[html]` table of a [`PartialConfig`]. Each key mirrors the field of
/// the same name in [`HtmlOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialHtmlOptions {
  /// See [`HtmlOptions::gfm`].
  pub gfm:                    Option<bool>,
  /// See [`HtmlOptions::heading_ids`].
  pub heading_ids:            Option<bool>,
  /// See [`HtmlOptions::external_links_new_tab`].
  pub external_links_new_tab: Option<bool>,
  /// See [`HtmlOptions::unsafe_html`].
  pub unsafe_html:            Option<bool>,
  /// See [`HtmlOptions::hard_breaks`].
  pub hard_breaks:            Option<bool>,
}

impl PartialConfig {
  /// Parse a TOML or JSON config file, picked by extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unsupported
  /// extension, or fails to parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match format {
      ConfigFormat::Json => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      ConfigFormat::Toml => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
    }
  }
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
  Toml,
  Json,
}

impl ConfigFormat {
  /// Detect the format from a file extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the path has no extension or an unsupported one.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let ext = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
      ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      ))
    })?;

    ext.parse().map_err(|_| {
      ConfigError::Config(format!(
        "Unsupported config file format: {}",
        path.display()
      ))
    })
  }
}

impl FromStr for ConfigFormat {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "toml" => Ok(Self::Toml),
      "json" => Ok(Self::Json),
      other => {
        Err(ConfigError::Config(format!(
          "Unknown config format '{other}'. Expected 'toml' or 'json'"
        )))
      },
    }
  }
}

impl Config {
  /// Load configuration from a TOML or JSON file, picked by extension. Keys
  /// the file does not set keep their defaults.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unsupported
  /// extension, or fails to parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    config.merge(PartialConfig::from_file(path)?);
    Ok(config)
  }

  /// Build the effective configuration.
  ///
  /// Explicit `config_files` are loaded and merged in order, later files
  /// taking precedence. Without explicit files, a config file in the current
  /// directory is used if one exists, otherwise the defaults. Finally the
  /// `KEY=VALUE` overrides are applied.
  ///
  /// # Errors
  ///
  /// Returns an error if a config file cannot be loaded or an override is
  /// malformed.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        log::info!("Using discovered config file: {}", discovered.display());
        config.merge(PartialConfig::from_file(&discovered)?);
      } else {
        log::debug!("No config file found, using defaults");
      }
    } else {
      for config_path in config_files {
        config.merge(PartialConfig::from_file(config_path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
    }

    config.apply_overrides(config_overrides)?;
    Ok(config)
  }

  /// Look for a config file in the current directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Look for a config file in `dir`.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Layer a config file over this config. Only the keys the file sets are
  /// replaced, so later files refine earlier ones instead of resetting them.
  pub fn merge(&mut self, other: PartialConfig) {
    if let Some(output) = other.output {
      self.output = output;
    }
    if other.html_output.is_some() {
      self.html_output = other.html_output;
    }
    if let Some(print) = other.print {
      self.print = print;
    }

    let html = other.html;
    let targets = [
      (&mut self.html.gfm, html.gfm),
      (&mut self.html.heading_ids, html.heading_ids),
      (&mut self.html.external_links_new_tab, html.external_links_new_tab),
      (&mut self.html.unsafe_html, html.unsafe_html),
      (&mut self.html.hard_breaks, html.hard_breaks),
    ];
    for (target, value) in targets {
      if let Some(value) = value {
        *target = value;
      }
    }
  }

  /// Apply configuration overrides from `KEY=VALUE` strings.
  ///
  /// # Errors
  ///
  /// Returns an error if an override is not in `KEY=VALUE` form, names an
  /// unknown key, or carries a value of the wrong type.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override. Nested keys use dots, e.g. `html.gfm=false`.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys or unparsable values.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "output" => self.output = PathBuf::from(value),
      "html_output" => {
        self.html_output =
          (!value.is_empty()).then(|| PathBuf::from(value));
      },
      "print" => self.print = parse_bool(key, value)?,
      "html.gfm" => self.html.gfm = parse_bool(key, value)?,
      "html.heading_ids" => self.html.heading_ids = parse_bool(key, value)?,
      "html.external_links_new_tab" => {
        self.html.external_links_new_tab = parse_bool(key, value)?;
      },
      "html.unsafe_html" => self.html.unsafe_html = parse_bool(key, value)?,
      "html.hard_breaks" => self.html.hard_breaks = parse_bool(key, value)?,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// Serialize the default configuration in the given format.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn default_config_string(
    format: ConfigFormat,
  ) -> Result<String, ConfigError> {
    let config = Self::default();
    match format {
      ConfigFormat::Toml => Ok(toml::to_string_pretty(&config)?),
      ConfigFormat::Json => Ok(serde_json::to_string_pretty(&config)?),
    }
  }

  /// Write a default configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unknown or the file cannot be written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = Self::default_config_string(format.parse()?)?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  value.parse().map_err(|_| {
    ConfigError::Config(format!(
      "Invalid value for '{key}': expected true or false, got '{value}'"
    ))
  })
}
