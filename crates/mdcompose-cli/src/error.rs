use std::{io, path::PathBuf};

use mdcompose::ConvertError;
use mdcompose_config::ConfigError;
use thiserror::Error;

/// Top-level error type for the mdcompose CLI.
#[derive(Debug, Error)]
pub enum CliError {
  #[error("Configuration error: {0}")]
  Config(#[from] ConfigError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("HTML conversion error: {0}")]
  Convert(#[from] ConvertError),

  #[error("File already exists: {}. Use --force to overwrite.", .0.display())]
  AlreadyExists(PathBuf),
}
