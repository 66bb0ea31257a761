//! Writing rendered documents to their destinations.
use std::{
  fs,
  io::{self, Write},
  path::{Path, PathBuf},
  sync::Arc,
};

use log::{debug, info};
use mdcompose::{
  ComrakConverter,
  HtmlConverter,
  Renderable,
  SharedConverter,
};
use mdcompose_config::Config;

use crate::{cli::Commands, demo, error::CliError};

/// Files written by [`write_demo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
  /// Path of the Markdown document.
  pub markdown: PathBuf,
  /// Path of the HTML rendition, when one was requested.
  pub html:     Option<PathBuf>,
}

/// Fold `demo` subcommand arguments into the loaded configuration. CLI
/// arguments win over config file values.
pub fn merge_demo_args(config: &mut Config, command: &Commands) {
  if let Commands::Demo {
    output,
    html_output,
    stdout,
  } = command
  {
    if let Some(output) = output {
      config.output.clone_from(output);
    }
    if html_output.is_some() {
      config.html_output.clone_from(html_output);
    }
    if *stdout {
      config.print = true;
    }
  }
}

/// Render the demonstration document and write it where `config` says.
///
/// # Errors
///
/// Returns an error if a destination cannot be written or the HTML
/// conversion of the whole document fails.
pub fn write_demo(config: &Config) -> Result<Written, CliError> {
  let converter: SharedConverter =
    Arc::new(ComrakConverter::new(config.html.clone()));
  let markdown = demo::build_demo_document(&converter).render();
  debug!("Rendered demonstration document ({} bytes)", markdown.len());

  write_file(&config.output, &markdown)?;
  info!("Markdown written to {}", config.output.display());

  let html = if let Some(html_path) = &config.html_output {
    let html = converter.to_html(&markdown)?;
    write_file(html_path, &html)?;
    info!("HTML written to {}", html_path.display());
    Some(html_path.clone())
  } else {
    None
  };

  if config.print {
    let mut stdout = io::stdout().lock();
    stdout.write_all(markdown.as_bytes())?;
    stdout.flush()?;
  }

  Ok(Written {
    markdown: config.output.clone(),
    html,
  })
}

/// Write a default configuration file, refusing to overwrite unless `force`.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is unset, or if the file
/// cannot be written.
pub fn init_config(
  output: &Path,
  format: &str,
  force: bool,
) -> Result<(), CliError> {
  if output.exists() && !force {
    return Err(CliError::AlreadyExists(output.to_path_buf()));
  }

  create_parent_dirs(output)?;
  Config::generate_default_config(format, output)?;
  Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
  create_parent_dirs(path)?;
  fs::write(path, content)?;
  Ok(())
}

fn create_parent_dirs(path: &Path) -> io::Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent)?;
    info!("Created directory: {}", parent.display());
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_merge_demo_args_overrides_config() {
    let mut config = Config {
      html_output: Some(PathBuf::from("keep.html")),
      ..Config::default()
    };

    merge_demo_args(&mut config, &Commands::Demo {
      output:      Some(PathBuf::from("cli.md")),
      html_output: None,
      stdout:      false,
    });

    assert_eq!(config.output, PathBuf::from("cli.md"));
    assert_eq!(config.html_output, Some(PathBuf::from("keep.html")));
    assert!(!config.print);
  }

  #[test]
  fn test_merge_ignores_other_commands() {
    let mut config = Config::default();
    merge_demo_args(&mut config, &Commands::Init {
      output: PathBuf::from("x.toml"),
      format: "toml".to_string(),
      force:  true,
    });
    assert_eq!(config, Config::default());
  }
}
