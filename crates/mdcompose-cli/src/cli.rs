use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for mdcompose
#[derive(Parser, Debug)]
#[command(
  name = "mdcompose",
  author,
  version,
  about = "Build Markdown documents from typed elements"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`]). Defaults to `demo`.
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Later files override earlier ones.
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the mdcompose CLI.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
  /// Render the demonstration document and write it to disk.
  Demo {
    /// Output file for the Markdown document.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the document converted to HTML to this file.
    #[arg(long = "html")]
    html_output: Option<PathBuf>,

    /// Print the Markdown document to standard output as well.
    #[arg(long)]
    stdout: bool,
  },

  /// Initialize a new mdcompose configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "mdcompose.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Default for Commands {
  fn default() -> Self {
    Self::Demo {
      output:      None,
      html_output: None,
      stdout:      false,
    }
  }
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
