use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use mdcompose_cli::cli::Cli;

const BIN_NAME: &str = "mdcompose";

const SHELLS: [Shell; 5] = [
  Shell::Bash,
  Shell::Zsh,
  Shell::Fish,
  Shell::PowerShell,
  Shell::Elvish,
];

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Tasks,
}

#[derive(Subcommand)]
enum Tasks {
  /// Generate shell completions and manpages for the mdcompose CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Skip shell completions.
    #[arg(long)]
    no_completions: bool,

    /// Skip manpages.
    #[arg(long)]
    no_manpages: bool,
  },
}

fn main() -> Result<()> {
  let Tasks::Dist {
    output_dir,
    no_completions,
    no_manpages,
  } = Xtask::parse().command;

  if !no_completions {
    write_completions(&output_dir.join("completions"))?;
  }
  if !no_manpages {
    write_manpages(&output_dir.join("man"))?;
  }

  Ok(())
}

fn write_completions(dir: &Path) -> Result<()> {
  fs::create_dir_all(dir)
    .with_context(|| format!("Failed to create {}", dir.display()))?;

  let mut cmd = Cli::command();
  for shell in SHELLS {
    let path = generate_to(shell, &mut cmd, BIN_NAME, dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
    println!("Wrote {}", path.display());
  }
  Ok(())
}

/// One page for the top-level command and one per subcommand, named
/// `mdcompose-<subcommand>.1`.
fn write_manpages(dir: &Path) -> Result<()> {
  fs::create_dir_all(dir)
    .with_context(|| format!("Failed to create {}", dir.display()))?;

  let cmd = Cli::command();
  write_manpage(dir, BIN_NAME, cmd.clone())?;

  for sub in cmd.get_subcommands() {
    let name = format!("{BIN_NAME}-{}", sub.get_name());
    write_manpage(dir, &name, sub.clone())?;
  }
  Ok(())
}

fn write_manpage(dir: &Path, name: &str, cmd: Command) -> Result<()> {
  let path = dir.join(format!("{name}.1"));
  let mut file = fs::File::create(&path).with_context(|| {
    format!("Failed to create manpage file at {}", path.display())
  })?;
  Man::new(cmd)
    .render(&mut file)
    .with_context(|| format!("Failed to render manpage {name}"))?;
  println!("Wrote {}", path.display());
  Ok(())
}
