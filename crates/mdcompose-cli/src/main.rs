use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};
use mdcompose_cli::{
  cli::{Cli, Commands},
  output,
};
use mdcompose_config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let command = cli.command.unwrap_or_default();

  if let Commands::Init {
    output: path,
    format,
    force,
  } = &command
  {
    output::init_config(path, format, *force).wrap_err_with(|| {
      format!("Failed to generate configuration file: {}", path.display())
    })?;
    info!(
      "Configuration file created successfully. Edit it to customize the \
       generated document."
    );
    return Ok(());
  }

  let mut config = Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;
  output::merge_demo_args(&mut config, &command);

  let written = output::write_demo(&config).wrap_err_with(|| {
    format!("Failed to write document to {}", config.output.display())
  })?;

  info!("Document generated successfully: {}", written.markdown.display());
  Ok(())
}
