pub mod config;
pub mod error;

pub use config::{
  Config,
  ConfigFormat,
  PartialConfig,
  PartialHtmlOptions,
};
pub use error::ConfigError;
