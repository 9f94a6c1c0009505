//! Settings read through the `config` crate.
//!
//! An optional file is layered under environment variables prefixed with
//! `CHRONOTEXT_`, e.g. `CHRONOTEXT_KINDS=CalendarDate,Instant`.

use std::path::Path;

// config lets you read a separate config file
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::datatype::TemporalKind;
use crate::error::Result;

pub const ENV_PREFIX: &str = "CHRONOTEXT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Kinds registered by `register_configured`, every kind by default.
    #[serde(default = "every_kind")]
    pub kinds: Vec<TemporalKind>,
}

fn every_kind() -> Vec<TemporalKind> {
    TemporalKind::ALL.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self { kinds: every_kind() }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("kinds"),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
