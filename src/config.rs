//! Run configuration
//!
//! A configuration names the generated artifact, the compression to use and
//! the custom file sets to embed. It can be written in TOML or JSON:
//!
//! ```toml
//! output = "ab0x.rs"
//!
//! [compression]
//! method = "gzip"
//! level = 9
//!
//! [[custom]]
//! files = ["public/"]
//! base = "public/"
//! prefix = "static/"
//! exclude = ["**/*.map"]
//!
//! [[custom.replace]]
//! file = "**/*.html"
//! replace = { "{{version}}" = "1.2.0" }
//! ```

use crate::bundle::Bundle;
use crate::compression::Compression;
use crate::custom::{Custom, SharedConfig};
use crate::error::{B0xError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Full configuration of one embedding run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base name of the generated artifact
    pub output: String,

    /// Compression applied to every embedded file
    #[serde(default)]
    pub compression: Compression,

    /// File sets to embed, processed in order
    #[serde(default)]
    pub custom: Vec<Custom>,
}

impl Config {
    /// Load a configuration file, choosing the format by extension
    /// (`.json` is JSON, anything else is TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.output.trim().is_empty() {
            return Err(B0xError::Config("output must not be empty".to_string()));
        }

        self.compression.validate()?;

        for (idx, custom) in self.custom.iter().enumerate() {
            if custom.files.is_empty() {
                return Err(B0xError::Config(format!(
                    "custom block {} lists no files",
                    idx
                )));
            }
        }

        Ok(())
    }

    /// Settings shared by every custom block
    pub fn shared(&self) -> SharedConfig {
        SharedConfig {
            output: self.output.clone(),
            compression: self.compression,
        }
    }

    /// Run every custom block, in order, into one bundle
    pub fn bundle(&self) -> Result<Bundle> {
        let shared = self.shared();
        let mut bundle = Bundle::new();

        for custom in &self.custom {
            custom.parse_into(&mut bundle, &shared)?;
        }

        info!(
            files = bundle.files.len(),
            dirs = bundle.dirs.len(),
            "bundle complete"
        );
        Ok(bundle)
    }
}
