// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use bestiary_core::LabelSet;
use bestiary_io::SourceConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "Bestiary.toml";

/// Represents the structure of the `Bestiary.toml` file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the catalog is fetched from.
    pub source: SourceConfig,
    /// Which label table the front-end displays categories with.
    pub labels: LabelSet,
}

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub limit: Option<u32>,
    pub concurrency: Option<usize>,
    pub labels: Option<LabelSet>,
}

impl AppConfig {
    /// Loads `path`, or `Bestiary.toml` when no path is given.
    ///
    /// An explicit path must exist; the default file is optional and its
    /// absence falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !config_path.exists() {
            if required {
                anyhow::bail!("Config file '{}' does not exist", config_path.display());
            }
            log::info!(
                "No '{}' found. Using default configuration.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        log::info!("Found '{}'. Loading configuration.", config_path.display());
        let config_str = fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read config file at '{}'", config_path.display())
        })?;
        toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse TOML from '{}'", config_path.display()))
    }

    /// Applies command-line values over the file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(endpoint) = overrides.endpoint {
            self.source.endpoint = endpoint;
        }
        if let Some(limit) = overrides.limit {
            self.source.limit = limit;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.source.max_concurrent_requests = concurrency;
        }
        if let Some(labels) = overrides.labels {
            self.labels = labels;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "labels = \"raw\"\n\n[source]\nlimit = 20\nmax_concurrent_requests = 4"
        )?;

        let config = AppConfig::load(Some(file.path()))?;
        assert_eq!(config.labels, LabelSet::Raw);
        assert_eq!(config.source.limit, 20);
        assert_eq!(config.source.max_concurrent_requests, 4);
        assert_eq!(config.source.endpoint, SourceConfig::default().endpoint);
        Ok(())
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[source\nlimit = ")?;
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
        Ok(())
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = AppConfig::default().with_overrides(Overrides {
            endpoint: Some("http://localhost:9000/creatures".to_string()),
            limit: Some(12),
            concurrency: None,
            labels: Some(LabelSet::Raw),
        });
        assert_eq!(config.source.endpoint, "http://localhost:9000/creatures");
        assert_eq!(config.source.limit, 12);
        assert_eq!(config.source.max_concurrent_requests, 16);
        assert_eq!(config.labels, LabelSet::Raw);
    }
}
