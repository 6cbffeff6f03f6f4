//! Package manifests.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::runtime::Runtime;

/// A package as described by its manifest.
///
/// Only the fields the asset linker reads are kept; unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Free-form `extra` configuration, `Null` when not declared.
    #[serde(default)]
    pub extra: Value,
}

impl Package {
    pub fn new(name: impl Into<String>, extra: Value) -> Self {
        Self {
            name: name.into(),
            version: None,
            extra,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Name and version for messages, e.g. `acme/widgets (1.2.0)`.
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{} ({})", self.name, version),
            None => self.name.clone(),
        }
    }

    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        let package: Package = serde_json::from_str(&content)
            .with_context(|| format!("Invalid package manifest {:?}", path))?;
        Ok(package)
    }
}
