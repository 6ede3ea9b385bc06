//! YAML loader for attribute bindings.
//!
//! The interception core only consumes already-parsed bindings; this module
//! is the thin edge that turns a config file into them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use weft_core_types::Attribute;

use crate::errors::AttributeError;

/// One parsed configuration entry: a pattern and its attribute sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeBinding {
    pub pattern: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Top-level config document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeConfig {
    #[serde(default)]
    pub bindings: Vec<AttributeBinding>,
}

/// Read attribute bindings from a YAML file.
pub fn load_bindings(path: &Path) -> Result<Vec<AttributeBinding>, AttributeError> {
    let raw = fs::read_to_string(path).map_err(|err| AttributeError::Io(err.to_string()))?;
    let config: AttributeConfig =
        serde_yaml::from_str(&raw).map_err(|err| AttributeError::Parse(err.to_string()))?;
    Ok(config.bindings)
}
