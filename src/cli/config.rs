//! JSON config file for column selections
//!
//! ```json
//! { "cat_vars": ["type"], "num_vars": ["height", "width"], "n_cols": 2 }
//! ```
//!
//! Every key is optional. Values are checked with the same rules as the
//! library functions, so a non-list `cat_vars` is an `InvalidType` error.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::{EdaError, EdaResult};
use crate::pipeline::{parse_n_cols, parse_string_list};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub cat_vars: Option<Vec<String>>,
    pub num_vars: Option<Vec<String>>,
    pub n_cols: Option<usize>,
}

impl ReportConfig {
    pub fn from_json(value: &Value) -> EdaResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| EdaError::invalid_type("config must be a JSON object"))?;

        Ok(Self {
            cat_vars: object
                .get("cat_vars")
                .map(|v| parse_string_list(v, "cat_vars"))
                .transpose()?,
            num_vars: object
                .get("num_vars")
                .map(|v| parse_string_list(v, "num_vars"))
                .transpose()?,
            n_cols: object.get("n_cols").map(parse_n_cols).transpose()?,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Self::from_json(&value)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
