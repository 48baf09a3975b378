// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assembling a module's flat parameter object.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

/// Flag values that replace the matching parameter keys.
#[derive(Debug, Default)]
pub struct Overrides {
    pub switch_name: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Parameters from a file (TOML when the extension says so, JSON otherwise),
/// then inline JSON on top.
pub fn load(file: Option<&Path>, inline: Option<&str>) -> Result<Map<String, Value>> {
    let mut params = Map::new();
    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read parameters from {}", path.display()))?;
        let value = if path.extension().is_some_and(|ext| ext == "toml") {
            let table: toml::Value =
                toml::from_str(&text).with_context(|| format!("invalid TOML in {}", path.display()))?;
            serde_json::to_value(table)?
        } else {
            serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))?
        };
        params.extend(into_object(value)?);
    }
    if let Some(text) = inline {
        let value: Value = serde_json::from_str(text).context("invalid JSON in --params-json")?;
        params.extend(into_object(value)?);
    }
    Ok(params)
}

pub fn apply(mut params: Map<String, Value>, overrides: Overrides) -> Map<String, Value> {
    if let Some(switch) = overrides.switch_name {
        params.insert("switch_name".into(), Value::String(switch));
    }
    if let Some(dir) = overrides.log_dir {
        params.insert("log_dir_path".into(), Value::String(dir.to_string_lossy().into_owned()));
    }
    if overrides.dry_run {
        // `dry_run_mode` is an alias; leaving it beside `dry_run` is a duplicate field.
        params.remove("dry_run_mode");
        params.insert("dry_run".into(), Value::Bool(true));
    }
    params
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("parameters must be a key/value table, got {other}"),
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
