// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use swt_core::RunOutcome;
use swt_suite::ModuleInfo;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result object for the orchestrator, pretty-printed JSON.
pub fn format_outcome(outcome: &RunOutcome) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// One module per line: name, padded, then the summary. Tasks are marked.
pub fn format_module_list(modules: &[ModuleInfo], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let width = modules.iter().map(|m| m.name.len()).max().unwrap_or(0);
            let mut out = String::new();
            for module in modules {
                let name = format!("{:<width$}", module.name);
                let kind = if module.recorded { "" } else { " (task)" };
                out.push_str(&format!(
                    "{}  {}{}\n",
                    crate::color::literal(&name),
                    crate::color::context(module.summary),
                    kind
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let entries: Vec<_> = modules
                .iter()
                .map(|m| serde_json::json!({ "name": m.name, "summary": m.summary, "recorded": m.recorded }))
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?))
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
