// Dweve lgrun - MSVC property-driven script launcher
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! List command - show every property with its expanded value

use crate::error::CliError;
use colored::Colorize;
use lgrun_core::{Environment, Resolver};
use std::collections::BTreeMap;

/// Output format for the property listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

/// Render the property table as an aligned, colored listing.
///
/// Each line shows `NAME = value`; properties whose value changed during
/// expansion also show the raw value.
pub fn render_text<E: Environment>(resolver: &Resolver<E>) -> Result<String, CliError> {
    let resolved = resolver.resolve_all()?;
    let width = resolved.keys().map(|k| k.len()).max().unwrap_or(0);

    let mut out = format!(
        "{} {}\n",
        "Properties from".cyan(),
        resolver.table().origin().bold()
    );
    for (name, raw) in resolver.table().iter() {
        let value = resolved.get(name).map(String::as_str).unwrap_or(raw);
        out.push_str(&format!(
            "  {}{} = {}\n",
            name.green(),
            " ".repeat(width - name.len()),
            value
        ));
        if value != raw {
            out.push_str(&format!(
                "  {}   {}\n",
                " ".repeat(width),
                format!("({})", raw).dimmed()
            ));
        }
    }
    Ok(out)
}

/// Render the property table as JSON:
///
/// ```json
/// {
///   "origin": "Local.props",
///   "properties": {
///     "LG_DLLPATH": { "raw": "$(VCPKG)\\bin", "value": "D:\\vcpkg\\bin" }
///   }
/// }
/// ```
pub fn render_json<E: Environment>(resolver: &Resolver<E>) -> Result<String, CliError> {
    let resolved = resolver.resolve_all()?;

    let properties: BTreeMap<&str, serde_json::Value> = resolver
        .table()
        .iter()
        .map(|(name, raw)| {
            let value = resolved.get(name).map(String::as_str).unwrap_or(raw);
            (name, serde_json::json!({ "raw": raw, "value": value }))
        })
        .collect();

    let doc = serde_json::json!({
        "origin": resolver.table().origin(),
        "properties": properties,
    });
    Ok(serde_json::to_string_pretty(&doc)? + "\n")
}

/// Print the property listing to stdout.
///
/// # Errors
///
/// Returns `Err` if any property fails to expand, or writing fails.
pub fn list<E: Environment>(resolver: &Resolver<E>, format: ListFormat) -> Result<(), CliError> {
    let rendered = match format {
        ListFormat::Text => render_text(resolver)?,
        ListFormat::Json => render_json(resolver)?,
    };
    super::write_stdout(&rendered)
}
