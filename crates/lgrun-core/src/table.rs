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

//! Property table loading.
//!
//! A property file is read line by line. Any line containing
//! `<Name>Value<` contributes `Name = Value`; everything else is ignored, so
//! an MSBuild `.props` file can be read without an XML parser:
//!
//! ```text
//! <PropertyGroup Label="UserMacros">
//!   <PYTHON3_EXE>C:\Python39\python.exe</PYTHON3_EXE>
//!   <LG_DLLPATH>$(PYTHON3_EXE)\..\DLLs</LG_DLLPATH>
//! </PropertyGroup>
//! ```

use crate::error::{PropsError, PropsResult};
use crate::limits::Limits;
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<(\w+)>([^<]+)<").expect("valid declaration pattern"))
}

/// Property names mapped to their raw (unexpanded) values.
///
/// The table is built once and never modified afterward. Iteration is in
/// name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    origin: String,
    entries: BTreeMap<String, String>,
}

impl PropertyTable {
    /// Load a property file with the default [`Limits`].
    pub fn load(path: impl AsRef<Path>) -> PropsResult<Self> {
        Self::load_with_limits(path, &Limits::default())
    }

    /// Load a property file, rejecting files larger than
    /// `limits.max_file_size` before reading them.
    ///
    /// The file is not required to be UTF-8. Undecodable bytes become U+FFFD,
    /// so a stray Latin-1 comment does not stop the declarations around it
    /// from loading.
    pub fn load_with_limits(path: impl AsRef<Path>, limits: &Limits) -> PropsResult<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|e| PropsError::load(path, e))?;
        if metadata.len() > limits.max_file_size {
            return Err(PropsError::FileTooLarge {
                path: path.to_path_buf(),
                actual: metadata.len(),
                max: limits.max_file_size,
            });
        }

        let bytes = fs::read(path).map_err(|e| PropsError::load(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            tracing::warn!(path = %path.display(), "property file is not valid UTF-8, undecodable bytes replaced");
        }
        let table = Self::parse(&text, path.display().to_string())?;
        tracing::debug!(path = %path.display(), count = table.len(), "loaded property file");
        Ok(table)
    }

    /// Parse property declarations from text. `origin` names the source in
    /// error messages.
    ///
    /// # Errors
    ///
    /// - [`PropsError::MalformedLine`] if a matching line lacks a name or value
    /// - [`PropsError::NoPropertiesFound`] if no line declares a property
    pub fn parse(text: &str, origin: impl Into<String>) -> PropsResult<Self> {
        let origin = origin.into();
        let mut entries = BTreeMap::new();

        for (index, line) in text.lines().enumerate() {
            let Some(caps) = declaration_pattern().captures(line) else {
                continue;
            };
            let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
                return Err(PropsError::MalformedLine {
                    origin,
                    line_number: index + 1,
                    line: line.to_string(),
                });
            };
            if let Some(previous) = entries.insert(name.as_str().to_string(), value.as_str().to_string()) {
                tracing::debug!(name = name.as_str(), %previous, "property redefined");
            }
        }

        if entries.is_empty() {
            return Err(PropsError::NoPropertiesFound { origin });
        }

        Ok(Self { origin, entries })
    }

    /// Build a table directly from name/value pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(origin: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            origin: origin.into(),
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Where the properties came from (the file path, for loaded tables).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Raw value of a property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, raw value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROPS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ImportGroup Label="PropertySheets" />
  <PropertyGroup Label="UserMacros">
    <PYTHON2_EXE>C:\Python27\python.exe</PYTHON2_EXE>
    <PYTHON3_EXE>C:\Python39\python.exe</PYTHON3_EXE>
    <LG_DLLPATH>$(GNUREGEX_DIR)\lib</LG_DLLPATH>
  </PropertyGroup>
</Project>
"#;

    #[test]
    fn test_parse_msbuild_props() {
        let table = PropertyTable::parse(PROPS, "Local.props").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("PYTHON2_EXE"), Some(r"C:\Python27\python.exe"));
        assert_eq!(table.get("LG_DLLPATH"), Some(r"$(GNUREGEX_DIR)\lib"));
        assert_eq!(table.origin(), "Local.props");
    }

    #[test]
    fn test_parse_ignores_structure_lines() {
        let table = PropertyTable::parse(PROPS, "Local.props").unwrap();
        assert!(!table.contains("Project"));
        assert!(!table.contains("PropertyGroup"));
        assert!(!table.contains("ImportGroup"));
    }

    #[test]
    fn test_parse_last_definition_wins() {
        let text = "<A>first</A>\n<B>b</B>\n<A>second</A>\n";
        let table = PropertyTable::parse(text, "dup.props").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("A"), Some("second"));
    }

    #[test]
    fn test_parse_empty_value_is_not_a_declaration() {
        let text = "<EMPTY></EMPTY>\n<A>1</A>\n";
        let table = PropertyTable::parse(text, "x").unwrap();
        assert!(!table.contains("EMPTY"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_first_match_on_line() {
        let table = PropertyTable::parse("<A>1</A><B>2</B>", "x").unwrap();
        assert_eq!(table.get("A"), Some("1"));
        assert!(!table.contains("B"));
    }

    #[test]
    fn test_parse_crlf() {
        let table = PropertyTable::parse("<A>1</A>\r\n<B>2</B>\r\n", "x").unwrap();
        assert_eq!(table.get("A"), Some("1"));
        assert_eq!(table.get("B"), Some("2"));
    }

    #[test]
    fn test_parse_no_properties() {
        let err = PropertyTable::parse("<Project>\n</Project>\n", "Local.props").unwrap_err();
        assert_eq!(
            err,
            PropsError::NoPropertiesFound {
                origin: "Local.props".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let err = PropertyTable::parse("", "empty").unwrap_err();
        assert!(matches!(err, PropsError::NoPropertiesFound { .. }));
    }

    #[test]
    fn test_from_pairs_and_iter_order() {
        let table = PropertyTable::from_pairs("mem", [("B", "2"), ("A", "1")]);
        let names: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(!table.is_empty());
    }
}
