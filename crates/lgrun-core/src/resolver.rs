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

//! `$(NAME)` macro resolution.
//!
//! A property value may reference other properties, or environment
//! variables, with `$(NAME)`. Resolution repeatedly finds the first
//! placeholder, looks its name up (property table first, then the
//! environment), replaces every occurrence of that placeholder, and rescans
//! until no placeholder is left.

use crate::env::Environment;
use crate::error::{PropsError, PropsResult};
use crate::limits::Limits;
use crate::table::PropertyTable;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\((\w+)\)").expect("valid placeholder pattern"))
}

fn first_placeholder(text: &str) -> Option<&str> {
    placeholder_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn placeholders(text: &str) -> impl Iterator<Item = &str> {
    placeholder_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Expands property values against a [`PropertyTable`] and an
/// [`Environment`].
///
/// Results are not cached; every call walks the substitution chain again
/// and sees the environment as it is at that moment.
///
/// # Examples
///
/// ```
/// use lgrun_core::{PropertyTable, Resolver};
/// use std::collections::HashMap;
///
/// let table = PropertyTable::from_pairs(
///     "Local.props",
///     [("FOO_EXE", r"C:\Py\python.exe"), ("LG_DLLPATH", r"$(FOO_EXE)\..\dll")],
/// );
/// let resolver = Resolver::new(table, HashMap::<String, String>::new());
///
/// assert_eq!(resolver.resolve("LG_DLLPATH").unwrap(), r"C:\Py\python.exe\..\dll");
/// assert_eq!(resolver.resolve_or("MISSING", "fallback").unwrap(), "fallback");
/// assert!(resolver.resolve("MISSING").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<E> {
    table: PropertyTable,
    env: E,
    limits: Limits,
}

impl<E: Environment> Resolver<E> {
    pub fn new(table: PropertyTable, env: E) -> Self {
        Self::with_limits(table, env, Limits::default())
    }

    pub fn with_limits(table: PropertyTable, env: E, limits: Limits) -> Self {
        Self { table, env, limits }
    }

    pub fn table(&self) -> &PropertyTable {
        &self.table
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Fully expand the property `name`.
    ///
    /// # Errors
    ///
    /// - [`PropsError::PropertyNotFound`] if `name` is not in the table
    /// - [`PropsError::PlaceholderNotFound`] if a placeholder names neither a
    ///   property nor an environment variable
    /// - [`PropsError::CyclicProperty`] if a placeholder refers back to itself
    /// - [`PropsError::ExpansionLimit`] if expansion does not settle within
    ///   `Limits::max_substitutions` passes
    /// - [`PropsError::ValueTooLong`] if the value grows past
    ///   `Limits::max_value_len` bytes
    pub fn resolve(&self, name: &str) -> PropsResult<String> {
        self.resolve_with_default(name, None)
    }

    /// Like [`resolve`](Self::resolve), but returns `default` unexpanded when
    /// `name` is not in the table. Placeholder failures are still errors.
    pub fn resolve_or(&self, name: &str, default: &str) -> PropsResult<String> {
        self.resolve_with_default(name, Some(default))
    }

    /// Expand every property in the table, in name order.
    pub fn resolve_all(&self) -> PropsResult<BTreeMap<String, String>> {
        self.table
            .iter()
            .map(|(name, _)| self.resolve(name).map(|value| (name.to_string(), value)))
            .collect()
    }

    fn resolve_with_default(&self, name: &str, default: Option<&str>) -> PropsResult<String> {
        match self.table.get(name) {
            Some(raw) => self.expand(name, raw.to_string()),
            None => match default {
                Some(value) => Ok(value.to_string()),
                None => Err(PropsError::PropertyNotFound {
                    name: name.to_string(),
                    origin: self.table.origin().to_string(),
                }),
            },
        }
    }

    fn expand(&self, name: &str, mut value: String) -> PropsResult<String> {
        let mut passes = 0usize;
        let mut cycle_checked: HashSet<String> = HashSet::new();

        while let Some(ident) = first_placeholder(&value) {
            if passes >= self.limits.max_substitutions {
                return Err(PropsError::ExpansionLimit {
                    name: name.to_string(),
                    limit: self.limits.max_substitutions,
                });
            }
            passes += 1;

            let ident = ident.to_string();
            let replacement = self.lookup(&ident)?;

            if cycle_checked.insert(ident.clone()) {
                if let Some(chain) = self.find_cycle(&ident) {
                    return Err(PropsError::CyclicProperty { chain });
                }
            }

            tracing::trace!(property = name, placeholder = %ident, %replacement, "substituting");
            value = value.replace(&format!("$({ident})"), &replacement);
            if value.len() > self.limits.max_value_len {
                return Err(PropsError::ValueTooLong {
                    name: name.to_string(),
                    limit: self.limits.max_value_len,
                });
            }
        }

        Ok(value)
    }

    /// Value of a placeholder: the table's raw value, else the environment.
    fn lookup(&self, ident: &str) -> PropsResult<String> {
        self.raw_value(ident)
            .ok_or_else(|| PropsError::PlaceholderNotFound {
                name: ident.to_string(),
                origin: self.table.origin().to_string(),
            })
    }

    fn raw_value(&self, ident: &str) -> Option<String> {
        match self.table.get(ident) {
            Some(value) => Some(value.to_string()),
            None => self.env.var(ident),
        }
    }

    /// Search the reference graph for a chain leading from `start` back to
    /// itself. Names that cannot be looked up end their branch.
    fn find_cycle(&self, start: &str) -> Option<Vec<String>> {
        let mut path = vec![start.to_string()];
        let mut exhausted = HashSet::new();
        self.walk_references(start, start, &mut path, &mut exhausted)
    }

    fn walk_references(
        &self,
        start: &str,
        current: &str,
        path: &mut Vec<String>,
        exhausted: &mut HashSet<String>,
    ) -> Option<Vec<String>> {
        let value = self.raw_value(current)?;

        for ident in placeholders(&value) {
            if ident == start {
                let mut chain = path.clone();
                chain.push(ident.to_string());
                return Some(chain);
            }
            if exhausted.contains(ident) || path.iter().any(|p| p == ident) {
                continue;
            }

            path.push(ident.to_string());
            if let Some(chain) = self.walk_references(start, ident, path, exhausted) {
                return Some(chain);
            }
            path.pop();
            exhausted.insert(ident.to_string());
        }

        None
    }
}
