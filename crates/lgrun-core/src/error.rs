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

//! Error types for property loading and macro resolution.

use std::path::PathBuf;
use thiserror::Error;

/// An error raised while loading a property file or expanding a property.
///
/// Every variant is fatal for the launcher: there is no partial table and no
/// partially expanded value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// The property file could not be opened or read.
    #[error("cannot read property file '{path}': {message}")]
    Load {
        /// Path of the property file.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// The property file is larger than [`Limits::max_file_size`](crate::Limits).
    #[error("property file '{path}' is too large ({actual} bytes, maximum {max} bytes)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
    },

    /// A line matched the declaration pattern without yielding both a name
    /// and a value.
    #[error("bad line {line_number} in \"{origin}\": {line}")]
    MalformedLine {
        /// File name (or other label) of the property source.
        origin: String,
        /// 1-based line number.
        line_number: usize,
        /// The offending line, verbatim.
        line: String,
    },

    /// The property file contained no `<Name>Value<` declarations at all.
    #[error("no properties found in {origin}")]
    NoPropertiesFound { origin: String },

    /// A property requested by name is not in the table.
    #[error("property \"{name}\" not found in {origin}")]
    PropertyNotFound { name: String, origin: String },

    /// A `$(NAME)` placeholder names neither a property nor an environment
    /// variable.
    #[error("property \"{name}\" not found in \"{origin}\" and also not in the environment")]
    PlaceholderNotFound { name: String, origin: String },

    /// Expanding a placeholder would reintroduce itself.
    #[error("cyclic property reference: {}", .chain.join(" -> "))]
    CyclicProperty {
        /// The reference chain, starting and ending with the same name.
        chain: Vec<String>,
    },

    /// Expansion needed more substitution passes than allowed.
    #[error("expansion of property \"{name}\" exceeded {limit} substitutions")]
    ExpansionLimit { name: String, limit: usize },

    /// The expanded value grew past [`Limits::max_value_len`](crate::Limits).
    #[error("expansion of property \"{name}\" exceeded {limit} bytes")]
    ValueTooLong { name: String, limit: usize },
}

impl PropsError {
    /// Create a load error from an I/O failure.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// The property (or placeholder) name this error is about, if any.
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Self::PropertyNotFound { name, .. }
            | Self::PlaceholderNotFound { name, .. }
            | Self::ExpansionLimit { name, .. }
            | Self::ValueTooLong { name, .. } => Some(name),
            Self::CyclicProperty { chain } => chain.first().map(String::as_str),
            _ => None,
        }
    }
}

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;
