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

//! Structured error types for the lgrun CLI.
//!
//! Every launcher operation returns `Result<T, CliError>`. All variants are
//! fatal: `main` prints the message with the usage text and exits with
//! status 1.

use lgrun_core::PropsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lgrun operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Missing or malformed launcher arguments, or an output directory that
    /// does not exist.
    ///
    /// `main` prints the usage text after this message.
    #[error("{0}")]
    Usage(String),

    /// Loading the property file or expanding a property failed.
    #[error(transparent)]
    Props(#[from] PropsError),

    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The interpreter could not be started.
    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create a usage error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lgrun_cli::error::CliError;
    ///
    /// let err = CliError::usage("Missing argument");
    /// assert_eq!(err.to_string(), "Missing argument");
    /// ```
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a spawn error for `program`.
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            message: source.to_string(),
        }
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
