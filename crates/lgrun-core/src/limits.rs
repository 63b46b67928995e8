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

//! Resource limits for property loading and expansion.

/// Environment variable that overrides [`Limits::max_file_size`].
pub const MAX_FILE_SIZE_ENV: &str = "LGRUN_MAX_PROPS_SIZE";

/// Configurable bounds on the work a property file can cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum property file size in bytes (default: 16MB).
    pub max_file_size: u64,
    /// Maximum substitution passes while expanding a single property
    /// (default: 10k).
    pub max_substitutions: usize,
    /// Maximum length in bytes of an expanded value (default: 1MB).
    pub max_value_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 16 * 1024 * 1024, // 16MB
            max_substitutions: 10_000,
            max_value_len: 1024 * 1024, // 1MB
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: u64::MAX,
            max_substitutions: usize::MAX,
            max_value_len: usize::MAX,
        }
    }

    /// Default limits, with `max_file_size` taken from `LGRUN_MAX_PROPS_SIZE`
    /// when it holds a valid byte count.
    pub fn from_env() -> Self {
        let mut limits = Self::default();
        if let Some(size) = std::env::var(MAX_FILE_SIZE_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            limits.max_file_size = size;
        }
        limits
    }
}
