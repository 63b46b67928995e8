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

//! Fixed names and directory layout of the build tree the launcher serves.

use std::path::PathBuf;

/// Separator between entries of `PATH`-like variables on this platform.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: &str = ":";

/// Names and relative locations used to compose a launch.
///
/// Directories are relative to the run directory (the directory that holds
/// the property file). The defaults describe the Link Grammar MSVC tree:
///
/// ```text
/// <root>/msvc/Local.props              run directory
/// <root>/bindings/python               Python modules
/// <root>/bindings/python-examples      test and example scripts
/// <root>/data                          dictionaries (LINK_GRAMMAR_DATA)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Property file name inside the run directory.
    pub props_file_name: String,
    /// Directory that bare script names are looked up in.
    pub script_dir: PathBuf,
    /// Script run when none is given.
    pub default_script: String,
    /// Directory holding the Python binding modules.
    pub module_dir: PathBuf,
    /// Variable that points the library at its data directory.
    pub data_var: String,
    /// Value for `data_var`.
    pub data_dir: PathBuf,
    /// Property naming the directory of the native DLLs.
    pub dll_path_property: String,
    /// Suffix appended to the uppercased interpreter tag to name the
    /// interpreter property (`PYTHON3` + `_EXE`).
    pub exe_property_suffix: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            props_file_name: "Local.props".to_string(),
            script_dir: PathBuf::from("..").join("bindings").join("python-examples"),
            default_script: "tests.py".to_string(),
            module_dir: PathBuf::from("..").join("bindings").join("python"),
            data_var: "LINK_GRAMMAR_DATA".to_string(),
            data_dir: PathBuf::from(".."),
            dll_path_property: "LG_DLLPATH".to_string(),
            exe_property_suffix: "_EXE".to_string(),
        }
    }
}

impl LaunchConfig {
    /// Name of the property holding the interpreter for `tag`.
    pub fn exe_property(&self, tag: &str) -> String {
        format!("{}{}", tag.to_uppercase(), self.exe_property_suffix)
    }
}
