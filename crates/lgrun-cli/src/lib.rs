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

//! lgrun library for command-line parsing and script launching.
//!
//! `lgrun` runs Link Grammar's Python test and example scripts against the
//! binaries of an MSVC build tree. It reads the interpreter location for the
//! selected build from the user macros in `Local.props`, then starts the
//! interpreter with:
//!
//! - `PATH` prefixed with the build configuration directory and `LG_DLLPATH`
//! - `PYTHONPATH` set to the Python bindings and the build output directory
//! - `LINK_GRAMMAR_DATA` pointing at the data directory
//!
//! The variables are set for the interpreter process only.
//!
//! # Example
//!
//! ```no_run
//! use lgrun_cli::args::LaunchArgs;
//! use lgrun_cli::commands::{execute, plan};
//! use lgrun_cli::config::LaunchConfig;
//! use lgrun_core::{Limits, ProcessEnvironment, PropertyTable};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), lgrun_cli::error::CliError> {
//! let run_dir = Path::new("msvc");
//! let table = PropertyTable::load(run_dir.join("Local.props"))?;
//! let args = LaunchArgs::parse(["x64\\Debug\\Python3", "example.py"])?;
//!
//! let plan = plan(&args, run_dir, table, ProcessEnvironment, &LaunchConfig::default(), Limits::default())?;
//! println!("{}", plan.command_line());
//! let status = execute(&plan)?;
//! # let _ = status;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
