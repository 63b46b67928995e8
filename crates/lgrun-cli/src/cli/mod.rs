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

//! Command-line definition and dispatch.
//!
//! Only long options are defined, including `--help` and `--version`, so
//! interpreter flags such as `-u`, `-B`, `-V` or `-h` reach the positional
//! launcher arguments untouched.

use crate::args::LaunchArgs;
use crate::commands::{self, ListFormat};
use crate::config::LaunchConfig;
use crate::error::CliError;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use lgrun_core::{Limits, ProcessEnvironment, PropertyTable, Resolver};
use std::path::PathBuf;

/// Usage line printed after every error.
pub const USAGE: &str = "Usage: lgrun [OPTIONS] [python_flag] PYTHON_OUTDIR [script.py] [script_args]\n\
                         \tOUTDIR is in the format of \"x64\\Debug\\Python2\"";

/// lgrun - run Link Grammar Python scripts against an MSVC build tree
///
/// Reads the interpreter location from `Local.props`, points `PATH` and
/// `PYTHONPATH` at the build output, and runs the script.
///
/// # Examples
///
/// ```bash
/// # Run bindings/python-examples/tests.py with the Python3 build
/// lgrun x64\Debug\Python3
///
/// # Run example.py unbuffered
/// lgrun -u x64\Debug\Python3 example.py
///
/// # Interactive interpreter with the bindings importable
/// lgrun x64\Debug\Python3 ""
/// ```
#[derive(Parser, Debug)]
#[command(name = "lgrun")]
#[command(author, version, about = "lgrun - run Link Grammar Python scripts against an MSVC build tree", long_about = None)]
#[command(override_usage = "lgrun [OPTIONS] [-FLAG] OUTDIR [SCRIPT [ARGS]...]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Directory holding the property file; relative paths start here
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub run_dir: PathBuf,

    /// Property file (defaults to RUN_DIR/Local.props)
    #[arg(long, value_name = "FILE")]
    pub props: Option<PathBuf>,

    /// Print the command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// List every property with its expanded value and exit
    #[arg(long)]
    pub list_props: bool,

    /// Output format for --list-props
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Interpreter flag, output directory, script and script arguments
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub launch: Vec<String>,
}

impl Cli {
    /// Property file location: `--props`, or the configured file name inside
    /// the run directory.
    pub fn props_path(&self, config: &LaunchConfig) -> PathBuf {
        self.props
            .clone()
            .unwrap_or_else(|| self.run_dir.join(&config.props_file_name))
    }

    /// Execute the requested action.
    ///
    /// # Returns
    ///
    /// The process exit code: the interpreter's own status after a launch,
    /// 0 for the other actions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The property file is missing, malformed or empty
    /// - The launcher arguments are missing or the output directory is invalid
    /// - A property cannot be resolved
    /// - The interpreter cannot be started
    pub fn execute(self) -> Result<i32, CliError> {
        if let Some(shell) = self.completions {
            commands::generate_completion(shell, &mut Cli::command());
            return Ok(0);
        }

        let config = LaunchConfig::default();
        let limits = Limits::from_env();
        let table = PropertyTable::load_with_limits(self.props_path(&config), &limits)?;

        if self.list_props {
            let env = commands::launch_environment(ProcessEnvironment, &self.run_dir, &config);
            let resolver = Resolver::with_limits(table, &env, limits);
            commands::list(&resolver, self.format)?;
            return Ok(0);
        }

        let args = LaunchArgs::parse(self.launch)?;
        let plan = commands::plan(&args, &self.run_dir, table, ProcessEnvironment, &config, limits)?;

        println!("PYTHONPATH={}", plan.env_var("PYTHONPATH").unwrap_or_default());
        println!("Issuing command: {}", plan.command_line());

        if self.dry_run {
            return Ok(0);
        }
        commands::execute(&plan)
    }
}
