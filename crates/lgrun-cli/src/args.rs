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

//! Positional launcher arguments: `[flag] OUTDIR [SCRIPT [ARGS...]]`.

use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Launcher arguments after option parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchArgs {
    /// Interpreter flag (`-u`, `-3`, ...) passed before the script.
    pub interpreter_flag: Option<String>,
    /// Output directory relative to the run directory, e.g. `x64\Debug\Python3`.
    pub outdir: String,
    /// `None` selects the default script; `Some("")` starts the interpreter
    /// interactively.
    pub script: Option<String>,
    /// Arguments passed to the script.
    pub script_args: Vec<String>,
}

impl LaunchArgs {
    /// Split the positional arguments.
    ///
    /// A leading argument starting with `-` is the interpreter flag. The next
    /// argument is the output directory. The one after that is the script
    /// unless it starts with `-`, in which case the default script runs and
    /// the argument is the first script argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use lgrun_cli::args::LaunchArgs;
    ///
    /// let args = LaunchArgs::parse(["-u", "x64/Debug/Python3", "example.py", "-v"]).unwrap();
    /// assert_eq!(args.interpreter_flag.as_deref(), Some("-u"));
    /// assert_eq!(args.outdir, "x64/Debug/Python3");
    /// assert_eq!(args.script.as_deref(), Some("example.py"));
    /// assert_eq!(args.script_args, vec!["-v"]);
    /// ```
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into).peekable();

        let interpreter_flag = args.next_if(|arg| arg.starts_with('-'));

        let outdir = args
            .next()
            .filter(|arg| !arg.is_empty())
            .ok_or_else(|| CliError::usage("Missing argument"))?;

        let script = args.next_if(|arg| !arg.starts_with('-'));
        let script_args = args.collect();

        Ok(Self {
            interpreter_flag,
            outdir,
            script,
            script_args,
        })
    }
}

/// A located build output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutDir {
    /// Full path (run directory joined with the relative output directory).
    pub path: PathBuf,
    /// Everything before the last separator, e.g. `msvc\x64\Debug`.
    pub config: String,
    /// The interpreter tag, e.g. `Python3`.
    pub tag: String,
}

impl OutDir {
    /// Join `relative` to `run_dir`, check that the result is a directory and
    /// split it into configuration directory and interpreter tag.
    pub fn locate(run_dir: &Path, relative: &str) -> Result<Self, CliError> {
        let path = run_dir.join(relative);
        if !path.is_dir() {
            return Err(CliError::usage(format!(
                "Directory \"{}\" doesn't exist",
                path.display()
            )));
        }

        let text = path.to_str().ok_or_else(|| {
            CliError::usage(format!("Invalid output directory \"{}\"", path.display()))
        })?;
        let (config, tag) = split_outdir(text)?;

        Ok(Self {
            config: config.to_string(),
            tag: tag.to_string(),
            path,
        })
    }
}

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Split an output directory at its last `\` or `/` into the configuration
/// part and the interpreter tag. Trailing separators are ignored.
pub fn split_outdir(path: &str) -> Result<(&str, &str), CliError> {
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(index) => Ok((&trimmed[..index], &trimmed[index + 1..])),
        None => Err(CliError::usage(format!(
            "Invalid output directory \"{}\"",
            path
        ))),
    }
}
