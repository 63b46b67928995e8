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

//! Run command - resolve the interpreter and launch a script

use crate::args::{LaunchArgs, OutDir};
use crate::config::{LaunchConfig, PATH_LIST_SEPARATOR};
use crate::error::CliError;
use lgrun_core::{EnvOverlay, Environment, Limits, PropertyTable, Resolver};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// A fully resolved interpreter invocation.
///
/// Building a plan has no side effects beyond reading the file system; the
/// environment assignments are applied only to the child when the plan is
/// executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Interpreter executable.
    pub program: String,
    /// Interpreter flag, script and script arguments, in order.
    pub args: Vec<String>,
    /// Variables set for the child, sorted by name.
    pub env: Vec<(String, String)>,
}

impl LaunchPlan {
    /// Value the child will see for an assigned variable.
    pub fn env_var(&self, name: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The command line as shown to the user.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).envs(self.env.iter().map(|(k, v)| (k, v)));
        command
    }
}

/// Start an environment overlay with the data-directory variable set, so
/// property files can refer to it.
pub fn launch_environment<E: Environment>(
    base: E,
    run_dir: &Path,
    config: &LaunchConfig,
) -> EnvOverlay<E> {
    let mut env = EnvOverlay::new(base);
    env.set(
        config.data_var.as_str(),
        run_dir.join(&config.data_dir).display().to_string(),
    );
    env
}

fn join_path_list<'a>(entries: impl IntoIterator<Item = &'a str>) -> String {
    entries
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .collect::<Vec<_>>()
        .join(PATH_LIST_SEPARATOR)
}

/// Resolve where the script lives. Names starting with `.` or a path
/// separator, and absolute paths, are used as given; bare names are looked
/// up in the script directory.
fn script_path(script: &str, run_dir: &Path, config: &LaunchConfig) -> String {
    if script.starts_with(&['.', '\\', '/'][..]) || Path::new(script).is_absolute() {
        script.to_string()
    } else {
        run_dir
            .join(&config.script_dir)
            .join(script)
            .display()
            .to_string()
    }
}

/// Build the launch plan for `args`.
///
/// # Errors
///
/// Returns `Err` if:
/// - The output directory does not exist or has no interpreter tag
/// - The `<TAG>_EXE` or DLL path property cannot be resolved
pub fn plan<E: Environment>(
    args: &LaunchArgs,
    run_dir: &Path,
    table: PropertyTable,
    base_env: E,
    config: &LaunchConfig,
    limits: Limits,
) -> Result<LaunchPlan, CliError> {
    let mut env = launch_environment(base_env, run_dir, config);

    let outdir = OutDir::locate(run_dir, &args.outdir)?;
    debug!(config = %outdir.config, tag = %outdir.tag, "output directory");

    let (program, dll_path) = {
        let resolver = Resolver::with_limits(table, &env, limits);
        let program = resolver.resolve(&config.exe_property(&outdir.tag))?;
        let dll_path = resolver.resolve(&config.dll_path_property)?;
        (program, dll_path)
    };
    info!(%program, %dll_path, "resolved interpreter");

    let inherited_path = env.var("PATH").unwrap_or_default();
    let path = join_path_list([
        outdir.config.as_str(),
        dll_path.as_str(),
        inherited_path.as_str(),
    ]);
    env.set("PATH", path);

    let module_dir = run_dir.join(&config.module_dir).display().to_string();
    let outdir_path = outdir.path.display().to_string();
    env.set(
        "PYTHONPATH",
        join_path_list([module_dir.as_str(), outdir_path.as_str()]),
    );

    let script = args.script.as_deref().unwrap_or(&config.default_script);

    let mut launch_args = Vec::new();
    launch_args.extend(args.interpreter_flag.iter().cloned());
    if !script.is_empty() {
        launch_args.push(script_path(script, run_dir, config));
    }
    launch_args.extend(args.script_args.iter().cloned());

    Ok(LaunchPlan {
        program,
        args: launch_args,
        env: env
            .assignments()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    })
}

/// Run the plan and wait for the interpreter to exit.
///
/// Returns the child's exit code; a child terminated without one (killed by
/// a signal) reports 1.
pub fn execute(plan: &LaunchPlan) -> Result<i32, CliError> {
    let status = plan
        .to_command()
        .status()
        .map_err(|e| CliError::spawn(&plan.program, e))?;
    debug!(?status, "interpreter exited");
    Ok(status.code().unwrap_or(1))
}
