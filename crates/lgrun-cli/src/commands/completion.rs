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

//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write a completion script for `cmd` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use lgrun_cli::commands::generate_completion;
///
/// let mut cmd = Command::new("lgrun");
/// generate_completion(Shell::Bash, &mut cmd);
/// ```
pub fn generate_completion<G: Generator>(generator: G, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
}
