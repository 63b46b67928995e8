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

//! Launcher command implementations

mod completion;
mod list;
mod run;

pub use completion::generate_completion;
pub use list::{list, render_json, render_text, ListFormat};
pub use run::{execute, launch_environment, plan, LaunchPlan};

use crate::error::CliError;
use std::io::{self, Write};

/// Write rendered output to stdout.
pub fn write_stdout(content: &str) -> Result<(), CliError> {
    io::stdout()
        .write_all(content.as_bytes())
        .map_err(|e| CliError::io_error("<stdout>", e))
}
