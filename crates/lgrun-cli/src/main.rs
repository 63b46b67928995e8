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

//! lgrun command line interface

use clap::Parser;
use lgrun_cli::cli::{Cli, USAGE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log to stderr. `--verbose` forces debug output for lgrun's crates;
/// otherwise `RUST_LOG` is honored, falling back to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lgrun_cli=debug,lgrun_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lgrun_cli=warn,lgrun_core=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.execute() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            println!("Error: {}", e);
            println!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}
