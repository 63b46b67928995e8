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

//! Property-file loading and `$(NAME)` macro resolution for lgrun.
//!
//! MSVC builds keep per-machine settings (interpreter locations, DLL
//! directories) as user macros in a `.props` file. This crate reads those
//! macros into a [`PropertyTable`] and expands references between them with
//! a [`Resolver`], falling back to environment variables for names the file
//! does not define.
//!
//! # Example
//!
//! ```
//! use lgrun_core::{PropertyTable, Resolver};
//! use std::collections::HashMap;
//!
//! let props = "<PYTHON3_EXE>C:\\Python39\\python.exe</PYTHON3_EXE>\n\
//!              <LG_DLLPATH>$(VCPKG_ROOT)\\bin</LG_DLLPATH>\n";
//! let table = PropertyTable::parse(props, "Local.props").unwrap();
//!
//! let mut env = HashMap::new();
//! env.insert("VCPKG_ROOT".to_string(), "D:\\vcpkg".to_string());
//!
//! let resolver = Resolver::new(table, env);
//! assert_eq!(resolver.resolve("LG_DLLPATH").unwrap(), "D:\\vcpkg\\bin");
//! ```
//!
//! The process environment is only read through the [`Environment`] trait;
//! [`EnvOverlay`] collects assignments meant for a child process without
//! changing the current one.

mod env;
mod error;
mod limits;
mod resolver;
mod table;

pub use env::{EnvOverlay, Environment, ProcessEnvironment};
pub use error::{PropsError, PropsResult};
pub use limits::{Limits, MAX_FILE_SIZE_ENV};
pub use resolver::Resolver;
pub use table::PropertyTable;
