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

//! Environment variable access.
//!
//! Placeholder expansion falls back to environment variables, and the
//! launcher prepares variables for the child process. Both go through the
//! [`Environment`] trait so they can run against a fixed map in tests and
//! never have to mutate the real process environment.

use std::collections::{BTreeMap, HashMap};

/// Read-only view of a set of environment variables.
pub trait Environment {
    /// Look up a variable. Returns `None` when it is unset (or not valid
    /// Unicode, for the process environment).
    fn var(&self, name: &str) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An environment layered over a base environment.
///
/// Assignments made with [`set`](Self::set) shadow the base and are kept
/// separately, so they can be handed to a child process with
/// [`assignments`](Self::assignments) while the base stays untouched.
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay<E> {
    base: E,
    assignments: BTreeMap<String, String>,
}

impl<E: Environment> EnvOverlay<E> {
    pub fn new(base: E) -> Self {
        Self {
            base,
            assignments: BTreeMap::new(),
        }
    }

    /// Assign a variable, replacing any earlier assignment.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        tracing::debug!(%name, %value, "environment assignment");
        self.assignments.insert(name, value);
    }

    /// Variables assigned on top of the base, sorted by name.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn base(&self) -> &E {
        &self.base
    }
}

impl<E: Environment> Environment for EnvOverlay<E> {
    fn var(&self, name: &str) -> Option<String> {
        self.assignments
            .get(name)
            .cloned()
            .or_else(|| self.base.var(name))
    }
}
