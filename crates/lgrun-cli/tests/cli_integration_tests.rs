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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Test helper to create an lgrun command
fn lgrun_cmd() -> Command {
    Command::cargo_bin("lgrun").expect("Failed to find lgrun binary")
}

/// A throwaway run directory with `Local.props` and an `x64/Debug/Python3`
/// output directory.
struct BuildTree {
    dir: TempDir,
}

impl BuildTree {
    fn new(props: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("Local.props"), props).expect("Failed to write props");
        fs::create_dir_all(dir.path().join("x64").join("Debug").join("Python3"))
            .expect("Failed to create output dir");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = lgrun_cmd();
        cmd.arg("--run-dir").arg(self.path());
        cmd
    }
}

const PROPS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup Label="UserMacros">
    <PY_ROOT>/opt/python3</PY_ROOT>
    <PYTHON3_EXE>$(PY_ROOT)/bin/python3</PYTHON3_EXE>
    <LG_DLLPATH>$(LINK_GRAMMAR_DATA)/dll</LG_DLLPATH>
  </PropertyGroup>
</Project>
"#;

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    lgrun_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lgrun"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    lgrun_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lgrun"));
}

#[test]
fn test_completions_bash() {
    lgrun_cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lgrun"));
}

// ===== Property File Errors =====

#[test]
fn test_missing_props_file() {
    let dir = tempfile::tempdir().unwrap();
    lgrun_cmd()
        .arg("--run-dir")
        .arg(dir.path())
        .arg("x64/Debug/Python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Local.props"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_props_without_declarations() {
    let tree = BuildTree::new("<Project>\n</Project>\n");
    tree.cmd()
        .arg("x64/Debug/Python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no properties found"));
}

#[test]
fn test_props_too_large() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .env("LGRUN_MAX_PROPS_SIZE", "10")
        .arg("x64/Debug/Python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("too large"));
}

#[test]
fn test_explicit_props_path() {
    let tree = BuildTree::new("<Project>\n</Project>\n");
    let props = tree.file("Other.props", PROPS);
    tree.cmd()
        .arg("--props")
        .arg(&props)
        .arg("--dry-run")
        .arg("x64/Debug/Python3")
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/python3/bin/python3"));
}

// ===== Argument Errors =====

#[test]
fn test_missing_outdir_argument() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing argument"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_flag_without_outdir() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .arg("-u")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing argument"));
}

#[test]
fn test_nonexistent_outdir() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .arg("x64/Release/Python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_unknown_interpreter_tag() {
    let tree = BuildTree::new(PROPS);
    fs::create_dir_all(tree.path().join("x64").join("Debug").join("Python2")).unwrap();
    tree.cmd()
        .arg("x64/Debug/Python2")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("PYTHON2_EXE"));
}

#[test]
fn test_unresolvable_placeholder() {
    let tree = BuildTree::new(
        "<PYTHON3_EXE>python3</PYTHON3_EXE>\n<LG_DLLPATH>$(LGRUN_TEST_UNSET_DIR)</LG_DLLPATH>\n",
    );
    tree.cmd()
        .env_remove("LGRUN_TEST_UNSET_DIR")
        .arg("x64/Debug/Python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("LGRUN_TEST_UNSET_DIR"))
        .stdout(predicate::str::contains("not in the environment"));
}

#[test]
fn test_placeholder_from_environment() {
    let tree = BuildTree::new(
        "<PYTHON3_EXE>$(LGRUN_TEST_PY)/python3</PYTHON3_EXE>\n<LG_DLLPATH>dll</LG_DLLPATH>\n",
    );
    tree.cmd()
        .env("LGRUN_TEST_PY", "/from/env")
        .args(["--dry-run", "x64/Debug/Python3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issuing command: /from/env/python3"));
}

#[test]
fn test_cyclic_properties() {
    let tree = BuildTree::new(
        "<PYTHON3_EXE>$(A)</PYTHON3_EXE>\n<A>$(B)</A>\n<B>$(A)</B>\n<LG_DLLPATH>x</LG_DLLPATH>\n",
    );
    tree.cmd()
        .arg("x64/Debug/Python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cyclic property reference"));
}

// ===== Logging =====

#[test]
fn test_rust_log_raises_log_level() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .env("RUST_LOG", "lgrun_core=debug")
        .args(["--dry-run", "x64/Debug/Python3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded property file"));
}

#[test]
fn test_quiet_by_default() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .env_remove("RUST_LOG")
        .args(["--dry-run", "x64/Debug/Python3"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_enables_debug_logging() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .env_remove("RUST_LOG")
        .args(["--verbose", "--dry-run", "x64/Debug/Python3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved interpreter"));
}

// ===== Dry Run =====

#[test]
fn test_dry_run_default_script() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .args(["--dry-run", "x64/Debug/Python3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PYTHONPATH="))
        .stdout(predicate::str::contains("Issuing command: /opt/python3/bin/python3"))
        .stdout(predicate::str::contains("tests.py"));
}

#[test]
fn test_dry_run_flag_script_and_args() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .args(["--dry-run", "-B", "x64/Debug/Python3", "example.py", "-v", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/python3/bin/python3 -B "))
        .stdout(predicate::str::contains("example.py -v extra"));
}

#[test]
fn test_dry_run_short_version_flag_goes_to_interpreter() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .args(["--dry-run", "-V", "x64/Debug/Python3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issuing command: /opt/python3/bin/python3 -V "));
}

#[test]
fn test_dry_run_interactive() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .args(["--dry-run", "x64/Debug/Python3", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("tests.py").not());
}

// ===== Property Listing =====

#[test]
fn test_list_props_text() {
    let tree = BuildTree::new(PROPS);
    tree.cmd()
        .arg("--list-props")
        .assert()
        .success()
        .stdout(predicate::str::contains("PYTHON3_EXE"))
        .stdout(predicate::str::contains("/opt/python3/bin/python3"));
}

#[test]
fn test_list_props_json() {
    let tree = BuildTree::new(PROPS);
    let output = tree
        .cmd()
        .args(["--list-props", "--format", "json"])
        .output()
        .expect("Failed to run lgrun");
    assert!(output.status.success());

    let doc: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(
        doc["properties"]["PYTHON3_EXE"]["value"],
        "/opt/python3/bin/python3"
    );
    assert_eq!(doc["properties"]["PYTHON3_EXE"]["raw"], "$(PY_ROOT)/bin/python3");
    let dll = doc["properties"]["LG_DLLPATH"]["value"].as_str().unwrap();
    assert!(dll.ends_with("/dll"));
    assert!(!dll.contains("$("));
}

// ===== Launching =====

#[cfg(unix)]
mod launch {
    use super::*;

    fn sh_tree() -> BuildTree {
        BuildTree::new("<PYTHON3_EXE>/bin/sh</PYTHON3_EXE>\n<LG_DLLPATH>/opt/lg/dll</LG_DLLPATH>\n")
    }

    #[test]
    fn test_child_exit_code_propagated() {
        let tree = sh_tree();
        let script = tree.file("probe.sh", "exit 3\n");
        tree.cmd()
            .arg("x64/Debug/Python3")
            .arg(&script)
            .assert()
            .code(3)
            .stdout(predicate::str::contains("Issuing command: /bin/sh"));
    }

    #[test]
    fn test_child_success() {
        let tree = sh_tree();
        let script = tree.file("ok.sh", "exit 0\n");
        tree.cmd()
            .arg("x64/Debug/Python3")
            .arg(&script)
            .assert()
            .success();
    }

    #[test]
    fn test_child_environment() {
        let tree = sh_tree();
        let script = tree.file(
            "env.sh",
            "echo \"DATA=$LINK_GRAMMAR_DATA\"\necho \"PATH=$PATH\"\necho \"ARGS=$*\"\n",
        );
        let data = tree.path().join("..").display().to_string();
        let config = tree.path().join("x64").join("Debug").display().to_string();

        tree.cmd()
            .arg("x64/Debug/Python3")
            .arg(&script)
            .args(["one", "two"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("DATA={}", data)))
            .stdout(predicate::str::contains(format!("PATH={}:/opt/lg/dll:", config)))
            .stdout(predicate::str::contains("ARGS=one two"));
    }

    #[test]
    fn test_missing_interpreter() {
        let tree = BuildTree::new(
            "<PYTHON3_EXE>/nonexistent/python3</PYTHON3_EXE>\n<LG_DLLPATH>dll</LG_DLLPATH>\n",
        );
        tree.cmd()
            .arg("x64/Debug/Python3")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("failed to run '/nonexistent/python3'"));
    }
}
