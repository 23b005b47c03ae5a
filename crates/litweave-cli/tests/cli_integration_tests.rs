// Litweave - A Literate Programming Toolchain
//
// Copyright (c) 2026 Litweave contributors.
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

//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn litweave_cmd() -> Command {
    Command::cargo_bin("litweave").expect("Failed to find litweave binary")
}

// Test helper: a temp dir holding the given document as book.mw
fn document_dir(content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("book.mw"), content)
        .expect("Failed to write temp document");
    dir
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    litweave_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("literate programming toolchain"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    litweave_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("litweave"));
}

#[test]
fn test_no_subcommand_fails() {
    litweave_cmd().assert().failure();
}

// ===== Tangle Command Tests =====

#[test]
fn test_tangle_to_output_file() {
    let dir = document_dir("<<*>>=hello <<who>>>>@<<\n<<who>>=world>>@<<");
    let out = dir.path().join("out.txt");

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    assert_eq!(fs::read_to_string(out).unwrap(), "hello world");
}

#[test]
fn test_tangle_alternative_root_defaults_output_name() {
    let dir = document_dir("<<Makefile>>=all: build\n>>@<<");

    litweave_cmd()
        .current_dir(dir.path())
        .arg("tangle")
        .arg("book.mw")
        .arg("-r")
        .arg("Makefile")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("Makefile")).unwrap(),
        "all: build\n"
    );
}

#[test]
fn test_tangle_without_output_or_root_fails() {
    let dir = document_dir("<<*>>=x>>@<<");

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "either the output file or an alternative root",
        ));
}

#[test]
fn test_tangle_missing_root_fails() {
    let dir = document_dir("<<a>>=x>>@<<");
    let out = dir.path().join("out.txt");

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in document"));
}

#[test]
fn test_tangle_missing_input_fails() {
    litweave_cmd()
        .arg("tangle")
        .arg("/nonexistent/book.mw")
        .arg("-o")
        .arg("/tmp/never-written")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open"));
}

#[test]
fn test_tangle_unterminated_macro_reports_position() {
    let dir = document_dir("<<*>>=\nnever closed");
    let out = dir.path().join("out.txt");

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a macro end."));
}

#[test]
fn test_tangle_list_files_sorted() {
    let dir = document_dir(
        "<<FILE:zeta.c>>=z>>@<<\n<<FILE:alpha.c>>=a>>@<<\n<<other>>=o>>@<<",
    );

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .arg("--list-files")
        .assert()
        .success()
        .stdout(predicate::eq("alpha.c\nzeta.c\n"));
}

#[test]
fn test_tangle_follows_includes_from_document_directory() {
    let dir = document_dir("#[include=lib.mw]\n<<*>>=<<helper>>>>@<<");
    fs::write(dir.path().join("lib.mw"), "<<helper>>=included!>>@<<").unwrap();
    let out = dir.path().join("out.txt");

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), "included!");
}

#[test]
fn test_tangle_include_search_path_flag() {
    let lib_dir = tempfile::tempdir().unwrap();
    fs::write(lib_dir.path().join("lib.mw"), "<<helper>>=found>>@<<").unwrap();

    let dir = document_dir("#[include=lib.mw]\n<<*>>=<<helper>>>>@<<");
    let out = dir.path().join("out.txt");

    litweave_cmd()
        .arg("tangle")
        .arg(dir.path().join("book.mw"))
        .arg("-I")
        .arg(lib_dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), "found");
}

// ===== Trace Command Tests =====

#[test]
fn test_trace_event_stream() {
    let dir = document_dir("<<*>>=<<x>>>>@<<");

    litweave_cmd()
        .arg("trace")
        .arg(dir.path().join("book.mw"))
        .assert()
        .success()
        .stdout(predicate::eq(
            "begin macro type root value *\n    macro ref x\nend macro.\n",
        ));
}

#[test]
fn test_trace_substitution_and_directive() {
    let dir = document_dir("#[language=c]\n%[color=blue]%");

    litweave_cmd()
        .arg("trace")
        .arg(dir.path().join("book.mw"))
        .assert()
        .success()
        .stdout(predicate::str::contains("directive type language value c"))
        .stdout(predicate::str::contains(
            "substitution type assignment value color = blue",
        ));
}

#[test]
fn test_trace_malformed_document_fails() {
    let dir = document_dir(">>@<<");

    litweave_cmd()
        .arg("trace")
        .arg(dir.path().join("book.mw"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Macro end with no macro begin."));
}

// ===== Extract Command Tests =====

#[test]
fn test_extract_section_assignments() {
    let dir = document_dir(
        "<<SECTION:config>>=%[name=widget]%%[color=blue]%>>@<<\n\
         <<other>>=%[ignored=yes]%>>@<<",
    );

    litweave_cmd()
        .current_dir(dir.path())
        .arg("extract")
        .arg("book.mw")
        .arg("-S")
        .arg("config")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("config.input")).unwrap(),
        "name=widget\ncolor=blue\n"
    );
}

#[test]
fn test_extract_output_override() {
    let dir = document_dir("<<SECTION:config>>=%[a=1]%>>@<<");
    let out = dir.path().join("custom.kv");

    litweave_cmd()
        .arg("extract")
        .arg(dir.path().join("book.mw"))
        .arg("-S")
        .arg("config")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), "a=1\n");
}

#[test]
fn test_extract_plain_lookups_are_ignored() {
    let dir = document_dir("<<SECTION:config>>=%[just-a-key]%%[a=1]%>>@<<");
    let out = dir.path().join("out.kv");

    litweave_cmd()
        .arg("extract")
        .arg(dir.path().join("book.mw"))
        .arg("-S")
        .arg("config")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), "a=1\n");
}

#[test]
fn test_extract_without_section_fails() {
    let dir = document_dir("<<SECTION:config>>=%[a=1]%>>@<<");

    litweave_cmd()
        .arg("extract")
        .arg(dir.path().join("book.mw"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("section name must be provided"));
}

#[test]
fn test_extract_list_sections() {
    let dir = document_dir(
        "<<SECTION:beta>>=x>>@<<\n<<SECTION:alpha>>=y>>@<<\n<<plain>>=z>>@<<",
    );

    litweave_cmd()
        .arg("extract")
        .arg(dir.path().join("book.mw"))
        .arg("--list-sections")
        .assert()
        .success()
        .stdout(predicate::eq("alpha\nbeta\n"));
}
