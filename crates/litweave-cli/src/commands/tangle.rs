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

//! Tangle command - expand a document's root macro into source code

use std::collections::BTreeSet;
use std::path::PathBuf;

use colored::Colorize;
use litweave_core::{EventSink, MacroCollector, MacroKind, Span, WeaveResult};

use super::{run_document, write_file};

/// Tangle a document: collect its macros and expand one root.
///
/// The root macro defaults to `*`. The output path defaults to the
/// root macro's name, so at least one of `output` and `root` must be
/// given.
///
/// # Arguments
///
/// * `file` - Path to the input document
/// * `output` - Output file path override
/// * `root` - Root macro name override
/// * `includes` - Extra include search directories
///
/// # Errors
///
/// Returns `Err` if neither `output` nor `root` is given, the document
/// cannot be read or is malformed, the root macro is not defined, or
/// the output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use litweave_cli::commands::tangle;
///
/// # fn main() -> Result<(), String> {
/// // Expand `*` into main.c
/// tangle("book.mw", Some("main.c"), None, &[])?;
///
/// // Expand the `Makefile` macro into a file named after it
/// tangle("book.mw", None, Some("Makefile"), &[])?;
/// # Ok(())
/// # }
/// ```
pub fn tangle(
    file: &str,
    output: Option<&str>,
    root: Option<&str>,
    includes: &[PathBuf],
) -> Result<(), String> {
    let out_path = match (output, root) {
        (Some(path), _) => path.to_string(),
        (None, Some(root)) => root.to_string(),
        (None, None) => {
            return Err(
                "either the output file or an alternative root must be \
                 specified"
                    .to_string(),
            )
        }
    };
    let root = root.unwrap_or("*");

    let collector = run_document(file, includes, MacroCollector::new())?;
    let expanded = collector
        .into_set()
        .expand(root)
        .map_err(|e| e.to_string())?;
    write_file(&out_path, &expanded)?;

    println!("{} {} -> {}", "✓".green().bold(), file, out_path);
    Ok(())
}

/// Records the names of `FILE:` macros seen in a document.
#[derive(Default)]
struct FileLister {
    names: BTreeSet<String>,
}

impl EventSink for FileLister {
    fn macro_begin(&mut self, kind: &MacroKind, _span: &Span) -> WeaveResult<()> {
        if let MacroKind::File(name) = kind {
            self.names.insert(name.clone());
        }
        Ok(())
    }
}

/// Print the names of a document's `FILE:` macros, one per line,
/// sorted.
///
/// # Errors
///
/// Returns `Err` if the document cannot be read or is malformed.
pub fn list_files(file: &str, includes: &[PathBuf]) -> Result<(), String> {
    let lister = run_document(file, includes, FileLister::default())?;
    for name in &lister.names {
        println!("{}", name);
    }
    Ok(())
}
