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

//! Extract command - pull key/value assignments out of a section

use std::collections::BTreeSet;
use std::path::PathBuf;

use colored::Colorize;
use litweave_core::{
    EventSink, MacroKind, Span, SubstitutionKind, WeaveResult,
};

use super::{run_document, write_file};
use crate::kv;

/// Collects the assignment substitutions inside one `SECTION:` macro.
struct SectionExtractor {
    section: String,
    in_section: bool,
    pairs: Vec<(String, String)>,
}

impl SectionExtractor {
    fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            in_section: false,
            pairs: Vec::new(),
        }
    }
}

impl EventSink for SectionExtractor {
    fn macro_begin(&mut self, kind: &MacroKind, _span: &Span) -> WeaveResult<()> {
        if let MacroKind::Section(name) = kind {
            if *name == self.section {
                self.in_section = true;
            }
        }
        Ok(())
    }

    fn macro_end(&mut self, _span: &Span) -> WeaveResult<()> {
        self.in_section = false;
        Ok(())
    }

    fn substitution(
        &mut self,
        sub: &SubstitutionKind,
        _span: &Span,
    ) -> WeaveResult<()> {
        if self.in_section {
            if let SubstitutionKind::Assignment(key, value) = sub {
                self.pairs.push((key.clone(), value.clone()));
            }
        }
        Ok(())
    }
}

/// Extract the assignment substitutions of a `SECTION:` macro into a
/// key/value file.
///
/// The output path defaults to `<SECTION>.input`. An assignment is one
/// `%[key=value]%` substitution; plain `%[key]%` lookups are ignored.
/// Accreted section blocks contribute in document order.
///
/// # Errors
///
/// Returns `Err` if the document cannot be read or is malformed, or
/// the output cannot be written.
pub fn extract(
    file: &str,
    section: &str,
    output: Option<&str>,
    includes: &[PathBuf],
) -> Result<(), String> {
    let out_path = match output {
        Some(path) => path.to_string(),
        None => format!("{}.input", section),
    };

    let extractor =
        run_document(file, includes, SectionExtractor::new(section))?;
    write_file(&out_path, &kv::to_string(&extractor.pairs))?;

    println!("{} {} -> {}", "✓".green().bold(), file, out_path);
    Ok(())
}

/// Records the names of `SECTION:` macros seen in a document.
#[derive(Default)]
struct SectionLister {
    names: BTreeSet<String>,
}

impl EventSink for SectionLister {
    fn macro_begin(&mut self, kind: &MacroKind, _span: &Span) -> WeaveResult<()> {
        if let MacroKind::Section(name) = kind {
            self.names.insert(name.clone());
        }
        Ok(())
    }
}

/// Print the names of a document's `SECTION:` macros, one per line,
/// sorted.
///
/// # Errors
///
/// Returns `Err` if the document cannot be read or is malformed.
pub fn list_sections(file: &str, includes: &[PathBuf]) -> Result<(), String> {
    let lister = run_document(file, includes, SectionLister::default())?;
    for name in &lister.names {
        println!("{}", name);
    }
    Ok(())
}
