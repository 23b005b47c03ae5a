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

//! Trace command - print a document's semantic event stream

use std::path::PathBuf;

use litweave_core::{
    DirectiveKind, EventSink, InputSource, MacroKind, Span, SubstitutionKind,
    WeaveResult,
};

use super::run_document;

/// Prints one line per semantic event, indenting inside macro bodies.
///
/// Passthrough text is not traced; everything else is.
#[derive(Default)]
struct Tracer {
    indent: usize,
}

impl Tracer {
    fn line(&self, text: &str) {
        println!("{:indent$}{}", "", text, indent = self.indent);
    }
}

impl EventSink for Tracer {
    fn macro_begin(&mut self, kind: &MacroKind, _span: &Span) -> WeaveResult<()> {
        let kind_name = match kind {
            MacroKind::Default(_) => "default",
            MacroKind::File(_) => "file",
            MacroKind::Section(_) => "section",
            MacroKind::Root => "root",
        };
        self.line(&format!(
            "begin macro type {} value {}",
            kind_name,
            kind.name()
        ));
        self.indent += 4;
        Ok(())
    }

    fn macro_end(&mut self, _span: &Span) -> WeaveResult<()> {
        self.indent = self.indent.saturating_sub(4);
        self.line("end macro.");
        Ok(())
    }

    fn macro_ref(&mut self, name: &str, _span: &Span) -> WeaveResult<()> {
        self.line(&format!("macro ref {}", name));
        Ok(())
    }

    fn substitution(
        &mut self,
        sub: &SubstitutionKind,
        _span: &Span,
    ) -> WeaveResult<()> {
        let kind_name = match sub {
            SubstitutionKind::Default(_) => "default",
            SubstitutionKind::Assignment(_, _) => "assignment",
        };
        self.line(&format!(
            "substitution type {} value {} = {}",
            kind_name,
            sub.key(),
            sub.value()
        ));
        Ok(())
    }

    fn directive(
        &mut self,
        directive: &DirectiveKind,
        _span: &Span,
    ) -> WeaveResult<Option<InputSource>> {
        let kind_name = match directive {
            DirectiveKind::Include(_) => "include",
            DirectiveKind::Language(_) => "language",
        };
        self.line(&format!(
            "directive type {} value {}",
            kind_name,
            directive.value()
        ));
        Ok(None)
    }
}

/// Print a document's semantic event stream to stdout.
///
/// # Errors
///
/// Returns `Err` if the document cannot be read or is malformed.
pub fn trace(file: &str, includes: &[PathBuf]) -> Result<(), String> {
    run_document(file, includes, Tracer::default())?;
    Ok(())
}
