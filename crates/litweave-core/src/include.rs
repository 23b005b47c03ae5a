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

//! Include-file resolution for `#[include=path]` directives.
//!
//! [`IncludeResolver`] wraps any [`EventSink`] and handles `include`
//! directives on its behalf: the relative name is resolved against an
//! ordered list of search paths, the first path containing the file
//! wins, and the opened source is handed to the processor's include
//! stack. A name found in no search path is silently skipped; a found
//! file that cannot be read is a fatal error. All other events, and all
//! non-include directives, are forwarded to the wrapped sink, so
//! resolvers and other handlers compose into a pipeline.

use std::path::{Path, PathBuf};

use crate::error::WeaveResult;
use crate::lex::{
    DirectiveKind, InputSource, MacroKind, Span, SubstitutionKind,
};
use crate::processor::EventSink;

/// An [`EventSink`] adapter that resolves include directives against a
/// set of search paths and forwards everything else to an inner sink.
pub struct IncludeResolver<S> {
    search_paths: Vec<PathBuf>,
    inner: S,
}

impl<S: EventSink> IncludeResolver<S> {
    /// Creates a resolver over `search_paths`, wrapping `inner`.
    pub fn new(search_paths: Vec<PathBuf>, inner: S) -> Self {
        Self {
            search_paths,
            inner,
        }
    }

    /// Consumes the resolver, returning the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Returns the first search path that contains `name`, if any.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

impl<S: EventSink> EventSink for IncludeResolver<S> {
    fn passthrough(&mut self, text: &str, span: &Span) -> WeaveResult<()> {
        self.inner.passthrough(text, span)
    }

    fn macro_begin(&mut self, kind: &MacroKind, span: &Span) -> WeaveResult<()> {
        self.inner.macro_begin(kind, span)
    }

    fn macro_end(&mut self, span: &Span) -> WeaveResult<()> {
        self.inner.macro_end(span)
    }

    fn macro_ref(&mut self, name: &str, span: &Span) -> WeaveResult<()> {
        self.inner.macro_ref(name, span)
    }

    fn substitution(
        &mut self,
        sub: &SubstitutionKind,
        span: &Span,
    ) -> WeaveResult<()> {
        self.inner.substitution(sub, span)
    }

    fn directive(
        &mut self,
        directive: &DirectiveKind,
        span: &Span,
    ) -> WeaveResult<Option<InputSource>> {
        if let DirectiveKind::Include(name) = directive {
            if let Some(path) = self.resolve(name) {
                let source = InputSource::from_path(&path)?;
                // the inner handler still sees the directive
                self.inner.directive(directive, span)?;
                return Ok(Some(source));
            }
        }
        self.inner.directive(directive, span)
    }
}

/// Builds the default search path list for a document: the document's
/// own directory first, then any explicitly supplied paths.
pub fn search_paths_for(
    input: impl AsRef<Path>,
    extra: &[PathBuf],
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(extra.len() + 1);
    let dir = input
        .as_ref()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    paths.push(dir);
    paths.extend(extra.iter().cloned());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::InputSource;
    use crate::processor::Processor;
    use std::fs;

    /// Collects passthrough text only.
    #[derive(Default)]
    struct TextSink(String);

    impl EventSink for TextSink {
        fn passthrough(&mut self, text: &str, _span: &Span) -> WeaveResult<()> {
            self.0.push_str(text);
            Ok(())
        }
    }

    #[test]
    fn test_missing_include_is_silently_skipped() {
        let mut processor =
            Processor::new(InputSource::new("root", "a#[include=nope.mw]b"));
        let mut sink = IncludeResolver::new(vec![PathBuf::from("/nonexistent")], TextSink::default());
        processor.run(&mut sink).unwrap();
        assert_eq!(sink.into_inner().0, "ab");
    }

    #[test]
    fn test_include_resolves_against_first_matching_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sub.mw"), "XY").unwrap();

        let mut processor =
            Processor::new(InputSource::new("root", "a#[include=sub.mw]b"));
        let mut sink = IncludeResolver::new(
            vec![PathBuf::from("/nonexistent"), dir.path().to_path_buf()],
            TextSink::default(),
        );
        processor.run(&mut sink).unwrap();
        assert_eq!(sink.into_inner().0, "aXYb");
    }

    #[test]
    fn test_search_paths_prepend_document_directory() {
        let paths = search_paths_for("docs/book.mw", &[PathBuf::from("lib")]);
        assert_eq!(paths, vec![PathBuf::from("docs"), PathBuf::from("lib")]);
    }

    #[test]
    fn test_search_paths_for_bare_filename() {
        let paths = search_paths_for("book.mw", &[]);
        assert_eq!(paths, vec![PathBuf::from(".")]);
    }
}
