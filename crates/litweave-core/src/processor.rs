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

//! The litweave processor: a state machine over the token stream.
//!
//! The processor drives the [`Lexer`] in a loop, decodes structural
//! tokens, enforces the document's nesting rules, and delivers semantic
//! events to a single [`EventSink`]. It also owns the include stack:
//! when a directive handler hands back a new [`InputSource`], the
//! current lexer state is suspended onto the stack and processing
//! continues inside the new source; end of input pops the stack and
//! resumes the suspended stream at its exact saved position. A macro
//! body must close in the stream that opened it: any stream ending
//! with a macro still open is a structural error, checked before the
//! stack pops.
//!
//! # Example
//!
//! ```
//! use litweave_core::lex::InputSource;
//! use litweave_core::processor::{EventSink, Processor};
//!
//! #[derive(Default)]
//! struct TextCollector(String);
//!
//! impl EventSink for TextCollector {
//!     fn passthrough(
//!         &mut self,
//!         text: &str,
//!         _span: &litweave_core::lex::Span,
//!     ) -> litweave_core::WeaveResult<()> {
//!         self.0.push_str(text);
//!         Ok(())
//!     }
//! }
//!
//! let mut processor = Processor::new(InputSource::new("doc", "hello"));
//! let mut sink = TextCollector::default();
//! processor.run(&mut sink).unwrap();
//! assert_eq!(sink.0, "hello");
//! ```

use crate::error::{WeaveError, WeaveResult};
use crate::lex::{
    decode_macro_ref, decode_special_directive, macro_kind_from_begin,
    substitution_kind_from_text, DirectiveKind, InputSource, Lexer, MacroKind,
    SavedInput, Span, SubstitutionKind, Token, TokenKind,
};
use crate::limits::Limits;

/// Consumer of the processor's semantic events.
///
/// All methods have default no-op implementations, so a sink overrides
/// only the events it cares about. One sink serves one processing run.
///
/// [`directive`](Self::directive) may return a new [`InputSource`] to
/// splice into the token stream; ownership of that source passes to the
/// processor's include stack. Sinks that wrap an inner sink and forward
/// events to it compose into handler pipelines (see
/// [`IncludeResolver`](crate::include::IncludeResolver)).
pub trait EventSink {
    /// Literal document text, unchanged by the processor. Empty text is
    /// delivered once each time an included stream is exhausted and the
    /// including stream resumes.
    fn passthrough(&mut self, _text: &str, _span: &Span) -> WeaveResult<()> {
        Ok(())
    }

    /// A macro body opened.
    fn macro_begin(&mut self, _kind: &MacroKind, _span: &Span) -> WeaveResult<()> {
        Ok(())
    }

    /// The open macro body closed.
    fn macro_end(&mut self, _span: &Span) -> WeaveResult<()> {
        Ok(())
    }

    /// A reference to another macro, inside a macro body.
    fn macro_ref(&mut self, _name: &str, _span: &Span) -> WeaveResult<()> {
        Ok(())
    }

    /// A text substitution (allowed inside or outside macro bodies).
    fn substitution(
        &mut self,
        _sub: &SubstitutionKind,
        _span: &Span,
    ) -> WeaveResult<()> {
        Ok(())
    }

    /// A special directive. Return `Ok(Some(source))` to have the
    /// processor start reading `source` in place of the current stream
    /// until it is exhausted.
    fn directive(
        &mut self,
        _directive: &DirectiveKind,
        _span: &Span,
    ) -> WeaveResult<Option<InputSource>> {
        Ok(None)
    }
}

/// Processor for litweave documents.
///
/// Lives for one document-processing run (including all transitively
/// included streams) and is discarded afterward.
pub struct Processor {
    lexer: Lexer,
    include_stack: Vec<SavedInput>,
    limits: Limits,
    in_macro: bool,
}

impl Processor {
    /// Creates a processor over a root input source with default limits.
    pub fn new(source: InputSource) -> Self {
        Self::with_limits(source, Limits::default())
    }

    /// Creates a processor with explicit limits.
    pub fn with_limits(source: InputSource, limits: Limits) -> Self {
        Self {
            lexer: Lexer::new(source),
            include_stack: Vec::new(),
            limits,
            in_macro: false,
        }
    }

    /// Runs the processor to completion, delivering events to `sink`.
    ///
    /// # Errors
    ///
    /// Returns a structural error on any nesting or balance violation,
    /// a decode error if a structural token's text is malformed, or
    /// whatever error the sink itself raises. The run loop does not
    /// resynchronize after an error.
    pub fn run<S: EventSink>(&mut self, sink: &mut S) -> WeaveResult<()> {
        loop {
            let token = self.lexer.read();

            match token.kind {
                TokenKind::Eof => {
                    if self.in_macro {
                        return Err(self.structural("Expected a macro end.", &token));
                    }
                    match self.include_stack.pop() {
                        Some(saved) => {
                            // resume the including stream; the empty
                            // passthrough keeps consumers in step
                            self.lexer.restore(saved);
                            sink.passthrough("", &token.span)?;
                        }
                        None => return Ok(()),
                    }
                }

                TokenKind::MacroStart => {
                    if self.in_macro {
                        return Err(
                            self.structural("Macros cannot be nested.", &token)
                        );
                    }
                    let kind = macro_kind_from_begin(&token.text)?;
                    self.in_macro = true;
                    sink.macro_begin(&kind, &token.span)?;
                }

                TokenKind::MacroEnd => {
                    if !self.in_macro {
                        return Err(self.structural(
                            "Macro end with no macro begin.",
                            &token,
                        ));
                    }
                    self.in_macro = false;
                    sink.macro_end(&token.span)?;
                }

                TokenKind::MacroRef => {
                    if !self.in_macro {
                        return Err(self.structural(
                            "Macro references can only occur in macro bodies.",
                            &token,
                        ));
                    }
                    let name = decode_macro_ref(&token.text)?;
                    sink.macro_ref(&name, &token.span)?;
                }

                TokenKind::TextSubstitution => {
                    let sub = substitution_kind_from_text(&token.text)?;
                    sink.substitution(&sub, &token.span)?;
                }

                TokenKind::Passthrough => {
                    sink.passthrough(&token.text, &token.span)?;
                }

                TokenKind::SpecialDirective => {
                    // decode failures here surface as structural errors
                    let directive = decode_special_directive(&token.text)
                        .map_err(|e| self.structural(e.to_string(), &token))?;
                    match sink.directive(&directive, &token.span) {
                        Ok(Some(source)) => {
                            // re-anchor any depth error at the directive token
                            self.include_source(source).map_err(|e| match e {
                                WeaveError::Structure { message, .. } => {
                                    self.structural(message, &token)
                                }
                                other => other,
                            })?;
                        }
                        Ok(None) => {}
                        Err(e) => {
                            return Err(self.structural(e.to_string(), &token))
                        }
                    }
                }
            }
        }
    }

    /// Suspends the current stream onto the include stack and starts
    /// reading `source` at line 1, column 0.
    ///
    /// # Errors
    ///
    /// Returns a structural error when the include nesting depth limit
    /// is exceeded.
    pub fn include_source(&mut self, source: InputSource) -> WeaveResult<()> {
        if self.include_stack.len() >= self.limits.max_include_depth {
            return Err(WeaveError::structure(
                format!(
                    "include depth {} exceeded",
                    self.limits.max_include_depth
                ),
                self.lexer.stream_name(),
                self.lexer.position(),
            ));
        }
        let saved = self.lexer.replace_source(source);
        self.include_stack.push(saved);
        Ok(())
    }

    /// Current include nesting depth.
    pub fn include_depth(&self) -> usize {
        self.include_stack.len()
    }

    fn structural(&self, message: impl Into<String>, token: &Token) -> WeaveError {
        WeaveError::structure(
            message,
            self.lexer.stream_name(),
            token.span.start,
        )
    }
}
