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

//! The character-level scanner for litweave documents.
//!
//! [`Lexer::read`] returns exactly one [`Token`] per call, dispatching
//! on the first character read:
//!
//! | lead | attempt |
//! |------|---------|
//! | `<`  | macro start `<<name>>=` or macro reference `<<name>>` |
//! | `>`  | macro end `>>@<<` |
//! | `%`  | text substitution `%[key]%` / `%[key=value]%` |
//! | `#`  | special directive `#[directive=value]` |
//! | any  | single-character passthrough |
//!
//! A failed multi-character attempt does not rewind: every character it
//! consumed (except a trailing end-of-input) stays in the token buffer,
//! and the whole run is returned as one passthrough token.
//!
//! The scanner's active input can be swapped out and later restored via
//! [`Lexer::replace_source`] and [`Lexer::restore`]; this ownership
//! hand-off is the mechanism behind `#[include=...]` processing.

use std::collections::VecDeque;
use std::fs;
use std::mem;
use std::path::Path;

use crate::error::{WeaveError, WeaveResult};

use super::span::{SourcePos, Span};
use super::token::{Token, TokenKind};

/// An owned, named character stream.
///
/// The full contents are held in memory; the cursor advances one
/// character at a time. Exactly one frame owns a source at any moment:
/// either the lexer (actively reading it) or the processor's include
/// stack (holding it suspended).
#[derive(Debug, Clone)]
pub struct InputSource {
    name: String,
    chars: Vec<char>,
    cursor: usize,
}

impl InputSource {
    /// Creates a source from a name and its full text.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            chars: text.chars().collect(),
            cursor: 0,
        }
    }

    /// Reads a file into a source named after its path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> WeaveResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|_| {
            WeaveError::io(format!(
                "could not open '{}' for reading",
                path.display()
            ))
        })?;
        Ok(Self::new(path.display().to_string(), &text))
    }

    /// The name of this stream, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(ch)
    }
}

/// The suspended state of a lexer: the source it was reading, where it
/// was in it, and any characters pending in the put-back queue.
///
/// Produced by [`Lexer::replace_source`] and consumed by
/// [`Lexer::restore`]; the processor's include stack owns these while
/// an included stream is being read.
#[derive(Debug)]
pub struct SavedInput {
    source: InputSource,
    pos: SourcePos,
    putback: VecDeque<char>,
}

/// Lexical scanner for litweave documents.
pub struct Lexer {
    source: InputSource,
    pos: SourcePos,
    putback: VecDeque<char>,
    tokenbuf: String,
    start: SourcePos,
    end: SourcePos,
}

impl Lexer {
    /// Creates a lexer over an input source.
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            pos: SourcePos::start(),
            putback: VecDeque::new(),
            tokenbuf: String::new(),
            start: SourcePos::start(),
            end: SourcePos::start(),
        }
    }

    /// The name of the stream currently being read.
    pub fn stream_name(&self) -> &str {
        self.source.name()
    }

    /// The current line/column accounting position.
    pub fn position(&self) -> SourcePos {
        self.pos
    }

    /// Reads one token from the stream.
    ///
    /// End of input with nothing consumed yields [`TokenKind::Eof`]
    /// with an empty text buffer.
    pub fn read(&mut self) -> Token {
        let kind = match self.read_char() {
            None => {
                self.tokenbuf.clear();
                self.start = self.pos;
                self.end = self.pos;
                TokenKind::Eof
            }
            Some('<') => {
                self.start('<');
                self.scan_macro_start()
            }
            Some('>') => {
                self.start('>');
                self.scan_macro_end()
            }
            Some('%') => {
                self.start('%');
                self.scan_text_substitution()
            }
            Some('#') => {
                self.start('#');
                self.scan_special_directive()
            }
            Some(ch) => {
                self.start(ch);
                TokenKind::Passthrough
            }
        };

        Token {
            kind,
            text: self.tokenbuf.clone(),
            span: Span::new(self.start, self.end),
        }
    }

    /// Swaps in a new source, returning the suspended state of the old
    /// one. The lexer continues at line 1, column 0 of the new source
    /// with an empty put-back queue.
    pub fn replace_source(&mut self, source: InputSource) -> SavedInput {
        let saved = SavedInput {
            source: mem::replace(&mut self.source, source),
            pos: self.pos,
            putback: mem::take(&mut self.putback),
        };
        self.pos = SourcePos::start();
        saved
    }

    /// Restores a previously suspended source, resuming at its exact
    /// saved position and put-back queue.
    pub fn restore(&mut self, saved: SavedInput) {
        self.source = saved.source;
        self.pos = saved.pos;
        self.putback = saved.putback;
    }

    /// Reads one character, draining the put-back queue before touching
    /// the stream. Put-back characters were already counted when first
    /// consumed, so only stream reads move the position.
    fn read_char(&mut self) -> Option<char> {
        if let Some(ch) = self.putback.pop_front() {
            return Some(ch);
        }

        let ch = self.source.next_char()?;
        if ch == '\n' {
            self.pos.next_line();
        } else {
            self.pos.advance_col();
        }
        Some(ch)
    }

    /// Queues a character to be replayed before stream reads resume.
    fn put_back(&mut self, ch: char) {
        self.putback.push_back(ch);
    }

    /// Begins a new token with its first character.
    fn start(&mut self, ch: char) {
        self.start = self.pos;
        self.tokenbuf.clear();
        self.accept(ch);
    }

    /// Appends a character to the token buffer and extends its span.
    fn accept(&mut self, ch: char) {
        self.end = self.pos;
        self.tokenbuf.push(ch);
    }

    /// Abandons a multi-character attempt. Whatever was consumed stays
    /// in the token buffer and is returned as a single passthrough
    /// token; a trailing end-of-input is never accepted.
    fn fail_passthrough(&mut self, ch: Option<char>) -> TokenKind {
        if let Some(ch) = ch {
            self.accept(ch);
        }
        TokenKind::Passthrough
    }

    /// Attempts `<<name>>=` (macro start) or `<<name>>` (macro
    /// reference) after an initial `<`.
    fn scan_macro_start(&mut self) -> TokenKind {
        // second '<'
        let ch = self.read_char();
        if ch != Some('<') {
            return self.fail_passthrough(ch);
        }
        self.accept('<');

        // at least one name character
        match self.read_char() {
            None => return self.fail_passthrough(None),
            Some('>') => return self.fail_passthrough(Some('>')),
            Some(ch) => self.accept(ch),
        }

        // the rest of the name, terminated by '>'
        let mut ch = self.read_char();
        while let Some(c) = ch {
            if c == '>' || c == '\n' {
                break;
            }
            self.accept(c);
            ch = self.read_char();
        }

        // a newline or end of input before the closing '>' abandons
        match ch {
            None => return self.fail_passthrough(None),
            Some('\n') => return self.fail_passthrough(Some('\n')),
            Some(_) => {}
        }
        self.accept('>');

        // second '>'
        let ch = self.read_char();
        if ch != Some('>') {
            return self.fail_passthrough(ch);
        }
        self.accept('>');

        // peek one character to disambiguate start from reference
        match self.read_char() {
            Some('=') => {
                self.accept('=');
                TokenKind::MacroStart
            }
            None => TokenKind::MacroRef,
            Some(ch) => {
                self.put_back(ch);
                TokenKind::MacroRef
            }
        }
    }

    /// Attempts the macro end marker `>>@<<` after an initial `>`.
    fn scan_macro_end(&mut self) -> TokenKind {
        for expected in ['>', '@', '<', '<'] {
            let ch = self.read_char();
            if ch != Some(expected) {
                return self.fail_passthrough(ch);
            }
            self.accept(expected);
        }
        TokenKind::MacroEnd
    }

    /// Attempts `%[key]%` / `%[key=value]%` after an initial `%`.
    fn scan_text_substitution(&mut self) -> TokenKind {
        let ch = self.read_char();
        if ch != Some('[') {
            return self.fail_passthrough(ch);
        }
        self.accept('[');

        // at least one key character
        match self.read_char() {
            None => return self.fail_passthrough(None),
            Some(']') => return self.fail_passthrough(Some(']')),
            Some(ch) => self.accept(ch),
        }

        // the rest of the key, terminated by ']'
        let mut ch = self.read_char();
        while let Some(c) = ch {
            if c == ']' {
                break;
            }
            self.accept(c);
            ch = self.read_char();
        }
        match ch {
            None => return self.fail_passthrough(None),
            Some(_) => self.accept(']'),
        }

        // closing '%'
        let ch = self.read_char();
        if ch != Some('%') {
            return self.fail_passthrough(ch);
        }
        self.accept('%');
        TokenKind::TextSubstitution
    }

    /// Attempts `#[directive=value]` after an initial `#`.
    fn scan_special_directive(&mut self) -> TokenKind {
        let ch = self.read_char();
        if ch != Some('[') {
            return self.fail_passthrough(ch);
        }
        self.accept('[');

        // at least one directive character
        match self.read_char() {
            None => return self.fail_passthrough(None),
            Some('=') => return self.fail_passthrough(Some('=')),
            Some(ch) => self.accept(ch),
        }

        // the rest of the directive, terminated by '='
        let mut ch = self.read_char();
        while let Some(c) = ch {
            if c == '=' {
                break;
            }
            self.accept(c);
            ch = self.read_char();
        }
        match ch {
            None => return self.fail_passthrough(None),
            Some(_) => self.accept('='),
        }

        // at least one value character
        match self.read_char() {
            None => return self.fail_passthrough(None),
            Some(']') => return self.fail_passthrough(Some(']')),
            Some(ch) => self.accept(ch),
        }

        // the rest of the value, terminated by ']'
        let mut ch = self.read_char();
        while let Some(c) = ch {
            if c == ']' {
                break;
            }
            self.accept(c);
            ch = self.read_char();
        }
        match ch {
            None => return self.fail_passthrough(None),
            Some(_) => self.accept(']'),
        }
        TokenKind::SpecialDirective
    }
}
