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

//! Source position and span tracking for litweave lexical analysis.
//!
//! Positions use the scanner's native accounting: lines are 1-indexed,
//! and the column counts characters consumed on the current line, so a
//! freshly opened stream sits at line 1, column 0, and a consumed
//! newline resets the column to 0.
//!
//! # Examples
//!
//! ```
//! use litweave_core::lex::{SourcePos, Span};
//!
//! let mut pos = SourcePos::start();
//! assert_eq!(pos.line(), 1);
//! assert_eq!(pos.column(), 0);
//!
//! pos.advance_col();
//! pos.next_line();
//! assert_eq!((pos.line(), pos.column()), (2, 0));
//!
//! let span = Span::new(SourcePos::new(3, 1), SourcePos::new(3, 9));
//! assert!(span.is_single_line());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in a source stream (line and column).
///
/// Lines are 1-indexed. Columns count consumed characters on the line,
/// so column 0 means "nothing consumed on this line yet" and the first
/// character of a line occupies column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourcePos {
    line: usize,
    column: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Creates the position of a freshly opened stream (line 1, column 0).
    #[inline]
    pub const fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Advances the position by one column.
    #[inline]
    pub fn advance_col(&mut self) {
        self.column += 1;
    }

    /// Moves to the next line (increments line, resets column to 0).
    #[inline]
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

/// A contiguous region of a source stream, from the position of the
/// first accepted character to the position of the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Position of the first character of the region.
    pub start: SourcePos,
    /// Position of the last character of the region.
    pub end: SourcePos,
}

impl Span {
    /// Creates a span from a start and end position.
    #[inline]
    pub const fn new(start: SourcePos, end: SourcePos) -> Self {
        Self { start, end }
    }

    /// Creates an empty span anchored at a single position.
    #[inline]
    pub const fn at(pos: SourcePos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the span starts and ends on the same line.
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start.line() == self.end.line()
    }
}
