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

//! Token types produced by the litweave scanner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::span::Span;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// End of the current input stream.
    Eof,
    /// The start of a macro body: `<<name>>=`.
    MacroStart,
    /// The end of a macro body: `>>@<<`.
    MacroEnd,
    /// A macro reference: `<<name>>` not immediately followed by `=`.
    MacroRef,
    /// Literal document text, copied through unchanged.
    Passthrough,
    /// A text substitution: `%[key]%` or `%[key=value]%`.
    TextSubstitution,
    /// A special directive: `#[directive=value]`.
    SpecialDirective,
}

/// A single token: its kind, the exact literal text matched, and the
/// span it covers in the source stream.
///
/// Tokens are produced fresh on every [`Lexer::read`](super::Lexer::read)
/// call and are not retained by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was matched.
    pub kind: TokenKind,
    /// The literal text of the token. Empty for [`TokenKind::Eof`].
    pub text: String,
    /// Start and end positions of the token.
    pub span: Span,
}

impl Token {
    /// Returns `true` if this token marks the end of the current stream.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
