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

//! Lexical analysis for litweave documents.
//!
//! # Module structure
//!
//! - [`span`] - source position and span tracking
//! - [`token`] - the token set produced by the scanner
//! - [`lexer`] - the character-level scanner and its input sources
//! - [`decode`] - pure decoders from raw token text to typed values
//!
//! # Example
//!
//! ```
//! use litweave_core::lex::{InputSource, Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(InputSource::new("doc", "<<greeting>>=hi>>@<<"));
//! assert_eq!(lexer.read().kind, TokenKind::MacroStart);
//! assert_eq!(lexer.read().kind, TokenKind::Passthrough);
//! assert_eq!(lexer.read().kind, TokenKind::Passthrough);
//! assert_eq!(lexer.read().kind, TokenKind::MacroEnd);
//! assert_eq!(lexer.read().kind, TokenKind::Eof);
//! ```

pub mod decode;
pub mod lexer;
pub mod span;
pub mod token;

pub use decode::{
    decode_macro_ref, decode_special_directive, macro_kind_from_begin,
    substitution_kind_from_text, DirectiveKind, MacroKind, SubstitutionKind,
};
pub use lexer::{InputSource, Lexer, SavedInput};
pub use span::{SourcePos, Span};
pub use token::{Token, TokenKind};
