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

//! Core parsing and macro-expansion engine for litweave documents.
//!
//! Litweave documents mix prose with named macro blocks, macro
//! references, text substitutions, and include directives:
//!
//! ```text
//! Some prose describing the program.
//!
//! <<FILE:hello.c>>=
//! int main() { <<body>> }
//! >>@<<
//!
//! <<body>>=
//! return 0;
//! >>@<<
//! ```
//!
//! This crate provides the shared engine behind every front-end tool:
//!
//! - [`lex`] - the character-level scanner, with position tracking and
//!   stream switching, plus the pure token decoders
//! - [`processor`] - the state machine that turns the token stream into
//!   semantic events delivered to an [`EventSink`]
//! - [`include`] - search-path resolution for `#[include=path]`
//! - [`expand`] - the macro map and its lazy recursive evaluator
//! - [`graph`] - a dependency-ordering utility over integer nodes
//!
//! # Tangling a document
//!
//! ```
//! use litweave_core::{InputSource, MacroCollector, Processor};
//!
//! let doc = "<<*>>=hello <<who>>>>@<<\n<<who>>=world>>@<<";
//! let mut processor = Processor::new(InputSource::new("doc", doc));
//! let mut collector = MacroCollector::new();
//! processor.run(&mut collector).unwrap();
//!
//! assert_eq!(collector.into_set().expand("*").unwrap(), "hello world");
//! ```

pub mod error;
pub mod expand;
pub mod graph;
pub mod include;
pub mod lex;
mod limits;
pub mod processor;

pub use error::{WeaveError, WeaveResult};
pub use expand::{Fragment, MacroCollector, MacroDef, MacroSet};
pub use graph::Graph;
pub use include::{search_paths_for, IncludeResolver};
pub use lex::{
    DirectiveKind, InputSource, Lexer, MacroKind, SourcePos, Span,
    SubstitutionKind, Token, TokenKind,
};
pub use limits::Limits;
pub use processor::{EventSink, Processor};
