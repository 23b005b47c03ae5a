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

//! Property tests for the scanner and decoders.

use proptest::prelude::*;

use litweave_core::lex::{decode_macro_ref, macro_kind_from_begin};
use litweave_core::{InputSource, Lexer, TokenKind};

proptest! {
    /// An input of ordinary characters (no structural lead characters)
    /// lexes to exactly one single-character passthrough token per
    /// character.
    #[test]
    fn ordinary_text_is_one_token_per_char(
        text in "[a-z A-Z0-9.,;!?]{0,64}"
    ) {
        let mut lexer = Lexer::new(InputSource::new("prop", &text));
        let mut count = 0usize;
        loop {
            let token = lexer.read();
            if token.is_eof() {
                break;
            }
            prop_assert_eq!(token.kind, TokenKind::Passthrough);
            prop_assert_eq!(token.text.chars().count(), 1);
            count += 1;
        }
        prop_assert_eq!(count, text.chars().count());
    }

    /// Lexing never loses characters: the concatenated token texts
    /// reproduce the input exactly, whatever it contains.
    #[test]
    fn token_texts_reassemble_the_input(text in "\\PC{0,64}") {
        let mut lexer = Lexer::new(InputSource::new("prop", &text));
        let mut reassembled = String::new();
        loop {
            let token = lexer.read();
            if token.is_eof() {
                break;
            }
            reassembled.push_str(&token.text);
        }
        prop_assert_eq!(reassembled, text);
    }

    /// Any newline-free, '>'-free name round-trips through a macro
    /// reference token and its decoder.
    #[test]
    fn macro_ref_round_trip(name in "[^>\n\r]{1,32}") {
        let text = format!("<<{}>>", name);
        let mut lexer = Lexer::new(InputSource::new("prop", &text));
        let token = lexer.read();
        prop_assert_eq!(token.kind, TokenKind::MacroRef);
        prop_assert_eq!(decode_macro_ref(&token.text).unwrap(), name);
    }

    /// A begin marker for any plain name decodes back to that name.
    #[test]
    fn macro_begin_round_trip(name in "[a-z_][a-z0-9_]{0,24}") {
        let kind = macro_kind_from_begin(&format!("<<{}>>=", name)).unwrap();
        prop_assert_eq!(kind.name(), name.as_str());
    }
}
