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

//! Pure decoders from raw token text to structured values.
//!
//! Each decoder takes the literal text of a token (as produced by
//! [`Lexer::read`](super::Lexer::read)) and parses it into a typed
//! value, failing with a decode error on malformed input. None of them
//! touch shared state.
//!
//! # Examples
//!
//! ```
//! use litweave_core::lex::{decode_macro_ref, macro_kind_from_begin, MacroKind};
//!
//! assert_eq!(decode_macro_ref("<<blah>>").unwrap(), "blah");
//!
//! let kind = macro_kind_from_begin("<<FILE:main.c>>=").unwrap();
//! assert_eq!(kind, MacroKind::File("main.c".to_string()));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WeaveError, WeaveResult};

/// The kind of a macro, decoded from its begin marker.
///
/// The inner name of `<<TYPE:name>>=` selects the kind; an inner name
/// of exactly `*` is the root macro.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MacroKind {
    /// An ordinary named macro.
    Default(String),
    /// A `FILE:` macro naming an output file.
    File(String),
    /// A `SECTION:` macro naming a substitution namespace.
    Section(String),
    /// The distinguished root macro `*`.
    Root,
}

impl MacroKind {
    /// The macro's name, as recorded in the macro map.
    pub fn name(&self) -> &str {
        match self {
            Self::Default(name) | Self::File(name) | Self::Section(name) => name,
            Self::Root => "*",
        }
    }
}

/// A decoded text substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubstitutionKind {
    /// `%[key]%` — a lookup of `key`.
    Default(String),
    /// `%[key=value]%` — an assignment of `value` to `key`.
    Assignment(String, String),
}

impl SubstitutionKind {
    /// The substitution key.
    pub fn key(&self) -> &str {
        match self {
            Self::Default(key) | Self::Assignment(key, _) => key,
        }
    }

    /// The assigned value, or `""` for a plain lookup.
    pub fn value(&self) -> &str {
        match self {
            Self::Default(_) => "",
            Self::Assignment(_, value) => value,
        }
    }
}

/// A decoded special directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DirectiveKind {
    /// `#[include=path]` — splice another document in at this point.
    Include(String),
    /// `#[language=value]` — override the source language.
    Language(String),
}

impl DirectiveKind {
    /// The directive's value.
    pub fn value(&self) -> &str {
        match self {
            Self::Include(value) | Self::Language(value) => value,
        }
    }
}

/// Decodes a macro begin marker `<<name>>=` into its kind and name.
///
/// The inner name `*` is the root macro. A `TYPE:` prefix of `FILE` or
/// `SECTION` selects those kinds with the suffix as the name; any other
/// prefix is not a type tag, and the whole inner string (colon
/// included) becomes a default macro's name.
///
/// # Errors
///
/// Returns a decode error if the text does not match `<<...>>=`.
pub fn macro_kind_from_begin(text: &str) -> WeaveResult<MacroKind> {
    let inner = text
        .strip_prefix("<<")
        .and_then(|t| t.strip_suffix(">>="))
        .ok_or_else(|| {
            WeaveError::decode(format!("Malformed macro statement '{}'", text))
        })?;

    if inner == "*" {
        return Ok(MacroKind::Root);
    }

    match inner.split_once(':') {
        None => Ok(MacroKind::Default(inner.to_string())),
        Some(("FILE", name)) => Ok(MacroKind::File(name.to_string())),
        Some(("SECTION", name)) => Ok(MacroKind::Section(name.to_string())),
        Some(_) => Ok(MacroKind::Default(inner.to_string())),
    }
}

/// Decodes a macro reference `<<name>>` into the referenced name.
///
/// # Errors
///
/// Returns a decode error if the text does not match `<<...>>`.
pub fn decode_macro_ref(text: &str) -> WeaveResult<String> {
    text.strip_prefix("<<")
        .and_then(|t| t.strip_suffix(">>"))
        .map(str::to_string)
        .ok_or_else(|| {
            WeaveError::decode(format!("Malformed macro reference '{}'", text))
        })
}

/// Decodes a text substitution `%[key]%` or `%[key=value]%`.
///
/// The split is on the first `=`; a value may itself contain `=`.
///
/// # Errors
///
/// Returns a decode error if the text does not match `%[...]%`.
pub fn substitution_kind_from_text(text: &str) -> WeaveResult<SubstitutionKind> {
    let inner = text
        .strip_prefix("%[")
        .and_then(|t| t.strip_suffix("]%"))
        .ok_or_else(|| {
            WeaveError::decode(format!("Malformed text substitution '{}'", text))
        })?;

    match inner.split_once('=') {
        None => Ok(SubstitutionKind::Default(inner.to_string())),
        Some((key, value)) => Ok(SubstitutionKind::Assignment(
            key.to_string(),
            value.to_string(),
        )),
    }
}

/// Decodes a special directive `#[directive=value]`.
///
/// Only `include` and `language` are supported directives.
///
/// # Errors
///
/// Returns a decode error if the text does not match `#[...=...]`, or
/// if the directive is not a supported one.
pub fn decode_special_directive(text: &str) -> WeaveResult<DirectiveKind> {
    let inner = text
        .strip_prefix("#[")
        .and_then(|t| t.strip_suffix(']'))
        .filter(|t| t.contains('='))
        .ok_or_else(|| {
            WeaveError::decode(format!("Malformed special directive '{}'", text))
        })?;

    let (directive, value) = inner.split_once('=').unwrap_or((inner, ""));
    match directive {
        "include" => Ok(DirectiveKind::Include(value.to_string())),
        "language" => Ok(DirectiveKind::Language(value.to_string())),
        _ => Err(WeaveError::decode(format!(
            "Unsupported directive type '{}'",
            text
        ))),
    }
}
