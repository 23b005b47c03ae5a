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

//! The macro expansion engine.
//!
//! A [`MacroCollector`] consumes processor events to build a
//! [`MacroSet`]: an ordered mapping from macro name to an ordered
//! sequence of fragments, where each fragment is either a literal text
//! span or a deferred reference to another macro. Macros *accrete*: the
//! first occurrence of a name creates its entry, and every later block
//! with the same name appends to it, so a definition scattered through
//! a document accumulates into one logical unit.
//!
//! Evaluation is lazy, recursive, and unmemoized: a macro referenced N
//! times is fully re-evaluated N times. A reference to an undefined
//! name renders as the literal `<<name>>` rather than failing.
//!
//! # Example
//!
//! ```
//! use litweave_core::expand::{MacroCollector, MacroSet};
//! use litweave_core::lex::InputSource;
//! use litweave_core::processor::Processor;
//!
//! let doc = "<<*>>=fn main() { <<body>> }>>@<<\n<<body>>=println!()>>@<<";
//! let mut processor = Processor::new(InputSource::new("doc", doc));
//! let mut collector = MacroCollector::default();
//! processor.run(&mut collector).unwrap();
//!
//! let set = collector.into_set();
//! assert_eq!(set.expand("*").unwrap(), "fn main() { println!() }");
//! ```

use std::collections::BTreeMap;

use crate::error::{WeaveError, WeaveResult};
use crate::lex::{MacroKind, Span};
use crate::limits::Limits;
use crate::processor::EventSink;

/// One piece of a macro body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal text, emitted verbatim.
    Literal(String),
    /// A deferred reference to another macro, resolved at evaluation.
    Ref(String),
}

/// A single macro: its first-seen ordinal and its fragment sequence.
///
/// The ordinal records discovery order (1-based, first occurrence of
/// the name); evaluation order is purely the fragment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDef {
    ordinal: usize,
    fragments: Vec<Fragment>,
}

impl MacroDef {
    /// The macro's first-seen ordinal (1-based document order).
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The macro's fragments, in evaluation order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    fn push_literal(&mut self, text: &str) {
        // consecutive literals collapse into one fragment
        if let Some(Fragment::Literal(last)) = self.fragments.last_mut() {
            last.push_str(text);
        } else {
            self.fragments.push(Fragment::Literal(text.to_string()));
        }
    }
}

/// An ordered mapping from macro name to definition.
///
/// Populated while the processor runs and consumed once afterward to
/// resolve the requested root.
#[derive(Debug, Clone, Default)]
pub struct MacroSet {
    macros: BTreeMap<String, MacroDef>,
}

impl MacroSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a macro by name.
    pub fn get(&self, name: &str) -> Option<&MacroDef> {
        self.macros.get(name)
    }

    /// Returns `true` if `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Iterates over `(name, definition)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MacroDef)> {
        self.macros.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Number of distinct macro names.
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// Returns `true` if no macros have been defined.
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Ensures an entry exists for `name`, creating it with the next
    /// ordinal if absent, and returns it for appending.
    fn define(&mut self, name: &str) -> &mut MacroDef {
        let next_ordinal = self.macros.len() + 1;
        self.macros
            .entry(name.to_string())
            .or_insert_with(|| MacroDef {
                ordinal: next_ordinal,
                fragments: Vec::new(),
            })
    }

    /// Evaluates the macro named `root` with default limits.
    ///
    /// # Errors
    ///
    /// Returns an unresolved-root error if `root` is not defined, or a
    /// cycle error if expansion exceeds the default depth bound.
    pub fn expand(&self, root: &str) -> WeaveResult<String> {
        self.expand_with_limits(root, &Limits::default())
    }

    /// Evaluates the macro named `root`, concatenating literal
    /// fragments verbatim and recursively evaluating referenced macros
    /// in fragment order. References to undefined names render as the
    /// literal `<<name>>`.
    ///
    /// # Errors
    ///
    /// Returns an unresolved-root error if `root` is not defined, or a
    /// cycle error once recursion exceeds `limits.max_expansion_depth`.
    pub fn expand_with_limits(
        &self,
        root: &str,
        limits: &Limits,
    ) -> WeaveResult<String> {
        if !self.contains(root) {
            return Err(WeaveError::unresolved_root(root));
        }
        let mut output = String::new();
        self.expand_into(root, &mut output, 0, limits)?;
        Ok(output)
    }

    fn expand_into(
        &self,
        name: &str,
        output: &mut String,
        depth: usize,
        limits: &Limits,
    ) -> WeaveResult<()> {
        // the caller checked that `name` exists
        let def = &self.macros[name];
        for fragment in &def.fragments {
            match fragment {
                Fragment::Literal(text) => output.push_str(text),
                Fragment::Ref(target) => {
                    if !self.contains(target) {
                        output.push_str("<<");
                        output.push_str(target);
                        output.push_str(">>");
                    } else if depth >= limits.max_expansion_depth {
                        return Err(WeaveError::cycle(format!(
                            "macro expansion depth {} exceeded while \
                             expanding '{}'",
                            limits.max_expansion_depth, target
                        )));
                    } else {
                        self.expand_into(target, output, depth + 1, limits)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// An [`EventSink`] that builds a [`MacroSet`] from processor events.
///
/// Passthrough text and references outside any macro body are ignored
/// by this consumer.
#[derive(Debug, Default)]
pub struct MacroCollector {
    set: MacroSet,
    current: Option<String>,
}

impl MacroCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set built so far.
    pub fn set(&self) -> &MacroSet {
        &self.set
    }

    /// Consumes the collector, returning the built set.
    pub fn into_set(self) -> MacroSet {
        self.set
    }
}

impl EventSink for MacroCollector {
    fn passthrough(&mut self, text: &str, _span: &Span) -> WeaveResult<()> {
        if let Some(name) = &self.current {
            self.set.define(name).push_literal(text);
        }
        Ok(())
    }

    fn macro_begin(&mut self, kind: &MacroKind, _span: &Span) -> WeaveResult<()> {
        let name = kind.name();
        self.set.define(name);
        self.current = Some(name.to_string());
        Ok(())
    }

    fn macro_end(&mut self, _span: &Span) -> WeaveResult<()> {
        self.current = None;
        Ok(())
    }

    fn macro_ref(&mut self, name: &str, _span: &Span) -> WeaveResult<()> {
        if let Some(current) = &self.current {
            self.set
                .define(current)
                .fragments
                .push(Fragment::Ref(name.to_string()));
        }
        Ok(())
    }
}
