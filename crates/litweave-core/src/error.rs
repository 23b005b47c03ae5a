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

//! Error types for litweave processing.
//!
//! Two families of errors exist: *decode* errors, raised by the pure
//! token decoders when token text does not match its grammar, and
//! *structural* errors, raised by the processor when the document
//! violates nesting or balance rules. Structural errors always carry
//! the stream name and the start position of the offending token and
//! display as `Error in <name> at <line>:<col>: <message>`.
//!
//! Every error is unrecoverable for the current run; there is no
//! resynchronization.

use thiserror::Error;

use crate::lex::span::SourcePos;

/// Result alias for litweave operations.
pub type WeaveResult<T> = Result<T, WeaveError>;

/// An error raised while processing a litweave document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeaveError {
    /// Malformed token text (a decoder grammar violation).
    #[error("{message}")]
    Decode {
        /// Human-readable description of the malformed text.
        message: String,
    },

    /// A nesting or balance violation in the document structure.
    #[error("Error in {stream} at {}:{}: {message}", .pos.line(), .pos.column())]
    Structure {
        /// Human-readable description of the violation.
        message: String,
        /// Name of the stream the offending token came from.
        stream: String,
        /// Start position of the offending token.
        pos: SourcePos,
    },

    /// The requested root macro is not defined anywhere in the document.
    #[error("root macro '{name}' not found in document")]
    UnresolvedRoot {
        /// The name that was looked up.
        name: String,
    },

    /// A reference cycle or runaway recursion was cut off.
    #[error("cycle detected: {message}")]
    Cycle {
        /// Description of where the cycle was detected.
        message: String,
    },

    /// An input stream could not be read.
    #[error("{message}")]
    Io {
        /// Description of the failed read.
        message: String,
    },
}

impl WeaveError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a structural error anchored at a token's start position.
    pub fn structure(
        message: impl Into<String>,
        stream: impl Into<String>,
        pos: SourcePos,
    ) -> Self {
        Self::Structure {
            message: message.into(),
            stream: stream.into(),
            pos,
        }
    }

    /// Creates an unresolved-root error.
    pub fn unresolved_root(name: impl Into<String>) -> Self {
        Self::UnresolvedRoot { name: name.into() }
    }

    /// Creates a cycle error.
    pub fn cycle(message: impl Into<String>) -> Self {
        Self::Cycle {
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_displays_bare_message() {
        let err = WeaveError::decode("Malformed macro reference 'xy'");
        assert_eq!(err.to_string(), "Malformed macro reference 'xy'");
    }

    #[test]
    fn test_structure_error_display_format() {
        let err = WeaveError::structure(
            "Expected a macro end.",
            "doc.mw",
            SourcePos::new(12, 4),
        );
        assert_eq!(
            err.to_string(),
            "Error in doc.mw at 12:4: Expected a macro end."
        );
    }

    #[test]
    fn test_unresolved_root_display() {
        let err = WeaveError::unresolved_root("*");
        assert_eq!(err.to_string(), "root macro '*' not found in document");
    }

    #[test]
    fn test_cycle_display() {
        let err = WeaveError::cycle("dependency graph contains a cycle");
        assert_eq!(
            err.to_string(),
            "cycle detected: dependency graph contains a cycle"
        );
    }
}
