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

//! Litweave CLI library for command-line parsing and execution.
//!
//! This library backs the `litweave` binary. A litweave document mixes
//! prose with named macro blocks; the commands here pull the program
//! back out of the prose and help debug documents that will not tangle.
//!
//! # Commands
//!
//! - **tangle**: expand a root macro into its output file, resolving
//!   macro references recursively; `--list-files` enumerates the
//!   document's `FILE:` macros instead
//! - **trace**: print the document's semantic event stream, one line
//!   per event, for debugging
//! - **extract**: write the `key=value` assignments of a named
//!   `SECTION:` macro to an auxiliary data file; `--list-sections`
//!   enumerates the sections instead
//!
//! All commands resolve `#[include=path]` directives against the input
//! file's directory plus any `-I` search paths.
//!
//! # Examples
//!
//! ```no_run
//! use litweave_cli::commands::tangle;
//!
//! # fn main() -> Result<(), String> {
//! // Tangle the default root macro `*` into main.c
//! tangle("book.mw", Some("main.c"), None, &[])?;
//!
//! // Tangle an alternative root; the output file defaults to its name
//! tangle("book.mw", None, Some("Makefile"), &[])?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>` for consistent error
//! handling; errors carry the offending file name and, for document
//! errors, the stream, line, and column.

pub mod cli;
pub mod commands;
pub mod kv;
