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

//! CLI command definitions and argument parsing.
//!
//! Each variant of [`Commands`] is one subcommand of the `litweave`
//! binary; parsing is handled by clap and execution delegates to the
//! functions in [`crate::commands`].

use std::path::PathBuf;

use clap::Subcommand;

use crate::commands;

/// Top-level CLI commands.
///
/// # Commands
///
/// - **Tangle**: expand a root macro into its output file
/// - **Trace**: print the semantic event stream of a document
/// - **Extract**: write a section's `key=value` assignments to a file
#[derive(Subcommand)]
pub enum Commands {
    /// Tangle a document into source code
    ///
    /// Collects every macro block in the document (following includes),
    /// then expands the root macro and writes the result. With
    /// `--list-files`, prints the names of the document's `FILE:`
    /// macros instead, one per line, sorted.
    Tangle {
        /// Input document path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to the root macro's name)
        #[arg(short, long)]
        output: Option<String>,

        /// Root macro to expand (defaults to `*`)
        #[arg(short, long)]
        root: Option<String>,

        /// Additional include search directory (repeatable)
        #[arg(short = 'I', long = "include", value_name = "DIR")]
        includes: Vec<PathBuf>,

        /// List the document's FILE: macros instead of tangling
        #[arg(short = 'L', long)]
        list_files: bool,
    },

    /// Trace the semantic events of a document
    ///
    /// Prints one line per event (macro begin, macro end, reference,
    /// substitution, directive), with events inside a macro body
    /// indented. Useful for debugging documents that will not tangle.
    Trace {
        /// Input document path
        #[arg(value_name = "FILE")]
        file: String,

        /// Additional include search directory (repeatable)
        #[arg(short = 'I', long = "include", value_name = "DIR")]
        includes: Vec<PathBuf>,
    },

    /// Extract a section's key/value assignments
    ///
    /// Writes one `key=value` line for every assignment substitution
    /// occurring inside the named `SECTION:` macro. With
    /// `--list-sections`, prints the document's section names instead.
    Extract {
        /// Input document path
        #[arg(value_name = "FILE")]
        file: String,

        /// Section to extract
        #[arg(short = 'S', long)]
        section: Option<String>,

        /// Output file path (defaults to `<SECTION>.input`)
        #[arg(short, long)]
        output: Option<String>,

        /// Additional include search directory (repeatable)
        #[arg(short = 'I', long = "include", value_name = "DIR")]
        includes: Vec<PathBuf>,

        /// List the document's SECTION: macros instead of extracting
        #[arg(short = 'L', long)]
        list_sections: bool,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` with a descriptive message if file I/O fails, the
    /// document is malformed, or a required argument is missing.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Tangle {
                file,
                output,
                root,
                includes,
                list_files,
            } => {
                if list_files {
                    commands::list_files(&file, &includes)
                } else {
                    commands::tangle(
                        &file,
                        output.as_deref(),
                        root.as_deref(),
                        &includes,
                    )
                }
            }
            Commands::Trace { file, includes } => {
                commands::trace(&file, &includes)
            }
            Commands::Extract {
                file,
                section,
                output,
                includes,
                list_sections,
            } => {
                if list_sections {
                    commands::list_sections(&file, &includes)
                } else {
                    let section = section.ok_or_else(|| {
                        "a section name must be provided with -S".to_string()
                    })?;
                    commands::extract(
                        &file,
                        &section,
                        output.as_deref(),
                        &includes,
                    )
                }
            }
        }
    }
}
