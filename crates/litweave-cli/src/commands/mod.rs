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

//! CLI command implementations

mod extract;
mod tangle;
mod trace;

pub use extract::{extract, list_sections};
pub use tangle::{list_files, tangle};
pub use trace::trace;

use std::fs;
use std::path::PathBuf;

use litweave_core::{
    search_paths_for, EventSink, IncludeResolver, InputSource, Processor,
};

/// Run the processor over a document with include resolution, feeding
/// events to `sink`, and return the sink when the document is done.
///
/// The document's own directory is always the first include search
/// path, followed by `includes` in order.
///
/// # Errors
///
/// Returns `Err` if the document cannot be read or is structurally
/// malformed.
pub(crate) fn run_document<S: EventSink>(
    file: &str,
    includes: &[PathBuf],
    sink: S,
) -> Result<S, String> {
    let source = InputSource::from_path(file).map_err(|e| e.to_string())?;
    let mut processor = Processor::new(source);
    let mut resolver =
        IncludeResolver::new(search_paths_for(file, includes), sink);
    processor.run(&mut resolver).map_err(|e| e.to_string())?;
    Ok(resolver.into_inner())
}

/// Write content to a file.
///
/// # Errors
///
/// Returns `Err` if file creation or writing fails.
pub(crate) fn write_file(path: &str, content: &str) -> Result<(), String> {
    fs::write(path, content)
        .map_err(|e| format!("Failed to write '{}': {}", path, e))
}
