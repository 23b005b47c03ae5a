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

//! Litweave command line interface

use clap::Parser;
use litweave_cli::cli::Commands;
use std::process::ExitCode;

/// Litweave - literate programming toolchain
///
/// Command-line front end for litweave documents: tangling source code
/// out of a document, tracing its semantic event stream, and extracting
/// key/value data from its sections.
///
/// # Examples
///
/// ```bash
/// # Tangle the root macro of a document into a file
/// litweave tangle book.mw -o main.c
///
/// # Trace the event stream of a document
/// litweave trace book.mw
///
/// # Extract the key/value assignments of a section
/// litweave extract book.mw -S config
/// ```
#[derive(Parser)]
#[command(name = "litweave")]
#[command(author, version, about = "Litweave - literate programming toolchain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
