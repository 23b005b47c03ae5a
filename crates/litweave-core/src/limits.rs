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

//! Resource limits for litweave processing.

/// Configurable limits bounding recursive work.
///
/// Macro expansion is unmemoized and recursive, and include nesting is
/// tracked only by stack depth; these limits turn a cyclic document
/// into a reported error instead of a stack overflow.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum macro expansion recursion depth (default: 128).
    pub max_expansion_depth: usize,
    /// Maximum include nesting depth (default: 64).
    pub max_include_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expansion_depth: 128,
            max_include_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_expansion_depth: usize::MAX,
            max_include_depth: usize::MAX,
        }
    }
}
