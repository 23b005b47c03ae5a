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

//! A dependency graph over integer-labeled nodes.
//!
//! Edge `A -> B` means "A depends on B": B must be emitted before A.
//! [`Graph::topological_sort`] orders nodes accordingly and reports a
//! cycle error when no valid order exists. Among independent nodes the
//! order is an implementation detail (currently ascending id) that
//! callers must not rely on.
//!
//! # Example
//!
//! ```
//! use litweave_core::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! assert_eq!(graph.topological_sort().unwrap(), vec![3, 2, 1]);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{WeaveError, WeaveResult};

/// A directed graph of integer-labeled nodes and dependency edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<usize, BTreeSet<usize>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `node` exists, with an empty dependency set if new.
    /// Idempotent.
    pub fn add_node(&mut self, node: usize) {
        self.nodes.entry(node).or_default();
    }

    /// Records that `from` depends on `to` (`to` must be emitted before
    /// `from`). Both endpoints are created if absent.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.add_node(to);
        self.nodes.entry(from).or_default().insert(to);
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sorts the nodes in dependency order.
    ///
    /// A variation of Kahn's algorithm: repeatedly pick a node with no
    /// remaining dependencies, emit it, and strike it from every other
    /// node's dependency set. Quadratic in the node count, which is
    /// fine at the expected scale of dozens to low hundreds of nodes.
    ///
    /// # Errors
    ///
    /// Returns a cycle error if nodes remain but none is free of
    /// dependencies.
    pub fn topological_sort(&self) -> WeaveResult<Vec<usize>> {
        let mut pending = self.nodes.clone();
        let mut output = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let ready = pending
                .iter()
                .find(|(_, deps)| deps.is_empty())
                .map(|(&id, _)| id);

            match ready {
                Some(id) => {
                    pending.remove(&id);
                    for deps in pending.values_mut() {
                        deps.remove(&id);
                    }
                    output.push(id);
                }
                None => {
                    return Err(WeaveError::cycle(
                        "dependency graph contains a cycle",
                    ))
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_edge() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        assert_eq!(graph.topological_sort().unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_chain() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        assert_eq!(graph.topological_sort().unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn test_cycle_detected() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        let err = graph.topological_sort().unwrap_err();
        assert!(matches!(err, WeaveError::Cycle { .. }));
    }

    #[test]
    fn test_single_node_no_edges() {
        let mut graph = Graph::new();
        graph.add_node(7);
        assert_eq!(graph.topological_sort().unwrap(), vec![7]);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_node(1);
        graph.add_edge(1, 2);
        graph.add_node(1);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.topological_sort().unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_diamond() {
        // 1 depends on 2 and 3, which both depend on 4
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        let order = graph.topological_sort().unwrap();
        assert_eq!(order.len(), 4);
        let pos =
            |n: usize| order.iter().position(|&x| x == n).unwrap();
        assert!(pos(4) < pos(2));
        assert!(pos(4) < pos(3));
        assert!(pos(2) < pos(1));
        assert!(pos(3) < pos(1));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.topological_sort().unwrap(), Vec::<usize>::new());
    }
}
