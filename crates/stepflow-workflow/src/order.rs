//! Deterministic topological ordering of workflow nodes.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use indexmap::IndexMap;

use crate::error::OrderError;
use crate::node::NodeIR;

/// Order node ids so that every node comes after all of its `deps`.
///
/// Kahn's algorithm with a min-heap on declaration index: whenever several
/// nodes are eligible at once, the one declared first in `nodes` runs next.
/// The same map always yields the same order.
///
/// Nodes that never become eligible (cycles, self-dependencies, or
/// dependencies on ids missing from `nodes`) are reported in declaration
/// order through [`OrderError`].
pub fn topological_order(nodes: &IndexMap<String, NodeIR>) -> Result<Vec<String>, OrderError> {
  // Unmet dependency count per node, by declaration index. Missing ids are
  // counted too, so their dependents never reach zero.
  let ids: Vec<&String> = nodes.keys().collect();
  let mut pending: Vec<usize> = Vec::with_capacity(nodes.len());
  let mut dependents: HashMap<&str, Vec<usize>> = HashMap::new();

  for (index, node) in nodes.values().enumerate() {
    pending.push(node.deps.len());
    for dep in &node.deps {
      dependents.entry(dep.as_str()).or_default().push(index);
    }
  }

  let mut ready: BinaryHeap<Reverse<usize>> = pending
    .iter()
    .enumerate()
    .filter(|(_, count)| **count == 0)
    .map(|(index, _)| Reverse(index))
    .collect();

  let mut order = Vec::with_capacity(nodes.len());

  while let Some(Reverse(index)) = ready.pop() {
    let id = ids[index];
    order.push(id.clone());

    if let Some(waiting) = dependents.get(id.as_str()) {
      for &dependent in waiting {
        pending[dependent] -= 1;
        if pending[dependent] == 0 {
          ready.push(Reverse(dependent));
        }
      }
    }
  }

  if order.len() == nodes.len() {
    return Ok(order);
  }

  let unordered = ids
    .iter()
    .enumerate()
    .filter(|(index, _)| pending[*index] > 0)
    .map(|(_, id)| (*id).clone())
    .collect();

  Err(OrderError { unordered })
}
