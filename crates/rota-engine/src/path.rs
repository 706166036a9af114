//! Path reconstruction from a predecessor map.

use rota_core::NodeId;

use crate::engine::PredecessorMap;

/// Ordered route from `source` to `destination`, both included.
///
/// Returns `[source]` when the two are equal, and an empty vector when the
/// destination was never reached (no predecessor chain leads back to
/// `source`). A malformed map containing a cycle also yields an empty
/// vector rather than looping.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    source: &NodeId,
    destination: &NodeId,
) -> Vec<NodeId> {
    if source == destination {
        return vec![source.clone()];
    }

    let mut path = Vec::new();
    let mut current = Some(destination);
    // A simple path visits each node at most once.
    let limit = predecessors.len() + 1;

    while let Some(node) = current {
        if path.len() >= limit {
            return Vec::new();
        }
        path.push(node.clone());
        if node == source {
            break;
        }
        current = predecessors.get(node).and_then(Option::as_ref);
    }

    path.reverse();
    if path.first() != Some(source) {
        return Vec::new();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    fn chain(pairs: &[(&str, Option<&str>)]) -> PredecessorMap {
        pairs
            .iter()
            .map(|(node, pred)| (id(node), pred.map(id)))
            .collect()
    }

    #[test]
    fn walks_back_to_source() {
        let preds = chain(&[
            ("A", None),
            ("C", Some("A")),
            ("B", Some("C")),
            ("D", Some("B")),
            ("E", Some("D")),
        ]);
        let path = reconstruct_path(&preds, &id("A"), &id("E"));
        let names: Vec<&str> = path.iter().map(NodeId::as_str).collect();
        assert_eq!(names, ["A", "C", "B", "D", "E"]);
    }

    #[test]
    fn source_equals_destination() {
        let preds = chain(&[("A", None)]);
        assert_eq!(reconstruct_path(&preds, &id("A"), &id("A")), vec![id("A")]);
    }

    #[test]
    fn unreached_destination_is_empty() {
        let preds = chain(&[("A", None), ("B", Some("A")), ("Z", None)]);
        assert!(reconstruct_path(&preds, &id("A"), &id("Z")).is_empty());
    }

    #[test]
    fn destination_absent_from_map_is_empty() {
        let preds = chain(&[("A", None)]);
        assert!(reconstruct_path(&preds, &id("A"), &id("Q")).is_empty());
    }

    #[test]
    fn chain_from_another_root_is_empty() {
        let preds = chain(&[("A", None), ("X", None), ("B", Some("X"))]);
        assert!(reconstruct_path(&preds, &id("A"), &id("B")).is_empty());
    }

    #[test]
    fn cyclic_map_terminates() {
        let preds = chain(&[("A", None), ("B", Some("C")), ("C", Some("B"))]);
        assert!(reconstruct_path(&preds, &id("A"), &id("B")).is_empty());
    }
}
