//! Topological layering of the normalized chart.
//!
//! Builds a dependency graph over the node set and peels it layer by layer:
//! the first layer is every node nothing points at, each following layer is
//! whatever the previous one released. Nodes the peeling never reaches
//! (members of a cycle, or only reachable through one) are appended as a
//! single trailing layer so that every node still gets drawn.

use std::collections::HashMap;

use log::debug;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use trellis_core::chart::{ChartEdge, ChartNode};

/// Groups nodes into layers by topological depth.
///
/// Returns indices into `nodes`, layer by layer. Ordering is stable: the
/// first layer lists roots in input order, later layers list nodes in the
/// order the peeling released them. Edges whose source or target id is not
/// in the node set contribute nothing. Duplicate ids keep their first
/// occurrence, so every distinct id appears in exactly one layer.
pub(crate) fn layer_nodes(nodes: &[ChartNode], edges: &[ChartEdge]) -> Vec<Vec<usize>> {
    let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(nodes.len(), edges.len());
    let mut id_map: HashMap<&str, NodeIndex> = HashMap::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        id_map
            .entry(node.id.as_str())
            .or_insert_with(|| graph.add_node(i));
    }

    for edge in edges {
        if let (Some(&source), Some(&target)) = (
            id_map.get(edge.source.as_str()),
            id_map.get(edge.target.as_str()),
        ) {
            graph.add_edge(source, target, ());
        }
    }

    // Per-node successor lists in edge insertion order, so the released
    // order below is reproducible run to run.
    let mut successors: Vec<Vec<NodeIndex>> = vec![Vec::new(); graph.node_count()];
    let mut in_degree: Vec<usize> = vec![0; graph.node_count()];
    for edge in graph.edge_references() {
        successors[edge.source().index()].push(edge.target());
        in_degree[edge.target().index()] += 1;
    }

    let mut layers: Vec<Vec<usize>> = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    let mut frontier: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();

    while !frontier.is_empty() {
        let mut released = Vec::new();
        for &idx in &frontier {
            visited[idx.index()] = true;
            for &succ in &successors[idx.index()] {
                in_degree[succ.index()] -= 1;
                if in_degree[succ.index()] == 0 {
                    released.push(succ);
                }
            }
        }

        layers.push(frontier.iter().map(|&idx| graph[idx]).collect());
        frontier = released;
    }

    let leftovers: Vec<usize> = graph
        .node_indices()
        .filter(|idx| !visited[idx.index()])
        .map(|idx| graph[idx])
        .collect();
    if !leftovers.is_empty() {
        debug!(count = leftovers.len(); "Unreached nodes moved to trailing layer");
        layers.push(leftovers);
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<ChartNode> {
        ids.iter().map(|id| ChartNode::new(*id, *id)).collect()
    }

    fn edge(source: &str, target: &str) -> ChartEdge {
        ChartEdge::new(format!("{source}-{target}"), source, target)
    }

    #[test]
    fn test_chain() {
        let layers = layer_nodes(&nodes(&["a", "b", "c"]), &[edge("a", "b"), edge("b", "c")]);

        assert_eq!(layers, [vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_independent_nodes_share_root_layer() {
        let layers = layer_nodes(&nodes(&["a", "b", "c"]), &[]);

        assert_eq!(layers, [vec![0, 1, 2]]);
    }

    #[test]
    fn test_diamond() {
        let layers = layer_nodes(
            &nodes(&["a", "b", "c", "d"]),
            &[
                edge("a", "b"),
                edge("a", "c"),
                edge("b", "d"),
                edge("c", "d"),
            ],
        );

        assert_eq!(layers, [vec![0], vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_cycle_becomes_trailing_layer() {
        let layers = layer_nodes(
            &nodes(&["root", "x", "y"]),
            &[edge("root", "x"), edge("x", "y"), edge("y", "x")],
        );

        // root peels off; x and y hold each other hostage.
        assert_eq!(layers, [vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_self_loop_is_unreachable() {
        let layers = layer_nodes(&nodes(&["a", "b"]), &[edge("b", "b")]);

        assert_eq!(layers, [vec![0], vec![1]]);
    }

    #[test]
    fn test_dangling_edges_ignored() {
        let layers = layer_nodes(
            &nodes(&["a", "b"]),
            &[edge("a", "ghost"), edge("ghost", "b"), edge("a", "b")],
        );

        assert_eq!(layers, [vec![0], vec![1]]);
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let mut all = nodes(&["a", "b"]);
        all.push(ChartNode::new("a", "shadow"));

        let layers = layer_nodes(&all, &[edge("a", "b")]);

        assert_eq!(layers, [vec![0], vec![1]]);
    }

    #[test]
    fn test_parallel_edges_release_once() {
        let layers = layer_nodes(&nodes(&["a", "b"]), &[edge("a", "b"), edge("a", "b")]);

        assert_eq!(layers, [vec![0], vec![1]]);
    }
}
