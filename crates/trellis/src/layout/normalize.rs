//! Resolution of raw descriptors into concrete nodes and edges.
//!
//! Positional fallbacks live here: a node without an id takes its index, a
//! node without a label is named after its 1-based position, an edge without
//! endpoints borrows the ids of the nodes at its own and the following
//! position. The wrap-around on the target fallback means a trailing edge
//! with no target points back at the first node; that matches how the
//! upstream service pads out under-specified charts.

use log::trace;

use trellis_core::chart::{ChartEdge, ChartNode};
use trellis_payload::RawChart;

/// Resolves every raw descriptor, in wire order.
///
/// A chart without nodes resolves to nothing at all: the positional
/// fallbacks for edges need node ids to borrow, so without nodes there are
/// no well-defined edges either.
pub(crate) fn normalize(raw: &RawChart) -> (Vec<ChartNode>, Vec<ChartEdge>) {
    if raw.nodes.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let nodes: Vec<ChartNode> = raw
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            ChartNode::new(
                node.id.clone().unwrap_or_else(|| i.to_string()),
                node.label.clone().unwrap_or_else(|| format!("Node {}", i + 1)),
            )
        })
        .collect();

    let edges: Vec<ChartEdge> = raw
        .edges
        .iter()
        .enumerate()
        .map(|(j, edge)| {
            let source = edge.source.clone().unwrap_or_else(|| {
                // Borrow the id of the node at the edge's own position; past
                // the end of the node list the edge is left dangling.
                nodes.get(j).map(|node| node.id.clone()).unwrap_or_default()
            });
            let target = edge
                .target
                .clone()
                .unwrap_or_else(|| nodes[(j + 1) % nodes.len()].id.clone());

            ChartEdge::new(
                edge.id.clone().unwrap_or_else(|| format!("e-{j}")),
                source,
                target,
            )
        })
        .collect();

    trace!(nodes:?, edges:?; "Chart normalized");

    (nodes, edges)
}
