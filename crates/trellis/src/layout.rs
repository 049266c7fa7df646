//! Top-down layered chart layout.
//!
//! The pipeline runs in three passes over a decoded [`RawChart`]:
//! normalization (resolve every node and edge to concrete ids and labels),
//! layering (group nodes by topological depth), and grid placement (assign
//! fixed-spacing coordinates per layer and position). Each pass is a pure
//! function; the whole pipeline is deterministic and never fails. An
//! unusable chart simply lays out as nothing.

mod grid;
mod layering;
mod normalize;

use log::{debug, info};

use trellis_core::chart::ChartLayout;
use trellis_payload::RawChart;

use crate::config::LayoutOptions;

/// Lays out a chart as positioned nodes plus the full normalized edge list.
///
/// `None` input (the payload carried no usable chart) and charts without
/// nodes both produce an empty layout. Edges whose endpoints do not match a
/// node are excluded from layering but still emitted, so the rendering
/// surface decides what to do with them.
pub fn layout_chart(raw: Option<&RawChart>, options: &LayoutOptions) -> ChartLayout {
    let Some(raw) = raw else {
        debug!("No usable chart in payload");
        return ChartLayout::default();
    };

    let (nodes, edges) = normalize::normalize(raw);
    if nodes.is_empty() {
        debug!("Chart has no nodes");
        return ChartLayout::default();
    }

    let layers = layering::layer_nodes(&nodes, &edges);
    info!(
        node_count = nodes.len(),
        edge_count = edges.len(),
        layer_count = layers.len();
        "Chart layered"
    );

    let positioned = grid::assign_positions(&nodes, &layers, options);

    ChartLayout {
        nodes: positioned,
        edges,
    }
}
