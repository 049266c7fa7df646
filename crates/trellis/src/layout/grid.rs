//! Fixed-grid coordinate assignment.

use trellis_core::{chart::{ChartNode, PositionedNode}, geometry::Point};

use crate::config::LayoutOptions;

/// Places every layered node on the grid: row from layer index, column from
/// position within the layer.
pub(crate) fn assign_positions(
    nodes: &[ChartNode],
    layers: &[Vec<usize>],
    options: &LayoutOptions,
) -> Vec<PositionedNode> {
    let mut positioned = Vec::with_capacity(layers.iter().map(Vec::len).sum());

    for (row, layer) in layers.iter().enumerate() {
        for (column, &index) in layer.iter().enumerate() {
            let node = &nodes[index];
            positioned.push(PositionedNode {
                id: node.id.clone(),
                label: node.label.clone(),
                position: Point::new(
                    options.origin_x() + column as f32 * options.column_width(),
                    options.origin_y() + row as f32 * options.row_height(),
                ),
            });
        }
    }

    positioned
}
