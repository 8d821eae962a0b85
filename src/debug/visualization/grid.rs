// src/debug/visualization/grid.rs
use super::palette;
use crate::math::algorithms::Threshold;
use crate::math::scalar_field::ScalarGrid;
use crate::sim::resources::GridLayout;
use bevy::prelude::*;

/// Gitterlinien durch alle Gitterpunkte, in Bildschirmpixeln.
/// Erst die vertikalen Linien (eine pro Spalte), dann die horizontalen.
pub fn grid_lines(layout: &GridLayout) -> Vec<(Vec2, Vec2)> {
    let extent = layout.grid_extent();
    let mut lines = Vec::with_capacity(layout.width + layout.height);

    for x in 0..layout.width {
        let top = layout.vertex_to_screen(x, 0);
        lines.push((top, Vec2::new(top.x, extent.y)));
    }
    for y in 0..layout.height {
        let left = layout.vertex_to_screen(0, y);
        lines.push((left, Vec2::new(extent.x, left.y)));
    }
    lines
}

/// Ein Punkt pro Gitterpunkt in Bildschirmpixeln:
/// grau über bzw. auf dem Schwellenwert, schwarz darunter.
pub fn corner_dots(
    field: &ScalarGrid,
    layout: &GridLayout,
    threshold: Threshold,
) -> Vec<(Vec2, Color)> {
    field
        .iter()
        .map(|(x, y, value)| {
            let color = if threshold.is_above(value) {
                palette::CORNER_ABOVE
            } else {
                palette::CORNER_BELOW
            };
            (layout.vertex_to_screen(x, y), color)
        })
        .collect()
}

pub fn draw_grid_system(layout: Res<GridLayout>, mut gizmos: Gizmos) {
    for (from, to) in grid_lines(&layout) {
        gizmos.line_2d(
            layout.screen_to_world(from),
            layout.screen_to_world(to),
            palette::GRID,
        );
    }
}
