use crate::sim::resources::GridLayout;
use crate::sim::scanner::ScanController;
use bevy::prelude::*;

/// Markiert das Sprite, das die aktuelle Cursorzelle hervorhebt.
#[derive(Component, Debug, Default)]
pub struct ScanCursorVisual;

/// Mittelpunkt der Cursorzelle in Weltkoordinaten (Sprites sind zentriert verankert).
pub fn cursor_world_center(controller: &ScanController, layout: &GridLayout) -> Vec2 {
    let top_left = controller.cursor_screen(layout);
    layout.screen_to_world(top_left + Vec2::splat(layout.cell_size * 0.5))
}

pub fn sync_cursor_visual_system(
    controller: Res<ScanController>,
    layout: Res<GridLayout>,
    mut query: Query<&mut Transform, With<ScanCursorVisual>>,
) {
    let center = cursor_world_center(&controller, &layout);
    for mut transform in query.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}
