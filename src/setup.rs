// ./src/setup.rs
use crate::debug::visualization::{cursor::ScanCursorVisual, grid::corner_dots, palette};
use crate::math::scalar_field::ScalarGrid;
use crate::sim::resources::{DemoParameters, GridLayout};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

const DOT_Z: f32 = 1.0;
const CURSOR_Z: f32 = 2.0;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    params: Res<DemoParameters>,
    layout: Res<GridLayout>,
    field: Res<ScalarGrid>,
) {
    // Kamera
    commands.spawn(Camera2dBundle::default());

    // Eckpunkte: grau über, schwarz unter dem Schwellenwert.
    // Das Feld ist unveränderlich, die Punkte werden nur einmal erzeugt.
    let dot_mesh = Mesh2dHandle(meshes.add(Circle::new(params.dot_radius)));
    let above = materials.add(ColorMaterial::from(palette::CORNER_ABOVE));
    let below = materials.add(ColorMaterial::from(palette::CORNER_BELOW));
    for (screen, color) in corner_dots(&field, &layout, params.threshold) {
        let position = layout.screen_to_world(screen);
        let material = if color == palette::CORNER_ABOVE {
            above.clone()
        } else {
            below.clone()
        };
        commands.spawn(MaterialMesh2dBundle {
            mesh: dot_mesh.clone(),
            material,
            transform: Transform::from_translation(position.extend(DOT_Z)),
            ..default()
        });
    }

    // Cursor, Position wird von sync_cursor_visual_system nachgeführt
    let start = layout.screen_to_world(layout.vertex_to_screen(0, 0) + layout.cell_size * 0.5);
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: palette::CURSOR,
                custom_size: Some(Vec2::splat(layout.cell_size)),
                ..default()
            },
            transform: Transform::from_translation(start.extend(CURSOR_Z)),
            ..default()
        },
        ScanCursorVisual,
    ));
}
