// ./src/main.rs
use bevy::prelude::*;
use bevy::window::close_on_esc;
use bevy_egui::EguiPlugin;

use marching_squares_demo::debug::{
    ui::scan_status_ui_system,
    visualization::{
        contour::draw_contours_system, cursor::sync_cursor_visual_system,
        grid::draw_grid_system, palette,
    },
};
use marching_squares_demo::math::{MathResult, probability::SeedResource};
use marching_squares_demo::setup::setup_scene;
use marching_squares_demo::sim::{
    resources::{DemoParameters, GridLayout},
    systems::{log_scan_start_system, prepare_scan, scan_in_progress, scan_tick_system},
};

fn main() -> MathResult<()> {
    let params = DemoParameters::default();
    // Ungültige Parameter brechen den Start mit Diagnose ab
    let layout = GridLayout::from_parameters(&params)?;
    let seed = SeedResource::default();
    let (field, controller) = prepare_scan(&params, &layout, &seed)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Marching Squares Algorithm".to_string(),
                resolution: (params.screen_width as f32, params.screen_height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(palette::BACKGROUND))
        // Fester Takt für den Scan: ein FixedUpdate-Durchlauf entspricht einem Frame
        .insert_resource(Time::<Fixed>::from_hz(params.frames_per_second))
        .insert_resource(layout)
        .insert_resource(params)
        .insert_resource(seed)
        .insert_resource(field)
        .insert_resource(controller)
        .add_systems(Startup, (log_scan_start_system, setup_scene))
        .add_systems(FixedUpdate, scan_tick_system.run_if(scan_in_progress))
        .add_systems(
            Update,
            (
                draw_grid_system,
                draw_contours_system,
                sync_cursor_visual_system,
                scan_status_ui_system,
                close_on_esc,
            ),
        )
        .run();

    Ok(())
}
