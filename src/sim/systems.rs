use super::resources::{DemoParameters, GridLayout};
use super::scanner::ScanController;
use crate::math::error::MathResult;
use crate::math::probability::SeedResource;
use crate::math::scalar_field::{ScalarField2D, ScalarGrid};
use bevy::prelude::*;

/// Baut Feld und Scan-Controller vor dem Start der App.
/// Fehler landen beim Aufrufer, die App startet dann gar nicht erst.
pub fn prepare_scan(
    params: &DemoParameters,
    layout: &GridLayout,
    seed: &SeedResource,
) -> MathResult<(ScalarGrid, ScanController)> {
    params.validate()?;
    let field = ScalarGrid::random(
        layout.width,
        layout.height,
        params.sample_range.clone(),
        &mut seed.rng(),
    )?;
    let controller = ScanController::for_field(&field, params.step_interval_frames);
    Ok((field, controller))
}

pub fn log_scan_start_system(
    field: Res<ScalarGrid>,
    controller: Res<ScanController>,
    seed: Res<SeedResource>,
) {
    info!(
        "Generated {}x{} scalar field (seed {})",
        field.width(),
        field.height(),
        seed.seed
    );
    if controller.is_done() {
        warn!("Scalar field has no cell with four corners, nothing to scan.");
    }
}

/// Run-Condition für den Scan-Takt.
pub fn scan_in_progress(controller: Res<ScanController>) -> bool {
    !controller.is_done()
}

/// Läuft im FixedUpdate-Takt, ein Aufruf entspricht einem Frame.
pub fn scan_tick_system(
    mut controller: ResMut<ScanController>,
    field: Res<ScalarGrid>,
    params: Res<DemoParameters>,
) {
    let Some(record) = controller.tick(&*field, params.threshold) else {
        return;
    };
    debug!(
        "Classified cell ({}, {}) -> code {}",
        record.x,
        record.y,
        record.code.bits()
    );

    if controller.is_done() {
        info!(
            "Scan complete: {} cells classified.",
            controller.records().len()
        );
    }
}
