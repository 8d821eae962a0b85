// ./src/debug/ui.rs
use crate::math::algorithms::marching_squares::CellCode;
use crate::math::probability::SeedResource;
use crate::sim::scanner::ScanController;
use crate::sim::state::ScanPhase;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Window},
};

/// Reine Anzeige, keine Steuerelemente.
pub fn scan_status_ui_system(
    mut contexts: EguiContexts,
    controller: Res<ScanController>,
    seed: Res<SeedResource>,
) {
    Window::new("Scan-Status")
        .default_pos(egui::pos2(10.0, 10.0))
        .default_open(false)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            let phase = match controller.phase() {
                ScanPhase::Scanning => "Scannt",
                ScanPhase::Done => "Fertig",
            };
            ui.label(format!("Zustand: {}", phase));
            let (x, y) = controller.cursor();
            ui.label(format!("Cursor: ({}, {})", x, y));
            ui.label(format!(
                "Klassifiziert: {} / {} ({:.0} %)",
                controller.records().len(),
                controller.total_cells(),
                controller.progress() * 100.0
            ));
            ui.label(format!("Seed: {}", seed.seed));

            ui.collapsing("Codes", |ui| {
                let histogram = controller.code_histogram();
                for code in CellCode::all() {
                    let count = histogram[code.bits() as usize];
                    if count == 0 {
                        continue;
                    }
                    ui.label(format!(
                        "{:04b}: {} ({} Segmente)",
                        code.bits(),
                        count,
                        code.segments().len()
                    ));
                }
            });
        });
}
