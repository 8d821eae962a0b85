// src/sim/scanner.rs

use super::resources::GridLayout;
use super::state::ScanPhase;
use crate::math::algorithms::{CellClassification, MarchingSquares, Threshold};
use crate::math::scalar_field::ScalarField2D;
use bevy::prelude::*;

/// Gesamter veränderlicher Zustand des Scans: Cursor, Frame-Zähler und die
/// bisher klassifizierten Zellen. Einträge werden nur angehängt.
#[derive(Resource, Debug, Clone)]
pub struct ScanController {
    cursor: (usize, usize),
    /// Anzahl klassifizierbarer Zellen pro Achse (Gitterpunkte - 1)
    columns: usize,
    rows: usize,
    step_interval: u32,
    frames_since_step: u32,
    records: Vec<CellClassification>,
    phase: ScanPhase,
}

impl ScanController {
    pub fn new(columns: usize, rows: usize, step_interval: u32) -> Self {
        let phase = if columns == 0 || rows == 0 {
            ScanPhase::Done
        } else {
            ScanPhase::Scanning
        };
        Self {
            cursor: (0, 0),
            columns,
            rows,
            step_interval: step_interval.max(1),
            frames_since_step: 0,
            records: Vec::with_capacity(columns * rows),
            phase,
        }
    }

    pub fn for_field<F: ScalarField2D + ?Sized>(field: &F, step_interval: u32) -> Self {
        let (columns, rows) = field.cell_dimensions();
        Self::new(columns, rows, step_interval)
    }

    /// Ein Frame. Alle `step_interval` Frames wird ein Schritt ausgeführt;
    /// gibt den dabei angehängten Eintrag zurück.
    pub fn tick<F: ScalarField2D + ?Sized>(
        &mut self,
        field: &F,
        threshold: Threshold,
    ) -> Option<CellClassification> {
        if self.is_done() {
            return None;
        }
        self.frames_since_step += 1;
        if self.frames_since_step < self.step_interval {
            return None;
        }
        self.frames_since_step = 0;
        self.step(field, threshold)
    }

    /// Klassifiziert die Zelle unter dem Cursor und rückt danach eine Zelle weiter.
    /// Nach der letzten Zelle der letzten Zeile bleibt der Cursor dort stehen.
    pub fn step<F: ScalarField2D + ?Sized>(
        &mut self,
        field: &F,
        threshold: Threshold,
    ) -> Option<CellClassification> {
        if self.is_done() {
            return None;
        }
        let (x, y) = self.cursor;
        let record = MarchingSquares::classify_cell(field, threshold, x, y);
        if let Some(record) = record {
            self.records.push(record);
        }

        if x + 1 < self.columns {
            self.cursor.0 += 1;
        } else if y + 1 < self.rows {
            self.cursor = (0, y + 1);
        } else {
            self.phase = ScanPhase::Done;
        }
        record
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Obere linke Ecke der Cursorzelle in Bildschirmpixeln.
    pub fn cursor_screen(&self, layout: &GridLayout) -> Vec2 {
        layout.vertex_to_screen(self.cursor.0, self.cursor.1)
    }

    pub fn records(&self) -> &[CellClassification] {
        &self.records
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == ScanPhase::Done
    }

    pub fn total_cells(&self) -> usize {
        self.columns * self.rows
    }

    /// Anteil klassifizierter Zellen in [0, 1].
    pub fn progress(&self) -> f32 {
        match self.total_cells() {
            0 => 1.0,
            total => self.records.len() as f32 / total as f32,
        }
    }

    /// Häufigkeit jedes Codes unter den bisherigen Einträgen.
    pub fn code_histogram(&self) -> [usize; 16] {
        let mut histogram = [0; 16];
        for record in &self.records {
            histogram[record.code.bits() as usize] += 1;
        }
        histogram
    }
}
