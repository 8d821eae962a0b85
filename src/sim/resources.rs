use crate::math::algorithms::marching_squares::Threshold;
use crate::math::error::{MathError, MathResult};
use bevy::prelude::*;
use std::ops::Range;

#[derive(Resource, Debug, Clone)]
pub struct DemoParameters {
    // --- Fenster ---
    pub screen_width: u32,
    pub screen_height: u32,

    // --- Gitter ---
    pub margin: u32,
    pub cell_size: u32,
    pub threshold: Threshold,
    pub sample_range: Range<f64>,

    // --- Zeitsteuerung ---
    pub step_interval_frames: u32,
    pub frames_per_second: f64,

    // --- Visualisierung ---
    pub dot_radius: f32,
}

impl Default for DemoParameters {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,

            margin: 50,
            cell_size: 50,
            threshold: Threshold(10),
            sample_range: 0.0..20.0,

            step_interval_frames: 5,
            frames_per_second: 60.0,

            dot_radius: 5.0,
        }
    }
}

impl DemoParameters {
    /// Prüft die Werte, die nicht schon beim Ableiten des Layouts auffallen.
    pub fn validate(&self) -> MathResult<()> {
        let range = &self.sample_range;
        if !range.start.is_finite() || !range.end.is_finite() || range.is_empty() {
            return Err(MathError::InvalidConfiguration {
                message: format!("sample range {:?} is empty or not finite", range),
            });
        }
        if self.step_interval_frames == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "step interval must be at least one frame".to_string(),
            });
        }
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("frame rate must be positive, got {}", self.frames_per_second),
            });
        }
        Ok(())
    }
}

/// Geometrie des Gitters auf dem Bildschirm.
/// Bildschirmpixel haben den Ursprung oben links, y wächst nach unten.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Gitterpunkte in x-Richtung
    pub width: usize,
    /// Gitterpunkte in y-Richtung
    pub height: usize,
    pub cell_size: f32,
    pub margin: f32,
    pub screen_size: Vec2,
}

impl GridLayout {
    pub fn new(
        width: usize,
        height: usize,
        cell_size: f32,
        margin: f32,
        screen_size: Vec2,
    ) -> MathResult<Self> {
        if width == 0 || height == 0 {
            return Err(MathError::EmptyGrid { width, height });
        }
        if cell_size <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("cell size must be positive, got {}", cell_size),
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
            margin,
            screen_size,
        })
    }

    /// Leitet die Gittergröße aus Bildschirm, Rand und Zellgröße ab:
    /// `(screen - 2 * margin) / cell_size + 1` Punkte pro Achse.
    pub fn from_parameters(params: &DemoParameters) -> MathResult<Self> {
        if params.cell_size == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "cell size must be positive".to_string(),
            });
        }
        let inner_w = params.screen_width.checked_sub(params.margin.saturating_mul(2));
        let inner_h = params.screen_height.checked_sub(params.margin.saturating_mul(2));
        let (Some(inner_w), Some(inner_h)) = (inner_w, inner_h) else {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "margin {} does not fit a {}x{} screen",
                    params.margin, params.screen_width, params.screen_height
                ),
            });
        };

        Self::new(
            (inner_w / params.cell_size + 1) as usize,
            (inner_h / params.cell_size + 1) as usize,
            params.cell_size as f32,
            params.margin as f32,
            Vec2::new(params.screen_width as f32, params.screen_height as f32),
        )
    }

    /// Bildschirmposition des Gitterpunkts (x, y).
    pub fn vertex_to_screen(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(
            self.margin + x as f32 * self.cell_size,
            self.margin + y as f32 * self.cell_size,
        )
    }

    /// Punkt in Zellkoordinaten ([0,1]^2) der Zelle mit Ursprung (x, y) auf den Bildschirm.
    pub fn cell_point_to_screen(&self, x: usize, y: usize, local: Vec2) -> Vec2 {
        self.vertex_to_screen(x, y) + local * self.cell_size
    }

    /// Bildschirmpixel -> Bevy-Weltkoordinaten (Ursprung Mitte, y nach oben).
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.screen_size.x * 0.5,
            self.screen_size.y * 0.5 - screen.y,
        )
    }

    /// Rechte bzw. untere Begrenzung des Gitters in Bildschirmpixeln.
    pub fn grid_extent(&self) -> Vec2 {
        self.vertex_to_screen(self.width - 1, self.height - 1)
    }
}
