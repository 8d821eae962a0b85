// src/math/scalar_field.rs

use super::error::{MathError, MathResult};
use bevy::prelude::Resource;
use rand::Rng;
use std::ops::Range;

/// Trait für ein zweidimensionales Skalarfeld mit einem Wert pro Gitterpunkt.
/// Ermöglicht es der Zellklassifikation, auf verschiedenen Feldimplementierungen
/// zu operieren.
pub trait ScalarField2D {
    /// Anzahl der Gitterpunkte in x-Richtung.
    fn width(&self) -> usize;

    /// Anzahl der Gitterpunkte in y-Richtung.
    fn height(&self) -> usize;

    /// Gibt den Wert am Gitterpunkt (x, y) zurück, `None` außerhalb der Grenzen.
    fn sample(&self, x: usize, y: usize) -> Option<i32>;

    /// Anzahl der Zellen, die vier Eckpunkte im Feld haben.
    fn cell_dimensions(&self) -> (usize, usize) {
        (self.width().saturating_sub(1), self.height().saturating_sub(1))
    }
}

/// Festes, nach der Erzeugung unveränderliches Gitter aus Ganzzahl-Samples.
/// Die Daten liegen zeilenweise (y-major) in einem flachen Vec.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    values: Vec<i32>,
}

impl ScalarGrid {
    /// Erstellt ein Gitter aus einem flachen Puffer. Die Länge muss `width * height` sein.
    pub fn from_values(width: usize, height: usize, values: Vec<i32>) -> MathResult<Self> {
        if width == 0 || height == 0 {
            return Err(MathError::EmptyGrid { width, height });
        }
        let expected = width * height;
        if values.len() != expected {
            return Err(MathError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Füllt jeden Gitterpunkt über eine Funktion der Koordinaten.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> i32,
    ) -> MathResult<Self> {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self::from_values(width, height, values)
    }

    /// Gleichverteilte Zufallswerte aus `range`, auf Ganzzahlen abgeschnitten.
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        range: Range<f64>,
        rng: &mut R,
    ) -> MathResult<Self> {
        if range.is_empty() {
            return Err(MathError::InvalidConfiguration {
                message: format!("sample range {:?} is empty", range),
            });
        }
        Self::from_fn(width, height, |_, _| rng.random_range(range.clone()) as i32)
    }

    /// Konstantes Feld für Tests.
    #[cfg(test)]
    pub fn filled(width: usize, height: usize, value: i32) -> MathResult<Self> {
        Self::from_values(width, height, vec![value; width * height])
    }

    #[cfg(test)]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Iteriert über alle Gitterpunkte als (x, y, Wert).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % self.width, i / self.width, *v))
    }
}

impl ScalarField2D for ScalarGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> Option<i32> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }
}
