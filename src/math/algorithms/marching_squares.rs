// src/math/algorithms/marching_squares.rs

use crate::math::scalar_field::ScalarField2D;
use bevy::math::Vec2;

/// Schwellenwert-Prädikat: ein Sample liegt "darüber", wenn `value >= level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(pub i32);

impl Threshold {
    pub fn is_above(&self, value: i32) -> bool {
        value >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(10)
    }
}

/// 4-Bit-Eckmuster einer Zelle.
/// Bit 1: unten-links (x, y), Bit 2: unten-rechts (x+1, y),
/// Bit 4: oben-rechts (x+1, y+1), Bit 8: oben-links (x, y+1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCode(u8);

impl CellCode {
    pub const BOTTOM_LEFT: u8 = 1;
    pub const BOTTOM_RIGHT: u8 = 2;
    pub const TOP_RIGHT: u8 = 4;
    pub const TOP_LEFT: u8 = 8;

    pub fn new(bits: u8) -> Option<Self> {
        (bits < 16).then_some(Self(bits))
    }

    pub fn from_corners(
        bottom_left: bool,
        bottom_right: bool,
        top_right: bool,
        top_left: bool,
    ) -> Self {
        let mut bits = 0;
        if bottom_left {
            bits |= Self::BOTTOM_LEFT;
        }
        if bottom_right {
            bits |= Self::BOTTOM_RIGHT;
        }
        if top_right {
            bits |= Self::TOP_RIGHT;
        }
        if top_left {
            bits |= Self::TOP_LEFT;
        }
        Self(bits)
    }

    /// Alle 16 Codes in aufsteigender Reihenfolge.
    pub fn all() -> impl Iterator<Item = CellCode> {
        (0..16).map(CellCode)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn corner(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    /// Bit-Inversion: 15 - c.
    pub fn complement(self) -> Self {
        Self(15 - self.0)
    }

    /// 0 und 15: alle Ecken auf derselben Seite, keine Kontur.
    pub fn is_uniform(self) -> bool {
        self.0 == 0 || self.0 == 15
    }

    pub fn is_saddle(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    pub fn segments(self) -> &'static [Segment] {
        CASE_TABLE[self.0 as usize]
    }
}

/// Kante einer Zelle. Konturpunkte liegen immer auf der Kantenmitte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellEdge {
    /// zwischen unten-links und unten-rechts
    Bottom,
    /// zwischen unten-rechts und oben-rechts
    Right,
    /// zwischen oben-rechts und oben-links
    Top,
    /// zwischen oben-links und unten-links
    Left,
}

impl CellEdge {
    pub const ALL: [CellEdge; 4] = [
        CellEdge::Bottom,
        CellEdge::Right,
        CellEdge::Top,
        CellEdge::Left,
    ];

    /// Kantenmitte in Zellkoordinaten: u entlang x, v entlang der Gitterzeile (y+).
    pub fn midpoint(self) -> Vec2 {
        match self {
            CellEdge::Bottom => Vec2::new(0.5, 0.0),
            CellEdge::Right => Vec2::new(1.0, 0.5),
            CellEdge::Top => Vec2::new(0.5, 1.0),
            CellEdge::Left => Vec2::new(0.0, 0.5),
        }
    }

    /// Die beiden Ecken (als Bitmasken), die diese Kante verbindet.
    pub fn corners(self) -> (u8, u8) {
        match self {
            CellEdge::Bottom => (CellCode::BOTTOM_LEFT, CellCode::BOTTOM_RIGHT),
            CellEdge::Right => (CellCode::BOTTOM_RIGHT, CellCode::TOP_RIGHT),
            CellEdge::Top => (CellCode::TOP_RIGHT, CellCode::TOP_LEFT),
            CellEdge::Left => (CellCode::TOP_LEFT, CellCode::BOTTOM_LEFT),
        }
    }

    /// true, wenn die Endecken dieser Kante unterschiedlich klassifiziert sind.
    pub fn is_crossed_by(self, code: CellCode) -> bool {
        let (a, b) = self.corners();
        code.corner(a) != code.corner(b)
    }
}

/// Liniensegment zwischen zwei Kantenmitten einer Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: CellEdge,
    pub to: CellEdge,
}

impl Segment {
    pub const fn new(from: CellEdge, to: CellEdge) -> Self {
        Self { from, to }
    }

    /// Endpunkte in Zellkoordinaten ([0,1] x [0,1]).
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (self.from.midpoint(), self.to.midpoint())
    }

    /// Segment mit sortierten Kanten, für Vergleiche unabhängig von der Richtung.
    #[cfg(test)]
    pub fn normalized(&self) -> Self {
        if self.from <= self.to {
            *self
        } else {
            Self::new(self.to, self.from)
        }
    }
}

use CellEdge::{Bottom, Left, Right, Top};

const CUT_BOTTOM_LEFT: Segment = Segment::new(Left, Bottom);
const CUT_BOTTOM_RIGHT: Segment = Segment::new(Bottom, Right);
const CUT_TOP_RIGHT: Segment = Segment::new(Right, Top);
const CUT_TOP_LEFT: Segment = Segment::new(Left, Top);
const HORIZONTAL: Segment = Segment::new(Left, Right);
const VERTICAL: Segment = Segment::new(Bottom, Top);

// Sattelfälle 5 und 10 schneiden beide die Ecken unten-links und oben-rechts ab,
// damit c und 15 - c dieselbe Geometrie ergeben.
static CASE_TABLE: [&[Segment]; 16] = [
    &[],                               // 0000
    &[CUT_BOTTOM_LEFT],                // 0001
    &[CUT_BOTTOM_RIGHT],               // 0010
    &[HORIZONTAL],                     // 0011
    &[CUT_TOP_RIGHT],                  // 0100
    &[CUT_BOTTOM_LEFT, CUT_TOP_RIGHT], // 0101 Sattel
    &[VERTICAL],                       // 0110
    &[CUT_TOP_LEFT],                   // 0111
    &[CUT_TOP_LEFT],                   // 1000
    &[VERTICAL],                       // 1001
    &[CUT_BOTTOM_LEFT, CUT_TOP_RIGHT], // 1010 Sattel
    &[CUT_TOP_RIGHT],                  // 1011
    &[HORIZONTAL],                     // 1100
    &[CUT_BOTTOM_RIGHT],               // 1101
    &[CUT_BOTTOM_LEFT],                // 1110
    &[],                               // 1111
];

/// Ein klassifizierter Gitterzellen-Eintrag. Die Zelle hat ihre untere linke Ecke bei (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellClassification {
    pub code: CellCode,
    pub x: usize,
    pub y: usize,
}

pub struct MarchingSquares;

impl MarchingSquares {
    /// Klassifiziert die Zelle mit unterer linker Ecke (x, y).
    /// `None`, wenn die Zelle keinen rechten oder oberen Nachbarn im Feld hat.
    pub fn classify_cell<F: ScalarField2D + ?Sized>(
        field: &F,
        threshold: Threshold,
        x: usize,
        y: usize,
    ) -> Option<CellClassification> {
        let bottom_left = field.sample(x, y)?;
        let bottom_right = field.sample(x + 1, y)?;
        let top_right = field.sample(x + 1, y + 1)?;
        let top_left = field.sample(x, y + 1)?;

        let code = CellCode::from_corners(
            threshold.is_above(bottom_left),
            threshold.is_above(bottom_right),
            threshold.is_above(top_right),
            threshold.is_above(top_left),
        );
        Some(CellClassification { code, x, y })
    }

    /// Klassifiziert alle gültigen Zellen in Zeilenreihenfolge.
    /// Referenz für den schrittweisen Scan in den Tests.
    #[cfg(test)]
    pub fn classify_all<F: ScalarField2D + ?Sized>(
        field: &F,
        threshold: Threshold,
    ) -> Vec<CellClassification> {
        let (cols, rows) = field.cell_dimensions();
        let mut cells = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                if let Some(cell) = Self::classify_cell(field, threshold, x, y) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::scalar_field::ScalarGrid;
    use std::collections::HashSet;

    fn segment_set(code: CellCode) -> HashSet<Segment> {
        code.segments().iter().map(Segment::normalized).collect()
    }

    #[test]
    fn test_uniform_codes_have_no_segments() {
        for bits in [0, 15] {
            let code = CellCode::new(bits).unwrap();
            assert!(code.is_uniform());
            assert!(code.segments().is_empty(), "Code {} sollte leer sein", bits);
        }
    }

    #[test]
    fn test_saddle_codes_have_two_disjoint_segments() {
        for bits in [5, 10] {
            let code = CellCode::new(bits).unwrap();
            assert!(code.is_saddle());
            let segments = code.segments();
            assert_eq!(segments.len(), 2, "Sattel {} braucht zwei Segmente", bits);

            let (a0, a1) = segments[0].endpoints();
            let (b0, b1) = segments[1].endpoints();
            for p in [a0, a1] {
                assert!(p != b0 && p != b1, "Sattel {}: gemeinsamer Endpunkt {:?}", bits, p);
            }
        }
    }

    #[test]
    fn test_single_segment_codes_cross_differing_edges() {
        for code in CellCode::all().filter(|c| !c.is_uniform() && !c.is_saddle()) {
            let segments = code.segments();
            assert_eq!(segments.len(), 1, "Code {:?}", code);

            let crossed: HashSet<CellEdge> = CellEdge::ALL
                .into_iter()
                .filter(|edge| edge.is_crossed_by(code))
                .collect();
            let used: HashSet<CellEdge> = [segments[0].from, segments[0].to].into_iter().collect();
            assert_eq!(crossed, used, "Code {:?} schneidet falsche Kanten", code);
        }
    }

    #[test]
    fn test_saddle_segments_cross_differing_edges() {
        // Beim Sattel sind alle vier Kanten geschnitten, jede genau einmal.
        for bits in [5, 10] {
            let code = CellCode::new(bits).unwrap();
            let mut edges: Vec<CellEdge> = code
                .segments()
                .iter()
                .flat_map(|s| [s.from, s.to])
                .collect();
            edges.sort();
            assert_eq!(edges, CellEdge::ALL.to_vec());
            assert!(CellEdge::ALL.iter().all(|e| e.is_crossed_by(code)));
        }
    }

    #[test]
    fn test_complementary_codes_are_identical() {
        for code in CellCode::all() {
            assert_eq!(
                segment_set(code),
                segment_set(code.complement()),
                "Code {:?} vs {:?}",
                code,
                code.complement()
            );
        }
    }

    #[test]
    fn test_endpoints_are_edge_midpoints() {
        let midpoints: Vec<Vec2> = CellEdge::ALL.iter().map(|e| e.midpoint()).collect();
        for code in CellCode::all() {
            for segment in code.segments() {
                let (a, b) = segment.endpoints();
                assert!(midpoints.contains(&a) && midpoints.contains(&b));
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_code_new_rejects_out_of_range() {
        assert!(CellCode::new(16).is_none());
        assert_eq!(CellCode::new(15).map(CellCode::bits), Some(15));
    }

    #[test]
    fn test_from_corners_bit_order() {
        assert_eq!(CellCode::from_corners(true, false, false, false).bits(), 1);
        assert_eq!(CellCode::from_corners(false, true, false, false).bits(), 2);
        assert_eq!(CellCode::from_corners(false, false, true, false).bits(), 4);
        assert_eq!(CellCode::from_corners(false, false, false, true).bits(), 8);
        assert_eq!(CellCode::from_corners(true, true, true, true).bits(), 15);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let t = Threshold::default();
        assert!(t.is_above(10));
        assert!(!t.is_above(9));
    }

    #[test]
    fn test_classify_cell_uses_surrounding_samples() {
        // Nur (1, 0) liegt über dem Schwellenwert.
        let field =
            ScalarGrid::from_fn(3, 2, |x, y| if (x, y) == (1, 0) { 15 } else { 5 }).unwrap();
        let left = MarchingSquares::classify_cell(&field, Threshold(10), 0, 0).unwrap();
        let right = MarchingSquares::classify_cell(&field, Threshold(10), 1, 0).unwrap();
        assert_eq!(left.code.bits(), CellCode::BOTTOM_RIGHT);
        assert_eq!(right.code.bits(), CellCode::BOTTOM_LEFT);
    }

    #[test]
    fn test_classify_cell_rejects_last_row_and_column() {
        let field = ScalarGrid::filled(3, 2, 0).unwrap();
        assert!(MarchingSquares::classify_cell(&field, Threshold(10), 2, 0).is_none());
        assert!(MarchingSquares::classify_cell(&field, Threshold(10), 0, 1).is_none());
    }

    #[test]
    fn test_classify_all_row_major() {
        let field = ScalarGrid::filled(4, 3, 0).unwrap();
        let cells = MarchingSquares::classify_all(&field, Threshold(10));
        let coords: Vec<(usize, usize)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }
}
