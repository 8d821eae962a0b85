// src/math/algorithms/mod.rs

pub mod marching_squares;

pub use self::marching_squares::{
    CellClassification,
    CellCode,
    CellEdge,
    MarchingSquares,
    Segment, // Liniensegment zwischen zwei Kantenmitten
    Threshold,
};
