pub mod contour;
pub mod cursor;
pub mod grid;

/// Farben der Darstellung
pub mod palette {
    use bevy::prelude::Color;

    pub const BACKGROUND: Color = Color::rgb(0.96, 0.96, 0.96);
    pub const GRID: Color = Color::BLACK;
    pub const CORNER_ABOVE: Color = Color::GRAY;
    pub const CORNER_BELOW: Color = Color::BLACK;
    pub const CONTOUR: Color = Color::RED;
    pub const CURSOR: Color = Color::BLUE;
}
