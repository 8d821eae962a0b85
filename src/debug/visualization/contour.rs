use super::palette;
use crate::math::algorithms::marching_squares::CellClassification;
use crate::sim::resources::GridLayout;
use crate::sim::scanner::ScanController;
use bevy::prelude::*;

/// Alle Konturlinien der bisherigen Einträge in Bildschirmpixeln.
/// Reine Funktion von Einträgen und Gittergeometrie.
pub fn contour_lines(records: &[CellClassification], layout: &GridLayout) -> Vec<(Vec2, Vec2)> {
    records
        .iter()
        .flat_map(|record| {
            record.code.segments().iter().map(move |segment| {
                let (from, to) = segment.endpoints();
                (
                    layout.cell_point_to_screen(record.x, record.y, from),
                    layout.cell_point_to_screen(record.x, record.y, to),
                )
            })
        })
        .collect()
}

/// Zeichnet jeden Frame die komplette Sequenz neu; Einträge werden nie gelöscht.
pub fn draw_contours_system(
    controller: Res<ScanController>,
    layout: Res<GridLayout>,
    mut gizmos: Gizmos,
) {
    for (from, to) in contour_lines(controller.records(), &layout) {
        gizmos.line_2d(
            layout.screen_to_world(from),
            layout.screen_to_world(to),
            palette::CONTOUR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::algorithms::marching_squares::{CellCode, Threshold};
    use crate::math::scalar_field::ScalarGrid;
    use approx::assert_relative_eq;

    fn layout_17x11() -> GridLayout {
        GridLayout::new(17, 11, 50.0, 50.0, Vec2::new(800.0, 600.0)).unwrap()
    }

    fn full_scan(field: &ScalarGrid) -> ScanController {
        let mut controller = ScanController::for_field(field, 5);
        while !controller.is_done() {
            controller.tick(field, Threshold(10));
        }
        controller
    }

    #[test]
    fn test_horizontal_case_in_screen_space() {
        let record = CellClassification {
            code: CellCode::new(3).unwrap(),
            x: 2,
            y: 3,
        };
        let lines = contour_lines(&[record], &layout_17x11());
        assert_eq!(lines.len(), 1);
        let (a, b) = lines[0];
        assert_relative_eq!(a.x, 150.0);
        assert_relative_eq!(a.y, 225.0);
        assert_relative_eq!(b.x, 200.0);
        assert_relative_eq!(b.y, 225.0);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let field = ScalarGrid::from_fn(17, 11, |x, y| ((x * 5 + y * 3) % 20) as i32).unwrap();
        let controller = full_scan(&field);
        let layout = layout_17x11();
        let first = contour_lines(controller.records(), &layout);
        let second = contour_lines(controller.records(), &layout);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_uniform_fields_draw_nothing() {
        for value in [5, 15] {
            let field = ScalarGrid::filled(17, 11, value).unwrap();
            let controller = full_scan(&field);
            assert_eq!(controller.records().len(), 160);
            assert!(contour_lines(controller.records(), &layout_17x11()).is_empty());
        }
    }

    #[test]
    fn test_checkerboard_draws_two_segments_per_cell() {
        let field =
            ScalarGrid::from_fn(17, 11, |x, y| if (x + y) % 2 == 0 { 15 } else { 5 }).unwrap();
        let controller = full_scan(&field);
        let lines = contour_lines(controller.records(), &layout_17x11());
        assert_eq!(lines.len(), 2 * 160);
    }

    #[test]
    fn test_lines_stay_inside_their_cell() {
        let layout = layout_17x11();
        for code in CellCode::all() {
            let record = CellClassification { code, x: 4, y: 2 };
            let origin = layout.vertex_to_screen(4, 2);
            for (a, b) in contour_lines(&[record], &layout) {
                for p in [a, b] {
                    assert!(p.x >= origin.x && p.x <= origin.x + layout.cell_size);
                    assert!(p.y >= origin.y && p.y <= origin.y + layout.cell_size);
                }
            }
        }
    }
}
