//! Hover handling for heat map cells.
//!
//! Each cell is either idle or hovered. Only one cell can be hovered at a
//! time; entering a new cell replaces the previous hover. The tooltip is never
//! removed from the page, it just switches between visible and hidden.

use crate::scene::CellRect;

/// Pixel offset of the tooltip from the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    Idle,
    Hovered,
}

/// Border style of a cell.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

pub const IDLE_STROKE: Stroke = Stroke {
    color: "#fff",
    width: 1.0,
};

pub const HOVER_STROKE: Stroke = Stroke {
    color: "#333",
    width: 2.0,
};

#[derive(Debug, PartialEq, Clone, Copy)]
struct Hover {
    index: usize,
    page_x: f64,
    page_y: f64,
}

/// Which cell, if any, is under the pointer.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct HoverState {
    hovered: Option<Hover>,
}

impl HoverState {
    pub fn pointer_enter(&mut self, index: usize, page_x: f64, page_y: f64) {
        self.hovered = Some(Hover {
            index,
            page_x,
            page_y,
        });
    }

    /// Ignored unless `index` is the hovered cell.
    pub fn pointer_leave(&mut self, index: usize) {
        if self.hovered_index() == Some(index) {
            self.hovered = None;
        }
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered.map(|h| h.index)
    }

    pub fn cell_state(&self, index: usize) -> CellState {
        if self.hovered_index() == Some(index) {
            CellState::Hovered
        } else {
            CellState::Idle
        }
    }

    pub fn stroke(&self, index: usize) -> Stroke {
        match self.cell_state(index) {
            CellState::Hovered => HOVER_STROKE,
            CellState::Idle => IDLE_STROKE,
        }
    }

    /// Tooltip for the hovered cell, hidden when nothing (or an unknown
    /// index) is hovered.
    pub fn tooltip(&self, cells: &[CellRect]) -> Tooltip {
        let Some(hover) = self.hovered else {
            return Tooltip::hidden();
        };
        let Some(cell) = cells.get(hover.index) else {
            return Tooltip::hidden();
        };
        Tooltip {
            visible: true,
            left: hover.page_x + TOOLTIP_OFFSET.0,
            top: hover.page_y + TOOLTIP_OFFSET.1,
            data_year: Some(cell.year),
            heading: format!("{} {}", cell.month_name, cell.year),
            temperature: format!("Temperature: {:.2}°C", cell.temperature),
            variance: format!("Variance: {}°C", signed(cell.variance)),
        }
    }
}

/// Two-decimal value with an explicit `+` for positive numbers.
pub fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// What the tooltip region should show.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Tooltip {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub data_year: Option<i32>,
    pub heading: String,
    pub temperature: String,
    pub variance: String,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Tooltip::default()
    }

    pub fn opacity(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }

    pub fn text(&self) -> String {
        format!("{}\n{}\n{}", self.heading, self.temperature, self.variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeatMapConfig;
    use crate::dataset::{Dataset, Record};
    use crate::scene::build_scene;

    fn scene_cells() -> Vec<CellRect> {
        let dataset = Dataset {
            base_temperature: 8.66,
            records: vec![
                Record {
                    year: 1753,
                    month: 1,
                    variance: -6.96,
                },
                Record {
                    year: 1753,
                    month: 2,
                    variance: -4.25,
                },
                Record {
                    year: 1753,
                    month: 3,
                    variance: 1.5,
                },
            ],
        };
        build_scene(&dataset, &HeatMapConfig::default()).unwrap().cells
    }

    #[test]
    fn test_hover_february_1753() {
        let cells = scene_cells();
        let mut hover = HoverState::default();
        assert!(!hover.tooltip(&cells).visible);

        hover.pointer_enter(1, 300.0, 200.0);
        let tooltip = hover.tooltip(&cells);
        assert!(tooltip.visible);
        assert_eq!(tooltip.opacity(), 1.0);
        assert_eq!(tooltip.data_year, Some(1753));
        assert_eq!((tooltip.left, tooltip.top), (310.0, 190.0));
        let text = tooltip.text();
        assert!(text.contains("February 1753"));
        assert!(text.contains("4.41"));
        assert!(text.contains("-4.25"));

        hover.pointer_leave(1);
        let tooltip = hover.tooltip(&cells);
        assert!(!tooltip.visible);
        assert_eq!(tooltip.opacity(), 0.0);
    }

    #[test]
    fn test_positive_variance_has_plus_sign() {
        let cells = scene_cells();
        let mut hover = HoverState::default();
        hover.pointer_enter(2, 0.0, 0.0);
        assert_eq!(hover.tooltip(&cells).variance, "Variance: +1.50°C");
        assert_eq!(signed(0.0), "0.00");
        assert_eq!(signed(2.5), "+2.50");
        assert_eq!(signed(-6.96), "-6.96");
    }

    #[test]
    fn test_stroke_follows_hover() {
        let mut hover = HoverState::default();
        assert_eq!(hover.stroke(0), IDLE_STROKE);
        hover.pointer_enter(0, 1.0, 1.0);
        assert_eq!(hover.cell_state(0), CellState::Hovered);
        assert_eq!(hover.stroke(0), HOVER_STROKE);
        assert_eq!(hover.stroke(1), IDLE_STROKE);
        hover.pointer_leave(0);
        assert_eq!(hover.stroke(0), IDLE_STROKE);
    }

    #[test]
    fn test_only_one_cell_hovered() {
        let mut hover = HoverState::default();
        hover.pointer_enter(0, 1.0, 1.0);
        hover.pointer_enter(2, 5.0, 5.0);
        assert_eq!(hover.cell_state(0), CellState::Idle);
        assert_eq!(hover.cell_state(2), CellState::Hovered);

        // a late leave from the old cell must not hide the new hover
        hover.pointer_leave(0);
        assert_eq!(hover.hovered_index(), Some(2));
    }

    fn changed_strokes(before: &HoverState, after: &HoverState, cells: usize) -> Vec<usize> {
        (0..cells)
            .filter(|&i| before.stroke(i) != after.stroke(i))
            .collect()
    }

    #[test]
    fn test_hover_moves_restyle_only_the_cells_involved() {
        let idle = HoverState::default();

        let mut first = idle;
        first.pointer_enter(4, 1.0, 1.0);
        assert_eq!(changed_strokes(&idle, &first, 3000), vec![4]);

        let mut second = first;
        second.pointer_enter(2999, 2.0, 2.0);
        assert_eq!(changed_strokes(&first, &second, 3000), vec![4, 2999]);

        // the pointer moved within the hovered cell
        let mut moved = second;
        moved.pointer_enter(2999, 3.0, 3.0);
        assert!(changed_strokes(&second, &moved, 3000).is_empty());

        let mut left = moved;
        left.pointer_leave(2999);
        assert_eq!(changed_strokes(&moved, &left, 3000), vec![2999]);
    }

    #[test]
    fn test_unknown_index_hides_tooltip() {
        let cells = scene_cells();
        let mut hover = HoverState::default();
        hover.pointer_enter(99, 1.0, 1.0);
        assert_eq!(hover.tooltip(&cells), Tooltip::hidden());
    }
}
