use crate::{Point, Size};

/// A cell in the wrapping grid. `column` can be fractional when the container width is not a
/// whole multiple of the item width.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: f32,
    pub column: f32,
}

/// Uniform wrapping-grid geometry, read from the reference item and its container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub unit: Size,
    pub wrapper_width: f32,
}

impl Grid {
    pub fn new(unit: Size, wrapper_width: f32) -> Self {
        Self {
            unit,
            wrapper_width,
        }
    }

    /// Items per row. Not rounded: a fractional remainder biases row-break detection.
    pub fn items_per_row(&self) -> f32 {
        self.wrapper_width / self.unit.width
    }

    /// Whether this geometry will produce non-finite positions.
    pub fn is_degenerate(&self) -> bool {
        let per_row = self.items_per_row();
        !(self.unit.width > 0.0) || !per_row.is_finite() || per_row <= 0.0
    }

    pub fn cell(&self, index: usize) -> Cell {
        let per_row = self.items_per_row();
        let i = index as f32;

        let mut row = ceil(i / per_row) - 1.0;
        let mut column = i;
        if i % per_row == 0.0 {
            // Exact multiple: first column of the next row.
            row += 1.0;
            column = 0.0;
        } else if i - per_row > 0.0 {
            column -= per_row * row;
        }
        Cell { row, column }
    }

    /// The item's natural slot in the grid.
    pub fn slot(&self, index: usize) -> Point {
        let cell = self.cell(index);
        Point {
            top: self.unit.height * cell.row,
            left: self.unit.width * cell.column,
        }
    }
}

#[cfg(feature = "std")]
fn ceil(x: f32) -> f32 {
    x.ceil()
}

#[cfg(not(feature = "std"))]
fn ceil(x: f32) -> f32 {
    // Every f32 at or above 2^23 in magnitude is already integral.
    if !x.is_finite() || !(-8_388_608.0..8_388_608.0).contains(&x) {
        return x;
    }
    let t = x as i32 as f32;
    if t < x { t + 1.0 } else { t }
}
