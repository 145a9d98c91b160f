use crate::{Point, Size};

/// Read-only layout queries answered by the host.
///
/// Values must reflect committed layout at call time. The grid is assumed uniform: every item
/// shares the reference item's size.
pub trait Layout {
    /// Rendered width of the container.
    fn container_width(&self) -> f32;
    /// Rendered size of the grid's first child.
    fn reference_size(&self) -> Size;
    /// Position of the item at `index` relative to its offset parent.
    fn offset_of(&self, index: usize) -> Point;
}

impl<L: Layout + ?Sized> Layout for &L {
    fn container_width(&self) -> f32 {
        (**self).container_width()
    }

    fn reference_size(&self) -> Size {
        (**self).reference_size()
    }

    fn offset_of(&self, index: usize) -> Point {
        (**self).offset_of(index)
    }
}

/// A uniform left-to-right, top-to-bottom wrapping grid.
///
/// Useful for headless hosts (TUIs, tests) that have no box layout of their own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowLayout {
    pub item: Size,
    pub container_width: f32,
}

impl FlowLayout {
    pub fn new(item: Size, container_width: f32) -> Self {
        Self {
            item,
            container_width,
        }
    }

    /// Whole items that fit on one row (at least one).
    pub fn columns(&self) -> usize {
        if !(self.item.width > 0.0) {
            return 1;
        }
        let fit = (self.container_width / self.item.width) as usize;
        fit.max(1)
    }
}

impl Layout for FlowLayout {
    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn reference_size(&self) -> Size {
        self.item
    }

    fn offset_of(&self, index: usize) -> Point {
        let columns = self.columns();
        let row = (index / columns) as f32;
        let column = (index % columns) as f32;
        Point {
            top: row * self.item.height,
            left: column * self.item.width,
        }
    }
}
