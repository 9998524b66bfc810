//! Staggered (hex-like) grid neighbor arithmetic
//!
//! On a staggered map every second row (or column) is shifted by half a cell,
//! so the four diagonal neighbors of a cell depend on the parity of its
//! coordinate along the stagger axis.

use serde::{Deserialize, Serialize};

/// Which axis the half-cell shift is applied along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaggerAxis {
    X,
    Y,
}

/// Whether odd or even rows/columns are the shifted ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StaggerIndex {
    #[default]
    Odd,
    Even,
}

/// Stagger configuration of a non-orthogonal map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaggerLayout {
    pub axis: StaggerAxis,
    pub index: StaggerIndex,
}

impl StaggerLayout {
    pub fn new(axis: StaggerAxis, index: StaggerIndex) -> Self {
        Self { axis, index }
    }

    /// True when column `x` is a shifted column (X stagger only).
    fn do_stagger_x(&self, x: i32) -> bool {
        self.axis == StaggerAxis::X && (x & 1 != 0) != (self.index == StaggerIndex::Even)
    }

    /// True when row `y` is a shifted row (Y stagger only).
    fn do_stagger_y(&self, y: i32) -> bool {
        self.axis == StaggerAxis::Y && (y & 1 != 0) != (self.index == StaggerIndex::Even)
    }

    pub fn top_left(&self, x: i32, y: i32) -> (i32, i32) {
        match self.axis {
            StaggerAxis::Y => {
                if self.do_stagger_y(y) {
                    (x, y - 1)
                } else {
                    (x - 1, y - 1)
                }
            }
            StaggerAxis::X => {
                if self.do_stagger_x(x) {
                    (x - 1, y)
                } else {
                    (x - 1, y - 1)
                }
            }
        }
    }

    pub fn top_right(&self, x: i32, y: i32) -> (i32, i32) {
        match self.axis {
            StaggerAxis::Y => {
                if self.do_stagger_y(y) {
                    (x + 1, y - 1)
                } else {
                    (x, y - 1)
                }
            }
            StaggerAxis::X => {
                if self.do_stagger_x(x) {
                    (x + 1, y)
                } else {
                    (x + 1, y - 1)
                }
            }
        }
    }

    pub fn bottom_left(&self, x: i32, y: i32) -> (i32, i32) {
        match self.axis {
            StaggerAxis::Y => {
                if self.do_stagger_y(y) {
                    (x, y + 1)
                } else {
                    (x - 1, y + 1)
                }
            }
            StaggerAxis::X => {
                if self.do_stagger_x(x) {
                    (x - 1, y + 1)
                } else {
                    (x - 1, y)
                }
            }
        }
    }

    pub fn bottom_right(&self, x: i32, y: i32) -> (i32, i32) {
        match self.axis {
            StaggerAxis::Y => {
                if self.do_stagger_y(y) {
                    (x + 1, y + 1)
                } else {
                    (x, y + 1)
                }
            }
            StaggerAxis::X => {
                if self.do_stagger_x(x) {
                    (x + 1, y + 1)
                } else {
                    (x + 1, y)
                }
            }
        }
    }
}
