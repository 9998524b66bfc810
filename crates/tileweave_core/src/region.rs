//! Rectangles and rectangle-union regions

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of grid cells.
///
/// `left`/`right`/`top`/`bottom` are inclusive cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// Rightmost column still inside the rectangle
    pub fn right(&self) -> i32 {
        self.x + self.width as i32 - 1
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Bottommost row still inside the rectangle
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32 - 1
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty()
            && x >= self.left()
            && x <= self.right()
            && y >= self.top()
            && y <= self.bottom()
    }
}

/// A set of grid cells expressed as a union of rectangles.
///
/// Rectangles are expected to be disjoint. Operations that walk the region
/// visit rectangles in the order they were added, rows top-to-bottom within
/// each rectangle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add_rect(rect);
        region
    }

    /// Empty rectangles are ignored.
    pub fn add_rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Total number of cells covered, assuming disjoint rectangles.
    pub fn cell_count(&self) -> usize {
        self.rects
            .iter()
            .map(|r| (r.width * r.height) as usize)
            .sum()
    }
}
