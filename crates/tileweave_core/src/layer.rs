//! Tile layer storage

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangular tile grid with a position offset.
///
/// `tiles` is row-major; `None` means the cell is empty. Reads outside the
/// grid return empty and writes outside it are ignored, so callers can probe
/// neighbor cells without bounds checks. Coordinates are local to the layer;
/// subtract [`position`](Self::position) from absolute map coordinates before
/// access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// The tileset the tile indices refer to
    pub tileset_id: Uuid,
    /// Tile data - None means empty, Some(idx) is a tile index
    pub tiles: Vec<Option<u32>>,
}

impl TileLayer {
    pub fn new(name: String, tileset_id: Uuid, x: i32, y: i32, width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            name,
            x,
            y,
            width,
            height,
            tileset_id,
            tiles: vec![None; size],
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Tile at layer-local `(x, y)`; out-of-bounds cells read as empty.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y)
            .and_then(|idx| self.tiles.get(idx).copied().flatten())
    }

    /// Write a tile at layer-local `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Option<u32>) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    /// Set every cell to `tile`.
    pub fn fill(&mut self, tile: Option<u32>) {
        self.tiles.fill(tile);
    }
}
