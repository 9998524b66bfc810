//! Terrain types and data structures
//!
//! A terrain ("Wang color") is one of the materials a tile set can blend
//! between, e.g. grass, dirt, water.

use crate::wang::WangPosition;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simple RGBA color for terrain visualization (no engine dependency)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Type of terrain set - determines which of the 8 slots tiles use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TerrainSetType {
    /// 4 corners per tile (TL, TR, BL, BR)
    /// Good for basic terrain transitions
    #[default]
    Corner,
    /// 4 edges per tile (Top, Right, Bottom, Left)
    /// Good for roads, platforms, paths
    Edge,
    /// 4 corners + 4 edges per tile
    /// Most flexible, requires more tiles
    Mixed,
}

impl TerrainSetType {
    /// The slots tiles of this set type may constrain, in clockwise order.
    pub fn active_positions(&self) -> &'static [WangPosition] {
        use WangPosition::*;
        match self {
            TerrainSetType::Corner => &[TopRight, BottomRight, BottomLeft, TopLeft],
            TerrainSetType::Edge => &[Top, Right, Bottom, Left],
            TerrainSetType::Mixed => &WangPosition::ALL,
        }
    }

    pub fn position_count(&self) -> usize {
        self.active_positions().len()
    }

    pub fn allows_position(&self, position: WangPosition) -> bool {
        match self {
            TerrainSetType::Corner => position.is_corner(),
            TerrainSetType::Edge => !position.is_corner(),
            TerrainSetType::Mixed => true,
        }
    }
}

/// A terrain type within a set (e.g., "Grass", "Dirt", "Water")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    pub id: Uuid,
    pub name: String,
    /// Display color for UI visualization
    pub color: Color,
    /// Relative selection weight applied to every tile using this terrain
    #[serde(default = "default_probability")]
    pub probability: f32,
    /// Representative tile for this terrain (shown in UI)
    pub icon_tile: Option<u32>,
}

fn default_probability() -> f32 {
    1.0
}

impl Terrain {
    pub fn new(name: String, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            color,
            probability: 1.0,
            icon_tile: None,
        }
    }
}
