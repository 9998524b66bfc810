//! The Wang tile catalog
//!
//! A [`WangSet`] attaches terrain definitions to a tileset and records, per
//! tile, the wang id the tile satisfies when placed. Fill operations query it
//! for matching candidates.

use crate::terrain::{Color, Terrain, TerrainSetType};
use crate::wang::{WangId, WangPosition};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while building a [`WangSet`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WangSetError {
    #[error("terrain index {index} out of range (set has {count} terrains)")]
    TerrainOutOfRange { index: usize, count: usize },
    #[error("position {position:?} is not used by {set_type:?} sets")]
    PositionNotAllowed {
        position: WangPosition,
        set_type: TerrainSetType,
    },
}

/// A placeable tile annotated with the wang id it satisfies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WangTile {
    pub tile_id: u32,
    pub wang_id: WangId,
    /// Relative selection weight among equally good matches
    #[serde(default = "default_probability")]
    pub probability: f32,
}

fn default_probability() -> f32 {
    1.0
}

/// A terrain set attached to a tileset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WangSet {
    pub id: Uuid,
    pub name: String,
    /// Which tileset this wang set belongs to
    pub tileset_id: Uuid,
    /// Which slots tiles of this set constrain (Corner, Edge, or Mixed)
    pub set_type: TerrainSetType,
    /// List of terrains in this set (e.g., ["Grass", "Dirt", "Water"])
    pub terrains: Vec<Terrain>,
    /// The tile catalog, in registration order
    pub wang_tiles: Vec<WangTile>,
}

impl WangSet {
    pub fn new(name: String, tileset_id: Uuid, set_type: TerrainSetType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tileset_id,
            set_type,
            terrains: Vec::new(),
            wang_tiles: Vec::new(),
        }
    }

    /// Add a new terrain to this set, returning its index
    pub fn add_terrain(&mut self, name: String, color: Color) -> usize {
        self.terrains.push(Terrain::new(name, color));
        self.terrains.len() - 1
    }

    pub fn terrain_count(&self) -> usize {
        self.terrains.len()
    }

    pub fn terrain(&self, index: usize) -> Option<&Terrain> {
        self.terrains.get(index)
    }

    /// Register `tile_id` as satisfying `wang_id` with weight 1, replacing
    /// any previous registration of the same tile.
    pub fn set_tile_wang_id(&mut self, tile_id: u32, wang_id: WangId) -> Result<(), WangSetError> {
        self.add_wang_tile(WangTile {
            tile_id,
            wang_id,
            probability: 1.0,
        })
    }

    /// Register a catalog entry, validating its wang id against the set's
    /// terrains and slot scheme.
    pub fn add_wang_tile(&mut self, wang_tile: WangTile) -> Result<(), WangSetError> {
        for position in WangPosition::ALL {
            if let Some(color) = wang_tile.wang_id.color_at(position) {
                if !self.set_type.allows_position(position) {
                    return Err(WangSetError::PositionNotAllowed {
                        position,
                        set_type: self.set_type,
                    });
                }
                if color >= self.terrains.len() {
                    return Err(WangSetError::TerrainOutOfRange {
                        index: color,
                        count: self.terrains.len(),
                    });
                }
            }
        }

        if let Some(existing) = self
            .wang_tiles
            .iter_mut()
            .find(|t| t.tile_id == wang_tile.tile_id)
        {
            *existing = wang_tile;
        } else {
            self.wang_tiles.push(wang_tile);
        }
        Ok(())
    }

    pub fn wang_tiles(&self) -> &[WangTile] {
        &self.wang_tiles
    }

    /// The wang id a tile satisfies, if the tile is in this set
    pub fn wang_id_of_tile(&self, tile_id: u32) -> Option<WangId> {
        self.wang_tiles
            .iter()
            .find(|t| t.tile_id == tile_id)
            .map(|t| t.wang_id)
    }

    /// All catalog entries matching `wang_id`, treating its unconstrained
    /// slots as wildcards.
    pub fn find_matching_tiles(&self, wang_id: &WangId) -> Vec<&WangTile> {
        self.wang_tiles
            .iter()
            .filter(|t| wang_id.wildcard_matches(&t.wang_id))
            .collect()
    }

    /// True when some catalog entry matches `wang_id`, treating its
    /// unconstrained slots as wildcards.
    pub fn wild_wang_id_is_used(&self, wang_id: &WangId) -> bool {
        self.wang_tiles
            .iter()
            .any(|t| wang_id.wildcard_matches(&t.wang_id))
    }

    /// True when the catalog has a tile for every color combination over the
    /// slots the set type uses. A complete set can satisfy any reachable
    /// constraint.
    pub fn is_complete(&self) -> bool {
        let positions = self.set_type.active_positions();
        let colors = self.terrains.len() as u64;
        if colors == 0 || self.wang_tiles.is_empty() {
            return false;
        }
        let Some(full_size) = colors.checked_pow(positions.len() as u32) else {
            // More combinations than a finite catalog could hold.
            return false;
        };

        let mut unique: HashSet<[Option<usize>; 8]> = HashSet::new();
        for wang_tile in &self.wang_tiles {
            if positions
                .iter()
                .all(|&p| wang_tile.wang_id.color_at(p).is_some())
            {
                // Key on the active slots only, so extra wildcard slots in
                // one entry cannot inflate the count.
                let mut key = [None; 8];
                for &p in positions {
                    key[p.index()] = wang_tile.wang_id.color_at(p);
                }
                unique.insert(key);
            }
        }

        unique.len() as u64 >= full_size
    }

    /// Selection weight of a catalog entry: the tile's own probability scaled
    /// by the probability of every terrain it references.
    pub fn tile_probability(&self, wang_tile: &WangTile) -> f32 {
        let mut probability = wang_tile.probability;
        for position in WangPosition::ALL {
            if let Some(color) = wang_tile.wang_id.color_at(position) {
                if let Some(terrain) = self.terrains.get(color) {
                    probability *= terrain.probability;
                }
            }
        }
        probability
    }

    /// The constraint implied at a cell by its 8 surrounding tiles, given in
    /// [`WangPosition`] order. Edges come from the facing neighbor's opposite
    /// edge; corners from the diagonal neighbor's opposite corner, falling
    /// back to the shared corners of the two flanking edge neighbors.
    pub fn wang_id_from_surrounding(&self, surrounding: &[Option<u32>; 8]) -> WangId {
        let mut neighbor_ids = [WangId::WILDCARD; 8];
        for (i, tile) in surrounding.iter().enumerate() {
            if let Some(tile_id) = tile {
                if let Some(wang_id) = self.wang_id_of_tile(*tile_id) {
                    neighbor_ids[i] = wang_id;
                }
            }
        }

        let mut result = WangId::WILDCARD;
        for position in WangPosition::ALL {
            let i = position.index();
            let mut color = neighbor_ids[i].color_at(position.opposite());

            if position.is_corner() {
                if color.is_none() {
                    // The edge neighbor counter-clockwise of this corner
                    // shares the corner point too.
                    color = neighbor_ids[position.prev().index()].colors[(i + 2) % 8];
                }
                if color.is_none() {
                    // And so does the edge neighbor clockwise of it.
                    color = neighbor_ids[position.next().index()].colors[(i + 6) % 8];
                }
            }

            result.colors[i] = color;
        }
        result
    }
}
