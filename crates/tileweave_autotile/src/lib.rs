//! Wang tile terrain autotile system
//!
//! This crate implements a constraint-propagation fill engine for terrain
//! autotiling: regions of a tile layer are filled with tiles whose edge and
//! corner terrain colors match their neighbors, producing seamless
//! transitions (grass to sand to water) without placing every tile by hand.
//!
//! # Features
//! - Corner, Edge, and Mixed terrain set types
//! - Two-phase region fill: border seeding plus raster wavefront placement
//! - Single-cell fitting with lookahead for incomplete sets
//! - Probability-weighted tile selection with caller-controlled seeding
//! - Orthogonal and staggered (hex-like) grid topologies
//!
//! # Example
//!
//! ```rust,ignore
//! use tileweave_autotile::{
//!     Color, GridTopology, TerrainSetType, WangFiller, WangId, WangSet,
//! };
//! use tileweave_core::{Rect, Region, TileLayer};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use uuid::Uuid;
//!
//! // Create a wang set for a tileset
//! let tileset_id = Uuid::new_v4();
//! let mut wang_set = WangSet::new("Ground".to_string(), tileset_id, TerrainSetType::Corner);
//! wang_set.add_terrain("Grass".to_string(), Color::GREEN);
//! wang_set.add_terrain("Water".to_string(), Color::BLUE);
//! // ... register the wang id of every terrain tile
//!
//! // Fill a region so it connects with the surrounding terrain
//! let background = TileLayer::new("Ground".to_string(), tileset_id, 0, 0, 64, 64);
//! let mut target = background.clone();
//! let region = Region::from_rect(Rect::new(10, 10, 8, 8));
//!
//! let filler = WangFiller::new(&wang_set, GridTopology::Orthogonal);
//! let mut rng = SmallRng::seed_from_u64(0);
//! let report = filler.fill_region(&mut target, &background, &region, &mut rng);
//! for (x, y) in &report.unplaced {
//!     eprintln!("no fitting tile at {x},{y}");
//! }
//! ```

pub mod config;
pub mod filler;
pub mod random;
pub mod terrain;
pub mod wang;
pub mod wangset;

// Re-export main types at crate root
pub use config::{load_config, parse_config, save_config, AutotileConfig, ConfigError};
pub use filler::{FillReport, GridTopology, WangFiller};
pub use random::RandomPicker;
pub use terrain::{Color, Terrain, TerrainSetType};
pub use wang::{CellConstraint, WangId, WangPosition};
pub use wangset::{WangSet, WangSetError, WangTile};

// Re-export tileweave_core
pub use tileweave_core;
