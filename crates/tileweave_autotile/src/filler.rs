//! The Wang tile fill engine
//!
//! Fills cells and regions of a tile layer with tiles from a [`WangSet`] so
//! that adjacent terrain colors match. Region fills run in two phases: border
//! constraints are imported from the surrounding background, then tiles are
//! placed in raster order with each placement narrowing the remaining freedom
//! of its not-yet-placed neighbors. Placement is forward-only; a cell is
//! never revisited once a tile has been chosen for it.

use rand::Rng;
use tileweave_core::{Grid, Region, StaggerAxis, StaggerLayout, TileLayer};

use crate::random::RandomPicker;
use crate::wang::{CellConstraint, WangId, WangPosition};
use crate::wangset::{WangSet, WangTile};

/// Offsets to the 8 surrounding cells of an orthogonal grid, in
/// [`WangPosition`] order (y grows downward).
const AROUND_TILE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),  // Top
    (1, -1),  // TopRight
    (1, 0),   // Right
    (1, 1),   // BottomRight
    (0, 1),   // Bottom
    (-1, 1),  // BottomLeft
    (-1, 0),  // Left
    (-1, -1), // TopLeft
];

/// How cell adjacency is computed for a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTopology {
    /// Plain square grid; neighbors are the 8 surrounding cells.
    Orthogonal,
    /// Staggered (hex-like) grid; the straight neighbors come from the
    /// stagger layout's diagonal primitives.
    Staggered(StaggerLayout),
}

impl GridTopology {
    /// The 8 neighbor coordinates of `(x, y)`, in [`WangPosition`] order.
    pub fn surrounding_points(&self, x: i32, y: i32) -> [(i32, i32); 8] {
        let mut points = [(0, 0); 8];
        match self {
            GridTopology::Orthogonal => {
                for (point, (dx, dy)) in points.iter_mut().zip(AROUND_TILE_OFFSETS) {
                    *point = (x + dx, y + dy);
                }
            }
            GridTopology::Staggered(layout) => {
                points[WangPosition::Top.index()] = layout.top_right(x, y);
                points[WangPosition::Right.index()] = layout.bottom_right(x, y);
                points[WangPosition::Bottom.index()] = layout.bottom_left(x, y);
                points[WangPosition::Left.index()] = layout.top_left(x, y);

                // The remaining four are straight steps whose stride depends
                // on the stagger axis: two cells along it, one across.
                let (tr, br, bl, tl) = match layout.axis {
                    StaggerAxis::X => ((2, 0), (0, 1), (-2, 0), (0, -1)),
                    StaggerAxis::Y => ((1, 0), (0, 2), (-1, 0), (0, -2)),
                };
                points[WangPosition::TopRight.index()] = (x + tr.0, y + tr.1);
                points[WangPosition::BottomRight.index()] = (x + br.0, y + br.1);
                points[WangPosition::BottomLeft.index()] = (x + bl.0, y + bl.1);
                points[WangPosition::TopLeft.index()] = (x + tl.0, y + tl.1);
            }
        }
        points
    }
}

/// Result summary of a region fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Cells for which no candidate passed the hard-constraint filter,
    /// left unplaced in the target layer.
    pub unplaced: Vec<(i32, i32)>,
}

impl FillReport {
    /// True when every visited cell received a tile.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Fills cells and regions with tiles chosen from a [`WangSet`].
pub struct WangFiller<'a> {
    wang_set: &'a WangSet,
    topology: GridTopology,
}

impl<'a> WangFiller<'a> {
    pub fn new(wang_set: &'a WangSet, topology: GridTopology) -> Self {
        Self { wang_set, topology }
    }

    /// Resolve the tile occupying `point`: inside the fill region the
    /// in-progress `front` layer wins, elsewhere the background.
    fn cell_at(
        &self,
        back: &TileLayer,
        front: &TileLayer,
        region: &Region,
        point: (i32, i32),
    ) -> Option<u32> {
        let (x, y) = point;
        if region.contains(x, y) {
            front.tile_at(x - front.x, y - front.y)
        } else {
            back.tile_at(x - back.x, y - back.y)
        }
    }

    /// The constraint implied at `point` by all 8 resolved neighbors.
    pub fn wang_id_from_surroundings(
        &self,
        back: &TileLayer,
        front: &TileLayer,
        region: &Region,
        point: (i32, i32),
    ) -> WangId {
        let points = self.topology.surrounding_points(point.0, point.1);
        let mut surrounding = [None; 8];
        for (tile, p) in surrounding.iter_mut().zip(points) {
            *tile = self.cell_at(back, front, region, p);
        }
        self.wang_set.wang_id_from_surrounding(&surrounding)
    }

    /// Like [`wang_id_from_surroundings`](Self::wang_id_from_surroundings),
    /// but neighbors inside the region are ignored: only true background
    /// tiles contribute. This is the view used when importing border
    /// constraints.
    pub fn wang_id_from_background(
        &self,
        back: &TileLayer,
        region: &Region,
        point: (i32, i32),
    ) -> WangId {
        let points = self.topology.surrounding_points(point.0, point.1);
        let mut surrounding = [None; 8];
        for (tile, p) in surrounding.iter_mut().zip(points) {
            if !region.contains(p.0, p.1) {
                *tile = back.tile_at(p.0 - back.x, p.1 - back.y);
            }
        }
        self.wang_set.wang_id_from_surrounding(&surrounding)
    }

    /// Choose a tile for a single cell from the constraint implied by its
    /// surroundings.
    ///
    /// With a complete set any matching candidate is safe and one is picked
    /// by weighted random choice. With an incomplete set, candidates are
    /// drawn without replacement and each is checked against every
    /// still-empty neighbor: if placing it would leave some neighbor with a
    /// constraint no tile can satisfy, the candidate is discarded and
    /// another drawn. When the pool runs dry the last candidate drawn is
    /// returned anyway rather than giving up.
    ///
    /// Returns `None` only when no catalog tile matches the cell's
    /// constraint at all.
    pub fn find_fitting_tile(
        &self,
        back: &TileLayer,
        front: &TileLayer,
        region: &Region,
        point: (i32, i32),
        rng: &mut impl Rng,
    ) -> Option<WangTile> {
        let wang_id = self.wang_id_from_surroundings(back, front, region, point);

        let mut candidates = RandomPicker::new();
        for wang_tile in self.wang_set.find_matching_tiles(&wang_id) {
            candidates.add(self.wang_set.tile_probability(wang_tile), *wang_tile);
        }

        if candidates.is_empty() {
            return None;
        }

        if self.wang_set.is_complete() {
            return candidates.pick(rng).copied();
        }

        let mut wang_tile = None;
        while let Some(candidate) = candidates.take(rng) {
            wang_tile = Some(candidate);

            let points = self.topology.surrounding_points(point.0, point.1);
            let mut fits = true;
            for (i, adjacent_point) in points.iter().enumerate() {
                if self.cell_at(back, front, region, *adjacent_point).is_some() {
                    continue;
                }

                let mut adjacent =
                    self.wang_id_from_surroundings(back, front, region, *adjacent_point);
                adjacent.update_to_adjacent(
                    &candidate.wang_id,
                    WangPosition::from_index(i).opposite(),
                );

                if !self.wang_set.wild_wang_id_is_used(&adjacent) {
                    fits = false;
                    break;
                }
            }

            if fits {
                break;
            }
        }

        wang_tile
    }

    /// Find the catalog tile best matching `constraint`, breaking ties by
    /// weighted random choice.
    ///
    /// Hard slots filter candidates outright; the remaining candidates are
    /// scored by how many of the 8 slots disagree with the desired colors,
    /// and only minimum-penalty candidates stay in the running. Returns
    /// `None` when no tile passes the hard filter.
    pub fn best_match(&self, constraint: &CellConstraint, rng: &mut impl Rng) -> Option<WangTile> {
        let mut matches: RandomPicker<WangTile> = RandomPicker::new();
        let mut lowest_penalty = u32::MAX;

        // Linear scan; catalogs are small relative to fill regions.
        for wang_tile in self.wang_set.wang_tiles() {
            if !constraint.hard_slots_match(&wang_tile.wang_id) {
                continue;
            }

            let penalty = constraint.desired.penalty_against(&wang_tile.wang_id);
            if penalty > lowest_penalty {
                continue;
            }
            if penalty < lowest_penalty {
                matches.clear();
                lowest_penalty = penalty;
            }
            matches.add(self.wang_set.tile_probability(wang_tile), *wang_tile);
        }

        matches.pick(rng).copied()
    }

    /// Fill `region` of `target`, importing border constraints from `back`.
    pub fn fill_region(
        &self,
        target: &mut TileLayer,
        back: &TileLayer,
        region: &Region,
        rng: &mut impl Rng,
    ) -> FillReport {
        self.fill_region_seeded(target, back, region, Grid::new(), rng)
    }

    /// Fill `region` of `target`, starting from caller-provided constraints.
    ///
    /// Phase A walks every rectangle's border and merges the wang id of each
    /// orthogonally-adjacent outside tile into the facing cell, so the fill
    /// connects seamlessly with the surrounding terrain. Phase B visits the
    /// region in raster order, placing the best-matching tile per cell and
    /// propagating its colors into the constraints of neighbors that are
    /// still empty. Cells no tile can satisfy are left empty and reported.
    pub fn fill_region_seeded(
        &self,
        target: &mut TileLayer,
        back: &TileLayer,
        region: &Region,
        mut constraints: Grid<CellConstraint>,
        rng: &mut impl Rng,
    ) -> FillReport {
        // Phase A: border seeding. Orthogonal neighbors only; diagonal seams
        // of staggered maps are not corrected here.
        for rect in region.rects() {
            for x in rect.left()..=rect.right() {
                if !region.contains(x, rect.top() - 1) {
                    self.merge_border(
                        &mut constraints,
                        back,
                        (x, rect.top() - 1),
                        (x, rect.top()),
                        WangPosition::Top,
                    );
                }
                if !region.contains(x, rect.bottom() + 1) {
                    self.merge_border(
                        &mut constraints,
                        back,
                        (x, rect.bottom() + 1),
                        (x, rect.bottom()),
                        WangPosition::Bottom,
                    );
                }
            }

            for y in rect.top()..=rect.bottom() {
                if !region.contains(rect.left() - 1, y) {
                    self.merge_border(
                        &mut constraints,
                        back,
                        (rect.left() - 1, y),
                        (rect.left(), y),
                        WangPosition::Left,
                    );
                }
                if !region.contains(rect.right() + 1, y) {
                    self.merge_border(
                        &mut constraints,
                        back,
                        (rect.right() + 1, y),
                        (rect.right(), y),
                        WangPosition::Right,
                    );
                }
            }
        }

        // Phase B: raster wavefront fill.
        let mut report = FillReport::default();
        for rect in region.rects() {
            for y in rect.top()..=rect.bottom() {
                for x in rect.left()..=rect.right() {
                    let constraint = constraints.get(x, y);
                    let Some(wang_tile) = self.best_match(&constraint, rng) else {
                        report.unplaced.push((x, y));
                        continue;
                    };

                    target.set_tile(x - target.x, y - target.y, Some(wang_tile.tile_id));

                    // Narrow the remaining freedom of every neighbor that
                    // has not been placed yet.
                    for (i, p) in self
                        .topology
                        .surrounding_points(x, y)
                        .into_iter()
                        .enumerate()
                    {
                        if target.tile_at(p.0 - target.x, p.1 - target.y).is_some() {
                            continue;
                        }
                        constraints.get_mut(p.0, p.1).update_to_adjacent(
                            &wang_tile.wang_id,
                            WangPosition::from_index(i).opposite(),
                        );
                    }
                }
            }
        }

        report
    }

    /// Merge the background tile at `outside` into the constraint of the
    /// region cell at `inside`, facing `position`. Empty or unknown
    /// background tiles contribute nothing.
    fn merge_border(
        &self,
        constraints: &mut Grid<CellConstraint>,
        back: &TileLayer,
        outside: (i32, i32),
        inside: (i32, i32),
        position: WangPosition,
    ) {
        let Some(tile) = back.tile_at(outside.0 - back.x, outside.1 - back.y) else {
            return;
        };
        let Some(outside_id) = self.wang_set.wang_id_of_tile(tile) else {
            return;
        };
        constraints
            .get_mut(inside.0, inside.1)
            .merge_from_adjacent(&outside_id, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{Color, TerrainSetType};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use tileweave_core::{Rect, StaggerIndex};
    use uuid::Uuid;
    use WangPosition::*;

    fn seeded_rng() -> SmallRng {
        SmallRng::seed_from_u64(0)
    }

    fn layer(x: i32, y: i32, width: u32, height: u32) -> TileLayer {
        TileLayer::new("Fill".to_string(), Uuid::new_v4(), x, y, width, height)
    }

    fn edge_id(top: usize, right: usize, bottom: usize, left: usize) -> WangId {
        let mut id = WangId::WILDCARD;
        id.set_color(Top, Some(top));
        id.set_color(Right, Some(right));
        id.set_color(Bottom, Some(bottom));
        id.set_color(Left, Some(left));
        id
    }

    fn corner_id(tr: usize, br: usize, bl: usize, tl: usize) -> WangId {
        let mut id = WangId::WILDCARD;
        id.set_color(TopRight, Some(tr));
        id.set_color(BottomRight, Some(br));
        id.set_color(BottomLeft, Some(bl));
        id.set_color(TopLeft, Some(tl));
        id
    }

    /// Two fully-constrained tiles: tile 0 is all color 0, tile 1 all color 1.
    fn two_tile_mixed_set() -> WangSet {
        let mut set = WangSet::new("AB".to_string(), Uuid::new_v4(), TerrainSetType::Mixed);
        set.add_terrain("A".to_string(), Color::GREEN);
        set.add_terrain("B".to_string(), Color::BLUE);
        set.set_tile_wang_id(0, WangId::filled(0)).unwrap();
        set.set_tile_wang_id(1, WangId::filled(1)).unwrap();
        set
    }

    /// Complete 2-color corner set: tile ids 0..16 encode the four corner
    /// colors as bits (TR | BR<<1 | BL<<2 | TL<<3).
    fn complete_corner_set() -> WangSet {
        let mut set = WangSet::new("Corners".to_string(), Uuid::new_v4(), TerrainSetType::Corner);
        set.add_terrain("Grass".to_string(), Color::GREEN);
        set.add_terrain("Water".to_string(), Color::BLUE);
        for tile_id in 0..16u32 {
            let id = corner_id(
                (tile_id & 1) as usize,
                ((tile_id >> 1) & 1) as usize,
                ((tile_id >> 2) & 1) as usize,
                ((tile_id >> 3) & 1) as usize,
            );
            set.set_tile_wang_id(tile_id, id).unwrap();
        }
        assert!(set.is_complete());
        set
    }

    #[test]
    fn orthogonal_neighbor_table() {
        let points = GridTopology::Orthogonal.surrounding_points(3, 7);
        assert_eq!(points[Top.index()], (3, 6));
        assert_eq!(points[TopRight.index()], (4, 6));
        assert_eq!(points[Right.index()], (4, 7));
        assert_eq!(points[BottomRight.index()], (4, 8));
        assert_eq!(points[Bottom.index()], (3, 8));
        assert_eq!(points[BottomLeft.index()], (2, 8));
        assert_eq!(points[Left.index()], (2, 7));
        assert_eq!(points[TopLeft.index()], (2, 6));
    }

    #[test]
    fn staggered_neighbor_table_x_axis() {
        let layout = StaggerLayout::new(StaggerAxis::X, StaggerIndex::Odd);
        let topology = GridTopology::Staggered(layout);

        // Odd (shifted) column: the straight slots resolve to the stagger
        // diagonals on the cell's own row and the row below.
        let points = topology.surrounding_points(5, 4);
        assert_eq!(points[Top.index()], (6, 4));
        assert_eq!(points[Right.index()], (6, 5));
        assert_eq!(points[Bottom.index()], (4, 5));
        assert_eq!(points[Left.index()], (4, 4));
        assert_eq!(points[TopRight.index()], (7, 4));
        assert_eq!(points[BottomRight.index()], (5, 5));
        assert_eq!(points[BottomLeft.index()], (3, 4));
        assert_eq!(points[TopLeft.index()], (5, 3));

        // Even column: the diagonals shift up a row instead.
        let points = topology.surrounding_points(4, 4);
        assert_eq!(points[Top.index()], (5, 3));
        assert_eq!(points[Right.index()], (5, 4));
        assert_eq!(points[Bottom.index()], (3, 4));
        assert_eq!(points[Left.index()], (3, 3));
    }

    #[test]
    fn staggered_neighbor_table_y_axis() {
        let layout = StaggerLayout::new(StaggerAxis::Y, StaggerIndex::Odd);
        let topology = GridTopology::Staggered(layout);

        // Odd (shifted) row.
        let points = topology.surrounding_points(4, 5);
        assert_eq!(points[Top.index()], (5, 4));
        assert_eq!(points[Right.index()], (5, 6));
        assert_eq!(points[Bottom.index()], (4, 6));
        assert_eq!(points[Left.index()], (4, 4));
        assert_eq!(points[TopRight.index()], (5, 5));
        assert_eq!(points[BottomRight.index()], (4, 7));
        assert_eq!(points[BottomLeft.index()], (3, 5));
        assert_eq!(points[TopLeft.index()], (4, 3));

        // Even row: the diagonals shift left a column instead.
        let points = topology.surrounding_points(4, 4);
        assert_eq!(points[Top.index()], (4, 3));
        assert_eq!(points[Right.index()], (4, 5));
        assert_eq!(points[Bottom.index()], (3, 5));
        assert_eq!(points[Left.index()], (3, 3));
    }

    #[test]
    fn uniform_background_selects_the_matching_tile() {
        // Catalog: tile A all color 0, tile B all color 1. A 1x1 region in
        // an all-A background must pick A (B fails every hard slot).
        let set = two_tile_mixed_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let mut back = layer(0, 0, 3, 3);
        back.fill(Some(0));
        let mut target = layer(0, 0, 3, 3);
        let region = Region::from_rect(Rect::new(1, 1, 1, 1));

        let report = filler.fill_region(&mut target, &back, &region, &mut seeded_rng());
        assert!(report.is_complete());
        assert_eq!(target.tile_at(1, 1), Some(0));
    }

    #[test]
    fn region_fill_covers_the_whole_region() {
        let set = two_tile_mixed_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let mut back = layer(0, 0, 5, 5);
        back.fill(Some(1));
        let mut target = layer(0, 0, 5, 5);
        let region = Region::from_rect(Rect::new(1, 1, 3, 3));

        let report = filler.fill_region(&mut target, &back, &region, &mut seeded_rng());
        assert!(report.is_complete());
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(target.tile_at(x, y), Some(1));
            }
        }
        // Cells outside the region stay untouched.
        assert_eq!(target.tile_at(0, 0), None);
    }

    #[test]
    fn edge_transition_row_connects_both_borders() {
        // Edge set with a grass row above and a water row below: every cell
        // of the filled row must take the transition tile.
        let mut set = WangSet::new("Shore".to_string(), Uuid::new_v4(), TerrainSetType::Edge);
        set.add_terrain("Grass".to_string(), Color::GREEN);
        set.add_terrain("Water".to_string(), Color::BLUE);
        set.set_tile_wang_id(0, edge_id(0, 0, 0, 0)).unwrap();
        set.set_tile_wang_id(1, edge_id(1, 1, 1, 1)).unwrap();
        set.set_tile_wang_id(2, edge_id(0, 0, 1, 0)).unwrap();

        let mut back = layer(0, 0, 7, 3);
        for x in 0..7 {
            back.set_tile(x, 0, Some(0));
            back.set_tile(x, 2, Some(1));
        }
        let mut target = layer(0, 0, 7, 3);
        let region = Region::from_rect(Rect::new(1, 1, 5, 1));

        let filler = WangFiller::new(&set, GridTopology::Orthogonal);
        let report = filler.fill_region(&mut target, &back, &region, &mut seeded_rng());
        assert!(report.is_complete());
        for x in 1..6 {
            assert_eq!(target.tile_at(x, 1), Some(2));
        }
    }

    #[test]
    fn unsatisfiable_cells_are_reported_not_dropped() {
        let mut set = WangSet::new("Strict".to_string(), Uuid::new_v4(), TerrainSetType::Edge);
        set.add_terrain("A".to_string(), Color::GREEN);
        set.add_terrain("B".to_string(), Color::BLUE);
        set.set_tile_wang_id(0, edge_id(0, 0, 0, 0)).unwrap();
        set.set_tile_wang_id(1, edge_id(1, 1, 1, 1)).unwrap();

        // Tile 1 above and tile 0 below force Top=1, Bottom=0; no tile has
        // that combination.
        let mut back = layer(0, 0, 3, 3);
        back.set_tile(1, 0, Some(1));
        back.set_tile(1, 2, Some(0));
        let mut target = layer(0, 0, 3, 3);
        let region = Region::from_rect(Rect::new(1, 1, 1, 1));

        let filler = WangFiller::new(&set, GridTopology::Orthogonal);
        let report = filler.fill_region(&mut target, &back, &region, &mut seeded_rng());
        assert_eq!(report.unplaced, vec![(1, 1)]);
        assert!(!report.is_complete());
        assert_eq!(target.tile_at(1, 1), None);
    }

    #[test]
    fn disjoint_rectangles_are_seeded_independently() {
        let mut set = WangSet::new("Split".to_string(), Uuid::new_v4(), TerrainSetType::Edge);
        set.add_terrain("A".to_string(), Color::GREEN);
        set.add_terrain("B".to_string(), Color::BLUE);
        set.set_tile_wang_id(0, edge_id(0, 0, 0, 0)).unwrap();
        set.set_tile_wang_id(1, edge_id(1, 1, 1, 1)).unwrap();

        // Backgrounds: A around the first rectangle, B around the second,
        // with the gap cells acting as background for both.
        let mut back = layer(0, 0, 6, 1);
        back.set_tile(0, 0, Some(0));
        back.set_tile(2, 0, Some(0));
        back.set_tile(3, 0, Some(1));
        back.set_tile(5, 0, Some(1));

        let mut region = Region::new();
        region.add_rect(Rect::new(1, 0, 1, 1));
        region.add_rect(Rect::new(4, 0, 1, 1));

        let mut target = layer(0, 0, 6, 1);
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);
        let report = filler.fill_region(&mut target, &back, &region, &mut seeded_rng());
        assert!(report.is_complete());
        assert_eq!(target.tile_at(1, 0), Some(0));
        assert_eq!(target.tile_at(4, 0), Some(1));
    }

    #[test]
    fn complete_corner_set_produces_consistent_seams() {
        // Corner colors are shared between every pair of touching tiles;
        // after a fill over an unconstrained area all seams must agree.
        let set = complete_corner_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let back = layer(0, 0, 4, 4);
        let mut target = layer(0, 0, 4, 4);
        let region = Region::from_rect(Rect::new(0, 0, 4, 4));

        let mut rng = SmallRng::seed_from_u64(3);
        let report = filler.fill_region(&mut target, &back, &region, &mut rng);
        assert!(report.is_complete());

        let id_at = |x: i32, y: i32| set.wang_id_of_tile(target.tile_at(x, y).unwrap()).unwrap();
        for y in 0..4 {
            for x in 0..3 {
                let left = id_at(x, y);
                let right = id_at(x + 1, y);
                assert_eq!(left.color_at(TopRight), right.color_at(TopLeft));
                assert_eq!(left.color_at(BottomRight), right.color_at(BottomLeft));
            }
        }
        for y in 0..3 {
            for x in 0..4 {
                let top = id_at(x, y);
                let bottom = id_at(x, y + 1);
                assert_eq!(top.color_at(BottomLeft), bottom.color_at(TopLeft));
                assert_eq!(top.color_at(BottomRight), bottom.color_at(TopRight));
            }
        }
    }

    #[test]
    fn fill_is_deterministic_under_a_fixed_seed() {
        let set = complete_corner_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);
        let region = Region::from_rect(Rect::new(0, 0, 4, 4));
        let back = layer(0, 0, 4, 4);

        let run = |seed: u64| {
            let mut target = layer(0, 0, 4, 4);
            let mut rng = SmallRng::seed_from_u64(seed);
            let report = filler.fill_region(&mut target, &back, &region, &mut rng);
            assert!(report.is_complete());
            target.tiles
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn seeded_constraints_are_honored() {
        let set = complete_corner_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let mut seeds: Grid<CellConstraint> = Grid::new();
        let constraint = seeds.get_mut(0, 0);
        constraint.set_hard(TopRight, 1);
        constraint.set_hard(BottomRight, 1);
        constraint.set_hard(BottomLeft, 1);
        constraint.set_hard(TopLeft, 1);

        let back = layer(0, 0, 2, 1);
        let mut target = layer(0, 0, 2, 1);
        let region = Region::from_rect(Rect::new(0, 0, 2, 1));

        let report =
            filler.fill_region_seeded(&mut target, &back, &region, seeds, &mut seeded_rng());
        assert!(report.is_complete());
        // All corners hard at color 1 selects the all-1 tile.
        assert_eq!(target.tile_at(0, 0), Some(15));
        // The propagated shared corners constrain the next cell's left side.
        let next = set.wang_id_of_tile(target.tile_at(1, 0).unwrap()).unwrap();
        assert_eq!(next.color_at(TopLeft), Some(1));
        assert_eq!(next.color_at(BottomLeft), Some(1));
    }

    #[test]
    fn offset_target_layers_are_translated() {
        let set = two_tile_mixed_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let mut back = layer(0, 0, 14, 13);
        back.fill(Some(0));
        // Target covers only the region, stored with a local origin.
        let mut target = layer(10, 10, 2, 1);
        let region = Region::from_rect(Rect::new(10, 10, 2, 1));

        let report = filler.fill_region(&mut target, &back, &region, &mut seeded_rng());
        assert!(report.is_complete());
        assert_eq!(target.tile_at(0, 0), Some(0));
        assert_eq!(target.tile_at(1, 0), Some(0));
    }

    #[test]
    fn background_view_excludes_region_interior() {
        let set = two_tile_mixed_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        // Stale tile-1 data inside the region must not leak into the
        // border-seeding view.
        let mut back = layer(0, 0, 3, 3);
        back.fill(Some(1));
        back.set_tile(1, 0, Some(0));
        let region = Region::from_rect(Rect::new(0, 1, 3, 2));

        let id = filler.wang_id_from_background(&back, &region, (1, 1));
        assert_eq!(id.color_at(Top), Some(0));
        assert_eq!(id.color_at(Left), None);
        assert_eq!(id.color_at(Right), None);
        assert_eq!(id.color_at(Bottom), None);
    }

    #[test]
    fn surroundings_view_reads_front_inside_region() {
        let set = two_tile_mixed_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let mut back = layer(0, 0, 3, 3);
        back.fill(Some(1));
        let mut front = layer(0, 0, 3, 3);
        front.set_tile(0, 1, Some(0));
        let region = Region::from_rect(Rect::new(0, 0, 2, 3));

        let id = filler.wang_id_from_surroundings(&back, &front, &region, (1, 1));
        // Left neighbor is inside the region: front wins over back.
        assert_eq!(id.color_at(Left), Some(0));
        // Right neighbor is outside: background.
        assert_eq!(id.color_at(Right), Some(1));
        // Top neighbor is inside the region but still empty in front.
        assert_eq!(id.color_at(Top), None);
    }

    #[test]
    fn fitting_a_cell_in_a_complete_set() {
        let set = complete_corner_set();
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let mut back = layer(0, 0, 3, 3);
        back.fill(Some(0));
        let front = layer(0, 0, 3, 3);
        let region = Region::from_rect(Rect::new(1, 1, 1, 1));

        let wang_tile = filler
            .find_fitting_tile(&back, &front, &region, (1, 1), &mut seeded_rng())
            .unwrap();
        // Surrounded by all-0 corners on every side.
        assert_eq!(wang_tile.tile_id, 0);
    }

    #[test]
    fn fitting_returns_none_without_candidates() {
        let mut set = WangSet::new("Empty".to_string(), Uuid::new_v4(), TerrainSetType::Edge);
        set.add_terrain("A".to_string(), Color::GREEN);
        let filler = WangFiller::new(&set, GridTopology::Orthogonal);

        let back = layer(0, 0, 3, 3);
        let front = layer(0, 0, 3, 3);
        let region = Region::from_rect(Rect::new(1, 1, 1, 1));

        assert!(filler
            .find_fitting_tile(&back, &front, &region, (1, 1), &mut seeded_rng())
            .is_none());
    }

    #[test]
    fn lookahead_rejects_dead_end_candidates() {
        // Tile 9 exposes a right-edge color no tile can answer; the
        // lookahead must always settle on tile 0.
        let mut set = WangSet::new("Partial".to_string(), Uuid::new_v4(), TerrainSetType::Edge);
        set.add_terrain("A".to_string(), Color::GREEN);
        set.add_terrain("B".to_string(), Color::BLUE);
        set.set_tile_wang_id(0, edge_id(0, 0, 0, 0)).unwrap();
        set.set_tile_wang_id(9, edge_id(0, 1, 0, 0)).unwrap();
        assert!(!set.is_complete());

        let filler = WangFiller::new(&set, GridTopology::Orthogonal);
        let back = layer(0, 0, 3, 3);
        let front = layer(0, 0, 3, 3);
        let region = Region::from_rect(Rect::new(0, 0, 3, 3));

        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let wang_tile = filler
                .find_fitting_tile(&back, &front, &region, (1, 1), &mut rng)
                .unwrap();
            assert_eq!(wang_tile.tile_id, 0);
        }
    }

    #[test]
    fn exhausted_lookahead_falls_back_to_the_last_candidate() {
        // Only candidate dead-ends its right neighbor, but a non-empty pool
        // must still yield a best-effort placement.
        let mut set = WangSet::new("DeadEnd".to_string(), Uuid::new_v4(), TerrainSetType::Edge);
        set.add_terrain("A".to_string(), Color::GREEN);
        set.add_terrain("B".to_string(), Color::BLUE);
        set.set_tile_wang_id(9, edge_id(0, 1, 0, 0)).unwrap();
        assert!(!set.is_complete());

        let filler = WangFiller::new(&set, GridTopology::Orthogonal);
        let back = layer(0, 0, 3, 3);
        let front = layer(0, 0, 3, 3);
        let region = Region::from_rect(Rect::new(0, 0, 3, 3));

        let wang_tile = filler
            .find_fitting_tile(&back, &front, &region, (1, 1), &mut seeded_rng())
            .unwrap();
        assert_eq!(wang_tile.tile_id, 9);
    }
}
