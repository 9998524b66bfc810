//! Wang identifiers and per-cell fill constraints
//!
//! Position indexing follows the clockwise layout:
//!   7|0|1
//!   6|X|2
//!   5|4|3
//! - Even indices (0,2,4,6) = Edges (Top, Right, Bottom, Left)
//! - Odd indices (1,3,5,7) = Corners (TopRight, BottomRight, BottomLeft, TopLeft)

use serde::{Deserialize, Serialize};

/// One of the eight compass slots around a tile, clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WangPosition {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
}

impl WangPosition {
    /// All positions in clockwise order, index-aligned with [`WangId::colors`].
    pub const ALL: [WangPosition; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    /// The slot on a neighbor that faces back at this one
    /// (N↔S, NE↔SW, E↔W, SE↔NW).
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Corners are the odd positions.
    pub fn is_corner(self) -> bool {
        self.index() % 2 == 1
    }

    /// Next position clockwise
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous position counter-clockwise
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + 7)
    }
}

/// Terrain colors held (or desired) at the 8 slots around a tile.
///
/// `None` is a wildcard: the slot is unconstrained and matches any terrain.
/// The constrained-slot mask is implicit in which slots hold a value, so mask
/// and values cannot disagree.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WangId {
    pub colors: [Option<usize>; 8],
}

impl WangId {
    pub const WILDCARD: Self = WangId { colors: [None; 8] };

    /// A wang id with all positions set to one terrain
    pub fn filled(terrain: usize) -> Self {
        WangId {
            colors: [Some(terrain); 8],
        }
    }

    pub fn color_at(&self, position: WangPosition) -> Option<usize> {
        self.colors[position.index()]
    }

    pub fn set_color(&mut self, position: WangPosition, color: Option<usize>) {
        self.colors[position.index()] = color;
    }

    /// Bitmask of constrained slots; bit `i` corresponds to position index `i`.
    pub fn mask(&self) -> u8 {
        self.colors
            .iter()
            .enumerate()
            .fold(0, |mask, (i, color)| match color {
                Some(_) => mask | (1 << i),
                None => mask,
            })
    }

    pub fn is_wildcard(&self) -> bool {
        self.colors.iter().all(|c| c.is_none())
    }

    /// Number of slots whose values differ. A wildcard slot on one side
    /// counts as a difference against a concrete color on the other.
    pub fn penalty_against(&self, other: &WangId) -> u32 {
        self.colors
            .iter()
            .zip(other.colors.iter())
            .filter(|(a, b)| a != b)
            .count() as u32
    }

    /// True when every constrained slot of `self` matches `concrete` exactly;
    /// wildcard slots match anything.
    pub fn wildcard_matches(&self, concrete: &WangId) -> bool {
        self.colors
            .iter()
            .zip(concrete.colors.iter())
            .all(|(want, have)| match want {
                Some(color) => *have == Some(*color),
                None => true,
            })
    }

    /// Align this id with a neighbor at `position`: the facing slot takes the
    /// neighbor's opposite-slot color, and when the slots touch along an edge
    /// the two shared corner points ride along. Slots the neighbor leaves
    /// unconstrained are kept as they are.
    pub fn update_to_adjacent(&mut self, adjacent: &WangId, position: WangPosition) {
        let p = position.index();
        if let Some(color) = adjacent.color_at(position.opposite()) {
            self.colors[p] = Some(color);
        }
        if !position.is_corner() {
            for (ours, theirs) in shared_corners(p) {
                if self.colors[ours].is_none() {
                    self.colors[ours] = adjacent.colors[theirs];
                }
            }
        }
    }
}

/// The corner slots flanking edge slot `p`, paired with the adjacent tile's
/// slots for the same corner points. Two tiles touching along an edge share
/// the edge's two endpoint corners.
fn shared_corners(p: usize) -> [(usize, usize); 2] {
    [((p + 1) % 8, (p + 3) % 8), ((p + 7) % 8, (p + 5) % 8)]
}

/// Accumulated desired colors for a not-yet-filled cell.
///
/// `mask` marks hard slots: a candidate tile must match them exactly. Slots
/// with a desired color but no mask bit are soft preferences that only
/// contribute penalty during best-match search.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CellConstraint {
    /// Desired terrain colors at each position
    pub desired: WangId,
    /// Which positions must match exactly
    pub mask: [bool; 8],
}

impl CellConstraint {
    /// Constrain `position` to `color` (must match exactly).
    pub fn set_hard(&mut self, position: WangPosition, color: usize) {
        self.desired.set_color(position, Some(color));
        self.mask[position.index()] = true;
    }

    /// Prefer `color` at `position` without requiring it.
    pub fn set_soft(&mut self, position: WangPosition, color: usize) {
        self.desired.set_color(position, Some(color));
    }

    pub fn is_constrained(&self, position: WangPosition) -> bool {
        self.mask[position.index()]
    }

    /// True when `candidate` satisfies every hard slot.
    pub fn hard_slots_match(&self, candidate: &WangId) -> bool {
        WangPosition::ALL.iter().all(|&position| {
            if !self.is_constrained(position) {
                return true;
            }
            candidate.color_at(position) == self.desired.color_at(position)
        })
    }

    /// Import a border constraint from a tile outside the fill region: the
    /// facing slot becomes hard, shared corners are filled in softly. An
    /// already-hard facing slot is left alone.
    pub fn merge_from_adjacent(&mut self, adjacent: &WangId, position: WangPosition) {
        if !self.is_constrained(position) {
            if let Some(color) = adjacent.color_at(position.opposite()) {
                self.set_hard(position, color);
            }
        }
        self.merge_shared_corners(adjacent, position);
    }

    /// Propagate a placed neighbor's colors into this constraint: the facing
    /// slot is now a fact and becomes hard, shared corners are filled in
    /// softly where still open.
    pub fn update_to_adjacent(&mut self, placed: &WangId, position: WangPosition) {
        if let Some(color) = placed.color_at(position.opposite()) {
            self.set_hard(position, color);
        }
        self.merge_shared_corners(placed, position);
    }

    fn merge_shared_corners(&mut self, adjacent: &WangId, position: WangPosition) {
        if position.is_corner() {
            return;
        }
        for (ours, theirs) in shared_corners(position.index()) {
            if self.desired.colors[ours].is_none() {
                self.desired.colors[ours] = adjacent.colors[theirs];
            }
        }
    }
}
