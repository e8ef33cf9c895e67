//! Shapes module - the fixed block catalog
//!
//! A shape is a list of rows of occupancy flags relative to the anchor cell
//! `(0, 0)`. Rows may be ragged: a row only needs to be as long as its
//! right-most occupied cell.

use crate::rng::RandomSource;
use crate::types::BlockKind;

/// Occupancy pattern of a block, row by row.
pub type Shape = &'static [&'static [bool]];

/// A catalog entry: a shape and the kind (color) written into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDefinition {
    pub kind: BlockKind,
    pub shape: Shape,
}

const X: bool = true;
const O: bool = false;

const SQUARE: Shape = &[&[X, X], &[X, X]];
const LINE_FOUR: Shape = &[&[X, X, X, X]];
const LINE_THREE: Shape = &[&[X, X, X]];
const L_RIGHT: Shape = &[&[X], &[X], &[X, X]];
const L_LEFT: Shape = &[&[O, X], &[O, X], &[X, X]];
const ZIG: Shape = &[&[X, X], &[O, X, X]];
const TEE: Shape = &[&[X, X, X], &[O, X]];
const COLUMN: Shape = &[&[X], &[X], &[X], &[X]];

/// All block definitions, indexed by [`BlockKind::index`].
pub const CATALOG: [BlockDefinition; 8] = [
    BlockDefinition {
        kind: BlockKind::Square,
        shape: SQUARE,
    },
    BlockDefinition {
        kind: BlockKind::LineFour,
        shape: LINE_FOUR,
    },
    BlockDefinition {
        kind: BlockKind::LineThree,
        shape: LINE_THREE,
    },
    BlockDefinition {
        kind: BlockKind::LRight,
        shape: L_RIGHT,
    },
    BlockDefinition {
        kind: BlockKind::LLeft,
        shape: L_LEFT,
    },
    BlockDefinition {
        kind: BlockKind::Zig,
        shape: ZIG,
    },
    BlockDefinition {
        kind: BlockKind::Tee,
        shape: TEE,
    },
    BlockDefinition {
        kind: BlockKind::Column,
        shape: COLUMN,
    },
];

/// Catalog entry for a block kind
pub fn definition(kind: BlockKind) -> &'static BlockDefinition {
    &CATALOG[kind.index()]
}

/// Get the shape for a block kind
pub fn get_shape(kind: BlockKind) -> Shape {
    definition(kind).shape
}

/// Iterate the occupied `(row, col)` offsets of a shape in row-major order.
pub fn shape_cells(shape: Shape) -> impl Iterator<Item = (usize, usize)> {
    shape.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(c, _)| (r, c))
    })
}

/// Bounding box `(rows, cols)` of a shape, ignoring trailing empty cells.
pub fn shape_extent(shape: Shape) -> (usize, usize) {
    shape_cells(shape).fold((0, 0), |(h, w), (r, c)| (h.max(r + 1), w.max(c + 1)))
}

/// Pick one kind uniformly at random from the catalog.
pub fn pick_random<R: RandomSource + ?Sized>(rng: &mut R) -> BlockKind {
    let idx = rng.next_index(CATALOG.len());
    // Sources must stay below the bound; clamp rather than panic if one doesn't.
    CATALOG[idx.min(CATALOG.len() - 1)].kind
}
