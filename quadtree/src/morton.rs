//! Morton (Z-order) quad keys.
//!
//! A key carries its own depth: bit `2 * depth` is set as a tag and the
//! `2 * depth` bits below it hold the interleaved cell coordinates, x in even
//! positions and y in odd positions, most significant pair first. Depth 1
//! cells are laid out as
//!
//! ```text
//! +---+---+
//! | 6 | 7 |
//! +---+---+
//! | 4 | 5 |
//! +---+---+
//! ```
//!
//! and each cell `k` splits into `4k..=4k + 3` in the same pattern.
//!
//! Coordinates are normalized against a global bounds rectangle into a 32-bit
//! lattice per axis, so a cell at depth `d` spans `width / 2^d` by
//! `height / 2^d`.

use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Bounds, Point};

pub type QuadKey = u64;

/// Deepest level a key can describe. Keys at this depth use 63 bits.
pub const MAX_DEPTH: u8 = 31;

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;
const INTEGER_SPACE: f64 = 4_294_967_296.0;
const MAX_INTEGER_COORD: f64 = u32::MAX as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    LowerLeft = 0,
    LowerRight = 1,
    UpperLeft = 2,
    UpperRight = 3,
}

/// Child order used everywhere a node's children are listed or visited.
pub const QUADRANTS: [Quadrant; 4] = [
    Quadrant::LowerLeft,
    Quadrant::LowerRight,
    Quadrant::UpperLeft,
    Quadrant::UpperRight,
];

impl Quadrant {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Which quadrant of its parent `key` occupies. The root reports `LowerLeft`.
    #[inline(always)]
    pub fn of_key(key: QuadKey) -> Self {
        QUADRANTS[(key & 0b11) as usize]
    }
}

#[inline(always)]
pub fn msb64(x: u64) -> Option<u32> {
    x.checked_ilog2()
}

/// Spreads the bits of `x` apart so that bit `i` lands on bit `2 * i`.
#[inline(always)]
pub fn spread_by_1_bit(x: u32) -> u64 {
    let mut x = u64::from(x);
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Inverse of [`spread_by_1_bit`]. Odd bits of `x` are ignored.
#[inline(always)]
pub fn compact_by_1_bit(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
    x as u32
}

#[inline(always)]
fn normalize(coord: f64, lo: f64, hi: f64) -> u32 {
    let span = hi - lo;
    if !(span > 0.0) {
        return 0;
    }
    let percent = (coord - lo) / span;
    // Float to int casts saturate and map NaN to zero.
    (percent * INTEGER_SPACE).clamp(0.0, MAX_INTEGER_COORD) as u32
}

/// Keeps the top `2 * depth` bits of a full 64-bit Morton code and tags the
/// result with its depth.
#[inline(always)]
fn truncate_to_depth(morton: u64, depth: u8) -> QuadKey {
    let depth_bit = min_id(depth);
    if depth == 0 {
        return depth_bit;
    }
    let bits = 2 * u32::from(depth);
    // The sign bit is moved across by hand so it can never collide with the tag.
    let top_y_bit = morton & SIGN_BIT;
    let key = ((morton & !SIGN_BIT) >> (64 - bits)) | depth_bit;
    if top_y_bit != 0 {
        key | (1 << (bits - 1))
    } else {
        key
    }
}

/// Key of the depth `depth` cell that contains `p`, relative to `bounds`.
///
/// Points outside `bounds` are clamped onto its nearest edge cell.
pub fn compute_quad_key(p: &Point, depth: u8, bounds: &Bounds) -> QuadtreeResult<QuadKey> {
    if depth > MAX_DEPTH {
        return Err(QuadtreeError::InvalidDepth {
            depth,
            max: MAX_DEPTH,
        });
    }
    let x = normalize(f64::from(p.x), bounds.lx, bounds.hx);
    let y = normalize(f64::from(p.y), bounds.ly, bounds.hy);
    let morton = spread_by_1_bit(x) | (spread_by_1_bit(y) << 1);
    Ok(truncate_to_depth(morton, depth))
}

/// First key at `depth`.
///
/// # Panics
///
/// Panics if `depth > MAX_DEPTH`.
#[inline(always)]
pub fn min_id(depth: u8) -> QuadKey {
    assert!(depth <= MAX_DEPTH, "depth {depth} exceeds {MAX_DEPTH}");
    1 << (2 * u32::from(depth))
}

#[inline(always)]
pub fn max_id(depth: u8) -> QuadKey {
    let depth_bit = min_id(depth);
    depth_bit | (depth_bit - 1)
}

#[inline(always)]
pub fn is_valid(key: QuadKey) -> bool {
    key != 0 && key <= max_id(MAX_DEPTH)
}

pub fn depth_of(key: QuadKey) -> QuadtreeResult<u8> {
    match msb64(key) {
        Some(msb) if is_valid(key) => Ok((msb / 2) as u8),
        _ => Err(QuadtreeError::InvalidKey { key }),
    }
}

/// The four children of `parent` in [`QUADRANTS`] order.
pub fn compute_children(parent: QuadKey) -> QuadtreeResult<[QuadKey; 4]> {
    let depth = depth_of(parent)?;
    if depth >= MAX_DEPTH {
        return Err(QuadtreeError::MaxDepthReached { key: parent });
    }
    let first = parent << 2;
    Ok([first, first | 1, first | 2, first | 3])
}

pub fn compute_parent(child: QuadKey) -> QuadtreeResult<QuadKey> {
    if depth_of(child)? == 0 {
        return Err(QuadtreeError::NoParent);
    }
    Ok((child & !SIGN_BIT) >> 2)
}

/// Width of a depth `depth` cell in the 32-bit lattice.
///
/// # Panics
///
/// Panics if `depth > MAX_DEPTH`.
#[inline(always)]
pub fn step_size_at_depth(depth: u8) -> u64 {
    assert!(depth <= MAX_DEPTH, "depth {depth} exceeds {MAX_DEPTH}");
    (1u64 << 32) >> depth
}

/// Maps `key` back to the rectangle it covers inside `global_bounds`.
pub fn compute_bounds_for_quad_key(
    key: QuadKey,
    global_bounds: &Bounds,
) -> QuadtreeResult<Bounds> {
    let width = global_bounds.width();
    let height = global_bounds.height();
    // A shared infinite edge leaves a NaN span, so test the corner as well.
    let finite = [global_bounds.lx, global_bounds.ly, width, height]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(QuadtreeError::DomainTooLarge { width, height });
    }

    let depth = depth_of(key)?;
    let cell = key & !min_id(depth);
    let shift = 32 - u32::from(depth);
    let step = step_size_at_depth(depth);
    let ll_x = u64::from(compact_by_1_bit(cell)) << shift;
    let ll_y = u64::from(compact_by_1_bit(cell >> 1)) << shift;

    Ok(Bounds::new(
        lower_edge(global_bounds.lx, ll_x, width),
        lower_edge(global_bounds.ly, ll_y, height),
        upper_edge(global_bounds.lx, ll_x + step, width),
        upper_edge(global_bounds.ly, ll_y + step, height),
    ))
}

#[inline(always)]
fn denormalize(lo: f64, coord: u64, span: f64) -> f64 {
    lo + coord as f64 / INTEGER_SPACE * span
}

#[inline(always)]
fn lower_edge(lo: f64, coord: u64, span: f64) -> f64 {
    let edge = denormalize(lo, coord, span);
    if edge.is_infinite() {
        -f64::MAX
    } else {
        edge
    }
}

#[inline(always)]
fn upper_edge(lo: f64, coord: u64, span: f64) -> f64 {
    let edge = denormalize(lo, coord, span);
    if edge.is_infinite() {
        f64::MAX
    } else {
        edge
    }
}
