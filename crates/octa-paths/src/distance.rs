use octa_core::Point;

/// Cost of a horizontal or vertical step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step (10·√2 rounded to an integer).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points under the 10/14 cost model:
/// `10 * max(|dx|, |dy|) + 4 * min(|dx|, |dy|)`.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    STRAIGHT_COST * dx.max(dy) + (DIAGONAL_COST - STRAIGHT_COST) * dx.min(dy)
}
