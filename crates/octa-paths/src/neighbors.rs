use octa_core::{Point, Range};

use crate::distance::{DIAGONAL_COST, STRAIGHT_COST};

/// A weighted move to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub to: Point,
    pub cost: i32,
}

/// The eight move offsets in generation order: the four cardinal moves
/// (up, down, left, right) followed by the four diagonals (up-left,
/// up-right, down-left, down-right).
pub const OCTILE_MOVES: [(Point, i32); 8] = [
    (Point::new(0, -1), STRAIGHT_COST),
    (Point::new(0, 1), STRAIGHT_COST),
    (Point::new(-1, 0), STRAIGHT_COST),
    (Point::new(1, 0), STRAIGHT_COST),
    (Point::new(-1, -1), DIAGONAL_COST),
    (Point::new(1, -1), DIAGONAL_COST),
    (Point::new(-1, 1), DIAGONAL_COST),
    (Point::new(1, 1), DIAGONAL_COST),
];

/// Append the 8-connected moves out of `p` that stay inside `bounds` and
/// for which `keep` returns `true`.
///
/// Diagonal moves only look at the target cell: squeezing between two
/// blocked orthogonal cells is allowed.
#[inline]
pub fn octile_neighbors(
    p: Point,
    bounds: Range,
    mut keep: impl FnMut(Point) -> bool,
    buf: &mut Vec<Step>,
) {
    for (d, cost) in OCTILE_MOVES {
        let to = p + d;
        if bounds.contains(to) && keep(to) {
            buf.push(Step { to, cost });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(p: Point, n: i32) -> Vec<Step> {
        let mut buf = Vec::new();
        octile_neighbors(p, Range::square(n), |_| true, &mut buf);
        buf
    }

    #[test]
    fn interior_cell_has_eight_moves_in_order() {
        let steps = collect(Point::new(5, 5), 16);
        let to: Vec<Point> = steps.iter().map(|s| s.to).collect();
        assert_eq!(
            to,
            vec![
                Point::new(5, 4),
                Point::new(5, 6),
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(4, 4),
                Point::new(6, 4),
                Point::new(4, 6),
                Point::new(6, 6),
            ]
        );
        assert!(steps[..4].iter().all(|s| s.cost == STRAIGHT_COST));
        assert!(steps[4..].iter().all(|s| s.cost == DIAGONAL_COST));
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(collect(Point::new(0, 0), 16).len(), 3);
        assert_eq!(collect(Point::new(15, 15), 16).len(), 3);
        assert_eq!(collect(Point::new(0, 7), 16).len(), 5);
        assert!(collect(Point::new(0, 0), 1).is_empty());
    }

    #[test]
    fn keep_filters_targets_only() {
        // Both orthogonals blocked: the diagonal is still offered.
        let blocked = [Point::new(1, 0), Point::new(0, 1)];
        let mut buf = Vec::new();
        octile_neighbors(
            Point::new(0, 0),
            Range::square(3),
            |p| !blocked.contains(&p),
            &mut buf,
        );
        assert_eq!(
            buf,
            vec![Step {
                to: Point::new(1, 1),
                cost: DIAGONAL_COST
            }]
        );
    }
}
