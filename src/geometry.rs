//! Axis-aligned rectangle tests shared by every collision check.

use crate::entities::{Position, Size};

/// True iff `point` lies in the half-open rectangle `[origin, origin + size)`.
pub fn rect_overlap(point: Position, origin: Position, size: Size) -> bool {
    point.x >= origin.x
        && point.x < origin.x + size.width
        && point.y >= origin.y
        && point.y < origin.y + size.height
}

/// True iff two half-open rectangles share at least one cell.
pub fn rects_intersect(a: Position, a_size: Size, b: Position, b_size: Size) -> bool {
    a.x < b.x + b_size.width
        && b.x < a.x + a_size.width
        && a.y < b.y + b_size.height
        && b.y < a.y + a_size.height
}
