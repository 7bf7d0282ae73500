//! Pure overlap predicates for circles and axis-aligned rects
//!
//! All predicates use strict `<` comparisons and exact integer arithmetic
//! (squared distances in `i64`), so results are reproducible across
//! platforms. Rects are given by their top-left corner and full extents.

/// True iff the distance between centers is less than the sum of radii
#[inline]
pub fn circles_overlap(ax: i32, ay: i32, ar: i32, bx: i32, by: i32, br: i32) -> bool {
    let dx = (ax - bx) as i64;
    let dy = (ay - by) as i64;
    let reach = (ar + br) as i64;
    dx * dx + dy * dy < reach * reach
}

/// True iff the distance from the circle center to the nearest point on the
/// rect is less than the circle radius
#[inline]
pub fn circle_rect_overlap(cx: i32, cy: i32, cr: i32, rx: i32, ry: i32, rw: i32, rh: i32) -> bool {
    let nearest_x = cx.clamp(rx, rx + rw);
    let nearest_y = cy.clamp(ry, ry + rh);
    let dx = (cx - nearest_x) as i64;
    let dy = (cy - nearest_y) as i64;
    let reach = cr as i64;
    dx * dx + dy * dy < reach * reach
}

/// Standard AABB overlap test; touching edges do not count
#[inline]
pub fn rects_overlap(ax: i32, ay: i32, aw: i32, ah: i32, bx: i32, by: i32, bw: i32, bh: i32) -> bool {
    ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(0, 0, 10, 15, 0, 10));
        // exactly touching is not overlapping
        assert!(!circles_overlap(0, 0, 10, 20, 0, 10));
        assert!(!circles_overlap(0, 0, 10, 25, 0, 10));
    }

    #[test]
    fn test_circles_overlap_diagonal() {
        // centers 5 apart on both axes, distance ~7.07
        assert!(circles_overlap(0, 0, 4, 5, 5, 4));
        assert!(!circles_overlap(0, 0, 3, 5, 5, 3));
    }

    #[test]
    fn test_circle_rect_overlap_edge() {
        // rect spans x in [0, 10]; circle approaching from the left
        assert!(circle_rect_overlap(-4, 5, 5, 0, 0, 10, 10));
        assert!(!circle_rect_overlap(-5, 5, 5, 0, 0, 10, 10));
    }

    #[test]
    fn test_circle_rect_overlap_corner() {
        // nearest point is the corner (0, 0); center at (-3, -4) is 5 away
        assert!(!circle_rect_overlap(-3, -4, 5, 0, 0, 10, 10));
        assert!(circle_rect_overlap(-3, -4, 6, 0, 0, 10, 10));
    }

    #[test]
    fn test_circle_rect_center_inside() {
        assert!(circle_rect_overlap(5, 5, 1, 0, 0, 10, 10));
    }

    #[test]
    fn test_rects_overlap() {
        assert!(rects_overlap(0, 0, 10, 10, 5, 5, 10, 10));
        // sharing an edge is not overlapping
        assert!(!rects_overlap(0, 0, 10, 10, 10, 0, 10, 10));
        assert!(!rects_overlap(0, 0, 10, 10, 0, 10, 10, 10));
        assert!(!rects_overlap(0, 0, 10, 10, 20, 20, 5, 5));
    }
}
