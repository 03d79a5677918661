//! 2D segment intersection
//!
//! Segments are given by the coordinates of their end points. The test is the
//! classic four-orientation one: two segments cross when the end points of each
//! lie on opposite sides of the other, with collinear configurations settled by
//! bounding-box checks. A segment whose end points coincide behaves as a point.

/// Turn direction of the ordered triple `(p, q, r)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Returns the orientation of the triple `(p, q, r)`.
///
/// Computed from the sign of the cross product `(q - p) x (r - p)`, so the
/// comparison against zero is exact.
///
/// # Examples
/// ```
/// use vector_core::segment::{orientation, Orientation};
/// assert_eq!(orientation((0.0, 0.0), (1.0, 0.0), (1.0, 1.0)), Orientation::CounterClockwise);
/// assert_eq!(orientation((0.0, 0.0), (1.0, 0.0), (2.0, 0.0)), Orientation::Collinear);
/// ```
pub fn orientation(p: (f64, f64), q: (f64, f64), r: (f64, f64)) -> Orientation {
    let cross = (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

// `q` is known to be collinear with `p` and `r`.
#[inline]
fn on_segment(p: (f64, f64), q: (f64, f64), r: (f64, f64)) -> bool {
    q.0 >= p.0.min(r.0) && q.0 <= p.0.max(r.0) && q.1 >= p.1.min(r.1) && q.1 <= p.1.max(r.1)
}

/// Returns true if the segment AB intersects the segment CD.
///
/// Touching end points and collinear overlaps count as intersections.
///
/// # Examples
/// ```
/// use vector_core::intersect;
/// assert!(intersect(0.0, 0.0, 2.0, 10.0, -1.0, 2.0, 15.0, 1.0));
/// assert!(!intersect(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn intersect(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    cx: f64,
    cy: f64,
    dx: f64,
    dy: f64,
) -> bool {
    let (a, b, c, d) = ((ax, ay), (bx, by), (cx, cy), (dx, dy));

    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    log::trace!("segments {:?}-{:?} and {:?}-{:?} are not in general position", a, b, c, d);
    (o1 == Orientation::Collinear && on_segment(a, c, b))
        || (o2 == Orientation::Collinear && on_segment(a, d, b))
        || (o3 == Orientation::Collinear && on_segment(c, a, d))
        || (o4 == Orientation::Collinear && on_segment(c, b, d))
}
