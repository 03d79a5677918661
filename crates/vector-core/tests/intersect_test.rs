use vector_core::intersect;

#[test]
fn test_set() {
    let segments = [
        (0.0, 0.0, 2.0, 10.0, -1.0, 2.0, 15.0, 1.0, true),
        // Crossing in the middle
        (0.0, 0.0, 4.0, 4.0, 0.0, 4.0, 4.0, 0.0, true),
        // Touching at an end point
        (0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 5.0, 0.0, true),
        // T junction
        (0.0, 0.0, 4.0, 0.0, 2.0, 0.0, 2.0, 3.0, true),
        // Collinear and overlapping
        (0.0, 0.0, 4.0, 0.0, 2.0, 0.0, 6.0, 0.0, true),
        // Collinear, one inside the other
        (0.0, 0.0, 6.0, 6.0, 2.0, 2.0, 3.0, 3.0, true),
        // Collinear and disjoint
        (0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0, false),
        // Parallel
        (0.0, 0.0, 4.0, 2.0, 0.0, 1.0, 4.0, 3.0, false),
        // Lines cross outside both segments
        (0.0, 0.0, 1.0, 1.0, 3.0, 0.0, 2.0, 1.0, false),
        // Zero length segment on the other one
        (1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 2.0, 2.0, true),
        // Zero length segment away from the other one
        (1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 2.0, false),
    ];

    for (ax, ay, bx, by, cx, cy, dx, dy, b) in segments {
        assert_eq!(
            intersect(ax, ay, bx, by, cx, cy, dx, dy),
            b,
            "({}, {})-({}, {}) / ({}, {})-({}, {})",
            ax, ay, bx, by, cx, cy, dx, dy
        );
    }
}
