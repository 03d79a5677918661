/// Rounds to two decimals before comparing, so rotations and rescaling can be
/// checked against literal coordinates.
#[track_caller]
pub fn assert_almost_equal(value1: f64, value2: f64) {
    assert_eq!(round2(value1), round2(value2), "{} != {}", value1, value2);
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
