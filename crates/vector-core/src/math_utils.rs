//! Scalar helpers shared by the vector and segment code.

/// Returns the magnitude between two points given by their coordinates.
///
/// # Examples
/// ```
/// use vector_core::math_utils::mag;
/// assert_eq!(mag(0.0, 0.0, 0.0, 3.0, 4.0, 0.0), 5.0);
/// assert_eq!(mag(1.0, 2.0, 3.0, 1.0, 2.0, 3.0), 0.0);
/// ```
pub fn mag(ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> f64 {
    (ax - bx).hypot(ay - by).hypot(az - bz)
}

/// Clamps a value between a minimum and maximum
///
/// # Examples
/// ```
/// use vector_core::math_utils::clamp;
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(3.0, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp<T: num_traits::Float>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `a` - Start value
/// * `b` - End value
/// * `t` - Interpolation parameter (0.0 = a, 1.0 = b)
///
/// # Examples
/// ```
/// use vector_core::math_utils::lerp;
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp<T: num_traits::Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mag() {
        assert_eq!(mag(0.0, 0.0, 0.0, 3.0, 4.0, 0.0), 5.0);
        assert_eq!(mag(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0); // symmetric
        assert_eq!(mag(4.0, 0.0, 3.0, 0.0, 0.0, 0.0), 5.0);
        assert_eq!(mag(1e200, 0.0, 0.0, -1e200, 0.0, 0.0), 2e200);
        assert_eq!(mag(-1.0, -1.0, -1.0, -1.0, -1.0, -1.0), 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(5.0f32, 0.0, 10.0), 5.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(5.0, 15.0, 0.5), 10.0);
        assert_eq!(lerp(-2.0, 2.0, 0.25), -1.0);
    }
}
