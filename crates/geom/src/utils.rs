use crate::scalar::Scalar;

/// Maps an angle in radians to the `[0, 2π)` range.
#[inline]
pub fn positive_angle<S: Scalar>(angle: S) -> S {
    let tau = S::TWO * S::PI();
    let a = angle % tau;
    if a < S::ZERO {
        a + tau
    } else {
        a
    }
}

#[test]
fn positive_angles() {
    use core::f64::consts::PI;

    assert_eq!(positive_angle(0.0f64), 0.0);
    assert!((positive_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
    assert!((positive_angle(5.0 * PI) - PI).abs() < 1e-12);
}
