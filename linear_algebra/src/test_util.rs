use crate::Matrix;

/// Closeness with both an absolute and a relative tolerance, in the manner of
/// Python's `math.isclose`.
pub fn is_close(a: f64, b: f64, abs: f64, rel: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[track_caller]
pub fn assert_close(a: f64, b: f64, abs: f64) {
    assert!(
        is_close(a, b, abs, 1e-9),
        "not nearly equal (abs={abs})\n left: {a}\nright: {b}"
    );
}

#[track_caller]
pub fn assert_matrix_close(a: &Matrix, b: &Matrix, abs: f64) {
    assert_eq!(a.shape(), b.shape(), "shape mismatch");
    for (i, (x, y)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        assert!(
            is_close(*x, *y, abs, 1e-9),
            "element ({}, {}) not nearly equal (abs={abs})\n left: {a}\nright: {b}",
            i / a.ncols(),
            i % a.ncols(),
        );
    }
}
