use walkgrid_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a - b;
    d.x.abs() + d.y.abs()
}

/// Chebyshev (L∞) distance between two points. Two distinct cells are
/// 8-directional neighbors exactly when this is 1.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let d = a - b;
    d.x.abs().max(d.y.abs())
}

/// Euclidean distance between two points, in cell units.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let d = a - b;
    ((d.x * d.x + d.y * d.y) as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, a), 0);
    }
}
