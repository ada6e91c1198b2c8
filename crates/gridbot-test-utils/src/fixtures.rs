//! Coordinate fixtures for hazard and blob placement.

/// Every cell on the outer edge of a `width x height` map, clockwise
/// from the top-left corner, without duplicates.
pub fn border_ring(width: i32, height: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    if width <= 0 || height <= 0 {
        return out;
    }
    for x in 0..width {
        out.push((x, 0));
    }
    for y in 1..height {
        out.push((width - 1, y));
    }
    if height > 1 {
        for x in (0..width - 1).rev() {
            out.push((x, height - 1));
        }
    }
    if width > 1 {
        for y in (1..height - 1).rev() {
            out.push((0, y));
        }
    }
    out
}

/// The cells `(x, y)` for `x` in `xs`.
pub fn row(y: i32, xs: impl IntoIterator<Item = i32>) -> Vec<(i32, i32)> {
    xs.into_iter().map(|x| (x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn border_ring_counts() {
        assert_eq!(border_ring(5, 5).len(), 16);
        assert_eq!(border_ring(1, 1), vec![(0, 0)]);
        assert_eq!(border_ring(3, 1).len(), 3);
        assert_eq!(border_ring(1, 3).len(), 3);
    }

    #[test]
    fn border_ring_has_no_duplicates() {
        let ring = border_ring(4, 6);
        let unique: HashSet<_> = ring.iter().collect();
        assert_eq!(unique.len(), ring.len());
        assert!(ring.iter().all(|&(x, y)| x == 0 || y == 0 || x == 3 || y == 5));
    }

    #[test]
    fn row_builds_pairs() {
        assert_eq!(row(2, 0..3), vec![(0, 2), (1, 2), (2, 2)]);
    }
}
