//! Periodic-boundary index helpers for the 4-connected stencil.
//!
//! The wave stencil treats the lattice as a torus: indices off one edge
//! reappear on the opposite edge. This is a deliberate modeling
//! simplification (it keeps the stencil uniform with no edge special
//! cases), not a physically motivated boundary condition.

use smallvec::SmallVec;

/// Resolve an axis value onto `[0, len)` under periodic wrap.
pub fn wrap_axis(val: i32, len: i32) -> i32 {
    val.rem_euclid(len)
}

/// Flat indices of the 4-connected neighbours of `(x, y)` on an
/// `n`-by-`n` torus, in east/west/south/north order.
pub fn wrapped_neighbours_flat(x: i32, y: i32, n: i32) -> SmallVec<[usize; 4]> {
    let offsets: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let mut result = SmallVec::new();
    for (dx, dy) in offsets {
        let nx = wrap_axis(x + dx, n);
        let ny = wrap_axis(y + dy, n);
        result.push(ny as usize * n as usize + nx as usize);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_axis_in_bounds_is_identity() {
        assert_eq!(wrap_axis(0, 5), 0);
        assert_eq!(wrap_axis(4, 5), 4);
    }

    #[test]
    fn wrap_axis_wraps_both_ends() {
        assert_eq!(wrap_axis(-1, 5), 4);
        assert_eq!(wrap_axis(5, 5), 0);
        assert_eq!(wrap_axis(7, 5), 2);
        assert_eq!(wrap_axis(-6, 5), 4);
    }

    #[test]
    fn neighbours_interior() {
        // (1,1) on a 3x3 torus: east (2,1)=5, west (0,1)=3,
        // south (1,2)=7, north (1,0)=1.
        let nbs = wrapped_neighbours_flat(1, 1, 3);
        assert_eq!(nbs.as_slice(), &[5, 3, 7, 1]);
    }

    #[test]
    fn neighbours_corner_wrap() {
        // (0,0) wraps west to (2,0)=2 and north to (0,2)=6.
        let nbs = wrapped_neighbours_flat(0, 0, 3);
        assert_eq!(nbs.as_slice(), &[1, 2, 3, 6]);
    }

    proptest! {
        #[test]
        fn wrap_axis_always_in_range(val in -100i32..100, len in 1i32..32) {
            let w = wrap_axis(val, len);
            prop_assert!(w >= 0 && w < len);
        }

        #[test]
        fn wrap_axis_periodic(val in -100i32..100, len in 1i32..32) {
            prop_assert_eq!(wrap_axis(val, len), wrap_axis(val + len, len));
        }

        #[test]
        fn neighbours_always_valid(x in 0i32..16, y in 0i32..16, n in 1i32..16) {
            let x = x % n;
            let y = y % n;
            for idx in wrapped_neighbours_flat(x, y, n) {
                prop_assert!(idx < (n * n) as usize);
            }
        }
    }
}
