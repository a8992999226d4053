//! Shared-boundary resolution between two polygons.

use super::types::{Polygon, Vertex};

/// Boundary of `other`, rotated to start at the shared edge with `this`.
///
/// Returns `Some` only when the two polygons share exactly two vertex ids and
/// those ids are consecutive on both boundaries. The result starts at one
/// shared vertex and continues with the other, following `other`'s own
/// orientation; the remaining entries are the vertices `this` lacks.
pub fn find_shared_boundary<P, Q>(this: &P, other: &Q) -> Option<Vec<Vertex>>
where
    P: Polygon + ?Sized,
    Q: Polygon + ?Sized,
{
    let mine = this.vertices();
    let theirs = other.vertices();
    let n = theirs.len();

    let mut shared = Vec::with_capacity(2);
    for (i, v) in mine.iter().enumerate() {
        if let Some(j) = theirs.iter().position(|w| w.id == v.id) {
            if shared.len() == 2 {
                return None;
            }
            shared.push((i, j));
        }
    }
    let [(i0, j0), (i1, j1)] = shared[..] else {
        return None;
    };
    if !cyclic_neighbors(i0, i1, mine.len()) {
        return None;
    }
    let start = if (j0 + 1) % n == j1 {
        j0
    } else if (j1 + 1) % n == j0 {
        j1
    } else {
        return None;
    };
    Some((0..n).map(|k| theirs[(start + k) % n]).collect())
}

#[inline]
fn cyclic_neighbors(a: usize, b: usize, n: usize) -> bool {
    (a + 1) % n == b || (b + 1) % n == a
}
