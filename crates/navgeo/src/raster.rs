//! Integer line rasterization.

use crate::vector::Coord;

/// Bresenham line from `p1` to `p2`, both endpoints included, ordered from `p1`.
///
/// The driving axis is the one with the larger extent; consecutive points
/// advance by exactly one unit along it.
pub fn bresenham(p1: Coord, p2: Coord) -> Vec<Coord> {
    let (mut x0, mut z0, mut x1, mut z1) = (p1.x as i64, p1.z as i64, p2.x as i64, p2.z as i64);
    let steep = (z1 - z0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut z0);
        std::mem::swap(&mut x1, &mut z1);
    }
    let swapped = x0 > x1;
    if swapped {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut z0, &mut z1);
    }
    let dx = x1 - x0;
    let dz = (z1 - z0).abs();
    let step = if z0 < z1 { 1 } else { -1 };
    let mut err = dx / 2;
    let mut z = z0;
    let mut out = Vec::with_capacity(dx as usize + 1);
    for x in x0..=x1 {
        let c = if steep {
            Coord::new(z as i32, x as i32)
        } else {
            Coord::new(x as i32, z as i32)
        };
        out.push(c);
        err -= dz;
        if err < 0 {
            z += step;
            err += dx;
        }
    }
    if swapped {
        out.reverse();
    }
    out
}
