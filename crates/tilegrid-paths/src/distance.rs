use tilegrid_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance for 8-way movement where an orthogonal step costs
/// `straight` and a diagonal step costs `diagonal`.
#[inline]
pub fn octile(a: Point, b: Point, straight: i32, diagonal: i32) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    straight * (hi - lo) + diagonal * lo
}
