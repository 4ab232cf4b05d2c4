use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilegrid_core::Point;

use crate::traits::AstarPather;

const NO_PARENT: usize = usize::MAX;
const UNREACHABLE: i32 = i32::MAX;

#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

/// Open-list entry. Pops lowest `f`, then lowest `g`, then earliest
/// discovery, so equal-cost searches always expand in the same order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    g: i32,
    seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then(other.g.cmp(&self.g))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the cheapest path from `from` to `to` on a `width` x `height`
/// grid of 0-indexed cells using A*.
///
/// Returns the full path (both endpoints included) or `None` if either
/// endpoint is outside the grid or the goal cannot be reached. Node state is
/// allocated per call, so concurrent searches over a shared pather are fine.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    width: i32,
    height: i32,
    from: Point,
    to: Point,
) -> Option<Vec<Point>> {
    let w = width.max(0) as usize;
    let idx = |p: Point| {
        p.within(width, height)
            .then(|| p.y as usize * w + p.x as usize)
    };
    let point = |i: usize| Point::new((i % w) as i32, (i / w) as i32);

    let start_idx = idx(from)?;
    let goal_idx = idx(to)?;

    if start_idx == goal_idx {
        return Some(vec![from]);
    }

    let mut nodes = vec![Node::default(); w * height.max(0) as usize];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq: u32 = 0;

    nodes[start_idx].g = 0;
    open.push(NodeRef {
        idx: start_idx,
        f: pather.estimate(from, to),
        g: 0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Skip stale entries superseded by a cheaper route.
        if nodes[ci].closed || current.g != nodes[ci].g {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        nodes[ci].closed = true;
        let current_point = point(ci);

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = idx(np) else {
                continue;
            };
            if nodes[ni].closed {
                continue;
            }
            let tentative_g = current.g + pather.cost(current_point, np);
            if tentative_g >= nodes[ni].g {
                continue;
            }

            nodes[ni].g = tentative_g;
            nodes[ni].parent = ci;
            seq = seq.wrapping_add(1);
            open.push(NodeRef {
                idx: ni,
                f: tentative_g + pather.estimate(np, to),
                g: tentative_g,
                seq,
            });
        }
    };

    if !found {
        return None;
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(point(ci));
        ci = nodes[ci].parent;
    }
    path.reverse();
    Some(path)
}
