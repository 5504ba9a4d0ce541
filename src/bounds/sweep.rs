//! Sort-and-sweep candidate search over envelopes.
//!
//! Used by the noder and the validity checks to avoid comparing every pair
//! of segments. Boxes are sorted by their minimum x, and each box is only
//! compared against boxes whose x range starts before it ends.

use super::Envelope;

/// Returns every pair `(i, j)` with `i < j` whose envelopes, grown by
/// `tolerance`, intersect.
pub(crate) fn overlapping_pairs(boxes: &[Envelope], tolerance: f64) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| {
        boxes[a]
            .min
            .x
            .partial_cmp(&boxes[b].min.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut pairs = Vec::new();
    for (pos, &i) in order.iter().enumerate() {
        let grown = boxes[i].expand_by(tolerance);
        for &j in &order[pos + 1..] {
            if boxes[j].min.x > grown.max.x {
                break;
            }
            if grown.intersects(boxes[j]) {
                pairs.push((i.min(j), i.max(j)));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Coord;

    fn unit_box(x: f64, y: f64) -> Envelope {
        Envelope::from_corners(Coord::new(x, y), Coord::new(x + 1.0, y + 1.0))
    }

    #[test]
    fn test_finds_overlaps_only() {
        let boxes = vec![unit_box(0.0, 0.0), unit_box(5.0, 0.0), unit_box(0.5, 0.5)];
        let pairs = overlapping_pairs(&boxes, 0.0);
        assert_eq!(pairs, vec![(0, 2)]);
    }

    #[test]
    fn test_tolerance_widens_search() {
        let boxes = vec![unit_box(0.0, 0.0), unit_box(1.1, 0.0)];
        assert!(overlapping_pairs(&boxes, 0.0).is_empty());
        assert_eq!(overlapping_pairs(&boxes, 0.2), vec![(0, 1)]);
    }
}
