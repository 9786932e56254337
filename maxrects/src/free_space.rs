//! Maintenance of the maximal free rectangle set.
//!
//! After an item is committed into a free rectangle, that rectangle is
//! replaced by the maximal rectangles left over around the item. Every other
//! free rectangle the item overlaps is then clipped, and rectangles that have
//! become fully contained in another are dropped.

use crate::{
    geometry::{contained_in, fits, intersects, overlap_region, BoundingBox, FreeRectangle},
    types::Item,
};

/// Returns the maximal rectangles of `rect` that are not covered by `item`
/// when the item sits in the rectangle's bottom-left corner.
///
/// The strip to the right of the item comes first, followed by the strip above
/// it. Both span the full extent of `rect` along their long axis, so they
/// overlap each other whenever both exist.
pub fn split(rect: &FreeRectangle, item: &Item) -> Vec<FreeRectangle> {
    assert!(
        fits(item, rect, false),
        "cannot split {:?} around an item of size {:?}",
        rect,
        item.size()
    );

    let (width, height) = item.size();
    let mut results = Vec::with_capacity(2);

    if width < rect.width() {
        results.push(FreeRectangle::new(
            rect.width() - width,
            rect.height(),
            rect.x() + width,
            rect.y(),
        ));
    }

    if height < rect.height() {
        results.push(FreeRectangle::new(
            rect.width(),
            rect.height() - height,
            rect.x(),
            rect.y() + height,
        ));
    }

    results
}

/// Returns the maximal rectangles of `rect` lying outside of `overlap`, in
/// left, right, bottom, top order.
///
/// An overlap covering the whole rectangle produces nothing.
pub fn clip_overlap(rect: &FreeRectangle, overlap: &BoundingBox) -> Vec<FreeRectangle> {
    let mut results = Vec::with_capacity(4);

    if overlap.x1 > rect.x() {
        results.push(FreeRectangle::new(
            overlap.x1 - rect.x(),
            rect.height(),
            rect.x(),
            rect.y(),
        ));
    }

    if overlap.x2 < rect.right() {
        results.push(FreeRectangle::new(
            rect.right() - overlap.x2,
            rect.height(),
            overlap.x2,
            rect.y(),
        ));
    }

    if overlap.y1 > rect.y() {
        results.push(FreeRectangle::new(
            rect.width(),
            overlap.y1 - rect.y(),
            rect.x(),
            rect.y(),
        ));
    }

    if overlap.y2 < rect.top() {
        results.push(FreeRectangle::new(
            rect.width(),
            rect.top() - overlap.y2,
            rect.x(),
            overlap.y2,
        ));
    }

    results
}

/// Clips every free rectangle that intersects `bounds`, then removes any
/// rectangles made redundant by the clipping.
pub fn prune_overlaps(rects: &mut Vec<FreeRectangle>, bounds: &BoundingBox) {
    let mut result = Vec::with_capacity(rects.len());

    for rect in rects.iter() {
        if intersects(rect, bounds) {
            let overlap = overlap_region(rect, bounds);
            let remainders = clip_overlap(rect, &overlap);

            log::trace!(
                "Clipped {:?} against {:?} into {} rectangles",
                rect,
                bounds,
                remainders.len()
            );

            result.extend(remainders);
        } else {
            result.push(*rect);
        }
    }

    *rects = result;
    remove_redundant(rects);
}

/// Removes every rectangle that is fully contained in another member of the
/// set. Exact duplicates collapse into the later copy.
pub fn remove_redundant(rects: &mut Vec<FreeRectangle>) {
    let before = rects.len();

    let mut i = 0;
    'outer: while i < rects.len() {
        let mut j = i + 1;

        while j < rects.len() {
            if contained_in(&rects[j], &rects[i]) {
                // Whatever now sits at index i still has to be compared
                // against everything after it.
                rects.remove(i);
                continue 'outer;
            }

            if contained_in(&rects[i], &rects[j]) {
                rects.remove(j);
            } else {
                j += 1;
            }
        }

        i += 1;
    }

    if rects.len() != before {
        log::trace!("Removed {} redundant rectangles", before - rects.len());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashSet;

    fn set(rects: &[FreeRectangle]) -> HashSet<FreeRectangle> {
        rects.iter().copied().collect()
    }

    #[test]
    fn split_rectangle() {
        let item = Item::new((2, 2));
        let rect = FreeRectangle::new(4, 4, 0, 0);

        let remainders = split(&rect, &item);
        assert_eq!(
            remainders,
            vec![
                FreeRectangle::new(2, 4, 2, 0),
                FreeRectangle::new(4, 2, 0, 2),
            ]
        );
    }

    #[test]
    fn split_perfect_fit() {
        let item = Item::new((3, 5));
        let rect = FreeRectangle::new(3, 5, 2, 2);

        assert!(split(&rect, &item).is_empty());
    }

    #[test]
    fn split_single_axis() {
        let item = Item::new((3, 2));

        assert_eq!(
            split(&FreeRectangle::new(3, 5, 1, 1), &item),
            vec![FreeRectangle::new(3, 3, 1, 3)]
        );
        assert_eq!(
            split(&FreeRectangle::new(7, 2, 1, 1), &item),
            vec![FreeRectangle::new(4, 2, 4, 1)]
        );
    }

    #[test]
    #[should_panic(expected = "cannot split")]
    fn split_oversized_item() {
        split(&FreeRectangle::new(2, 2, 0, 0), &Item::new((3, 1)));
    }

    #[test]
    fn clip_surrounded_overlap() {
        let rect = FreeRectangle::new(3, 3, 0, 0);
        let overlap = overlap_region(&rect, &BoundingBox::new(1, 1, 2, 2));

        let remainders = clip_overlap(&rect, &overlap);
        assert_eq!(
            remainders,
            vec![
                FreeRectangle::new(1, 3, 0, 0),
                FreeRectangle::new(1, 3, 2, 0),
                FreeRectangle::new(3, 1, 0, 0),
                FreeRectangle::new(3, 1, 0, 2),
            ]
        );
    }

    #[test]
    fn clip_full_cover() {
        let rect = FreeRectangle::new(2, 2, 1, 1);
        let overlap = overlap_region(&rect, &BoundingBox::new(0, 0, 4, 4));

        assert!(clip_overlap(&rect, &overlap).is_empty());
    }

    #[test]
    fn clip_partial_overlap() {
        let rect = FreeRectangle::new(4, 4, 0, 0);
        let overlap = overlap_region(&rect, &BoundingBox::new(3, 0, 7, 2));

        assert_eq!(
            clip_overlap(&rect, &overlap),
            vec![
                FreeRectangle::new(3, 4, 0, 0),
                FreeRectangle::new(4, 2, 0, 2),
            ]
        );
    }

    #[test]
    fn remove_contained() {
        let mut rects = vec![
            FreeRectangle::new(3, 3, 0, 0),
            FreeRectangle::new(1, 1, 1, 1),
            FreeRectangle::new(2, 1, 5, 1),
            FreeRectangle::new(1, 1, 5, 1),
        ];

        remove_redundant(&mut rects);
        assert_eq!(
            set(&rects),
            set(&[FreeRectangle::new(3, 3, 0, 0), FreeRectangle::new(2, 1, 5, 1)])
        );
    }

    #[test]
    fn remove_keeps_partial_overlaps() {
        let outer = FreeRectangle::new(3, 3, 0, 0);
        let inner = FreeRectangle::new(1, 1, 1, 1);
        let partial = FreeRectangle::new(3, 3, 2, 2);
        let mut rects = vec![inner, outer, partial];

        remove_redundant(&mut rects);
        assert_eq!(rects, vec![outer, partial]);
    }

    #[test]
    fn remove_cascading() {
        // Each rectangle is contained in the next one, so only the last one
        // survives no matter which index gets removed first.
        let mut rects = vec![
            FreeRectangle::new(1, 1, 0, 0),
            FreeRectangle::new(2, 2, 0, 0),
            FreeRectangle::new(3, 3, 0, 0),
            FreeRectangle::new(4, 4, 0, 0),
        ];

        remove_redundant(&mut rects);
        assert_eq!(rects, vec![FreeRectangle::new(4, 4, 0, 0)]);
    }

    #[test]
    fn remove_duplicates() {
        let rect = FreeRectangle::new(2, 2, 1, 1);
        let mut rects = vec![rect, rect, rect];

        remove_redundant(&mut rects);
        assert_eq!(rects, vec![rect]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut rects = vec![
            FreeRectangle::new(8, 2, 0, 2),
            FreeRectangle::new(3, 3, 5, 1),
            FreeRectangle::new(1, 3, 0, 1),
            FreeRectangle::new(3, 4, 5, 0),
            FreeRectangle::new(7, 2, 1, 2),
        ];

        remove_redundant(&mut rects);
        let once = rects.clone();
        remove_redundant(&mut rects);

        assert_eq!(rects, once);
        assert_eq!(
            set(&once),
            set(&[
                FreeRectangle::new(8, 2, 0, 2),
                FreeRectangle::new(1, 3, 0, 1),
                FreeRectangle::new(3, 4, 5, 0),
            ])
        );
    }

    #[test]
    fn prune() {
        let mut rects = vec![FreeRectangle::new(4, 4, 0, 0), FreeRectangle::new(1, 1, 0, 0)];

        prune_overlaps(&mut rects, &BoundingBox::new(0, 0, 2, 2));
        assert_eq!(
            set(&rects),
            set(&[FreeRectangle::new(2, 4, 2, 0), FreeRectangle::new(4, 2, 0, 2)])
        );
    }

    #[test]
    fn prune_leaves_disjoint_rectangles() {
        let untouched = FreeRectangle::new(2, 2, 4, 4);
        let mut rects = vec![untouched];

        prune_overlaps(&mut rects, &BoundingBox::new(0, 0, 4, 4));
        assert_eq!(rects, vec![untouched]);
    }
}
