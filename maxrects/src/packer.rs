use crate::{
    free_space::{prune_overlaps, split},
    geometry::{bounding_box, FreeRectangle},
    heuristic::Heuristic,
    types::{Item, OutputItem, PackOutput},
};

/// How a consumed free rectangle is divided around a placed item.
///
/// Only the maximal split exists today; the setting is accepted so that
/// configurations naming it stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitHeuristic {
    Default,
}

impl Default for SplitHeuristic {
    fn default() -> Self {
        SplitHeuristic::Default
    }
}

/// Packs items into a single fixed-size bin, tracking the remaining space as a
/// set of maximal free rectangles.
///
/// Every placement either fully succeeds, leaving the free set exact and free
/// of redundant rectangles, or fails without touching any state.
#[derive(Debug, Clone)]
pub struct MaxRectsPacker {
    bin_size: (u32, u32),
    rotation: bool,
    rectangle_merge: bool,
    split_heuristic: SplitHeuristic,
    free_rects: Vec<FreeRectangle>,
    items: Vec<Item>,
}

impl MaxRectsPacker {
    /// Creates a packer for an empty bin. A bin with a zero dimension has no
    /// free space, so nothing can ever be placed into it.
    pub fn new(bin_size: (u32, u32)) -> Self {
        let free_rects = if bin_size.0 == 0 || bin_size.1 == 0 {
            Vec::new()
        } else {
            vec![FreeRectangle::new(bin_size.0, bin_size.1, 0, 0)]
        };

        Self {
            bin_size,
            rotation: true,
            rectangle_merge: false,
            split_heuristic: SplitHeuristic::default(),
            free_rects,
            items: Vec::new(),
        }
    }

    /// Records whether items may be rotated. Placement never rotates an item,
    /// see [`fits`](fn.fits.html).
    pub fn with_rotation(mut self, rotation: bool) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_rectangle_merge(mut self, rectangle_merge: bool) -> Self {
        if rectangle_merge {
            log::debug!("Rectangle merging was requested but has no effect on this packer");
        }

        self.rectangle_merge = rectangle_merge;
        self
    }

    pub fn with_split_heuristic(mut self, split_heuristic: SplitHeuristic) -> Self {
        self.split_heuristic = split_heuristic;
        self
    }

    #[inline]
    pub fn bin_size(&self) -> (u32, u32) {
        self.bin_size
    }

    #[inline]
    pub fn allows_rotation(&self) -> bool {
        self.rotation
    }

    #[inline]
    pub fn rectangle_merge(&self) -> bool {
        self.rectangle_merge
    }

    #[inline]
    pub fn split_heuristic(&self) -> SplitHeuristic {
        self.split_heuristic
    }

    /// The current set of maximal free rectangles.
    #[inline]
    pub fn free_rects(&self) -> &[FreeRectangle] {
        &self.free_rects
    }

    /// Every item placed so far, in placement order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Tries to place `item` into the bin using `heuristic`.
    ///
    /// On success the item's position is filled in and a copy of it is kept by
    /// the packer. Returns `false` if no free rectangle can hold the item, in
    /// which case neither the item nor the packer are changed.
    ///
    /// Panics if `item` has already been placed.
    pub fn place(&mut self, item: &mut Item, heuristic: Heuristic) -> bool {
        assert!(
            !item.is_placed(),
            "item {} was already placed at {:?}",
            item.id(),
            item.position()
        );

        log::trace!(
            "For item {} ({}x{}), evaluating {} free rectangles with {}",
            item.id(),
            item.width(),
            item.height(),
            self.free_rects.len(),
            heuristic
        );

        match heuristic.select(&self.free_rects, item, &self.items, self.bin_size) {
            Some(index) => {
                self.commit(index, item);
                true
            }
            None => {
                log::trace!("Item {} did not fit in this bin.", item.id());
                false
            }
        }
    }

    pub fn first_fit(&mut self, item: &mut Item) -> bool {
        self.place(item, Heuristic::FirstFit)
    }

    pub fn best_area(&mut self, item: &mut Item) -> bool {
        self.place(item, Heuristic::BestArea)
    }

    pub fn best_shortside(&mut self, item: &mut Item) -> bool {
        self.place(item, Heuristic::BestShortSide)
    }

    pub fn best_longside(&mut self, item: &mut Item) -> bool {
        self.place(item, Heuristic::BestLongSide)
    }

    pub fn best_bottomleft(&mut self, item: &mut Item) -> bool {
        self.place(item, Heuristic::BestBottomLeft)
    }

    pub fn contact_point(&mut self, item: &mut Item) -> bool {
        self.place(item, Heuristic::ContactPoint)
    }

    /// Places every item in order, skipping the ones that don't fit.
    pub fn pack<I: IntoIterator<Item = Item>>(&mut self, items: I, heuristic: Heuristic) -> PackOutput {
        let mut placed = Vec::new();
        let mut unplaced = Vec::new();

        for mut item in items {
            if self.place(&mut item, heuristic) {
                if let Some(position) = item.position() {
                    placed.push(OutputItem {
                        id: item.id(),
                        position,
                        size: item.size(),
                    });
                }
            } else {
                unplaced.push(item);
            }
        }

        log::debug!(
            "Packed {} items into a {}x{} bin with {}, {} did not fit",
            placed.len(),
            self.bin_size.0,
            self.bin_size.1,
            heuristic,
            unplaced.len()
        );

        PackOutput {
            bin_size: self.bin_size,
            placed,
            unplaced,
        }
    }

    fn commit(&mut self, index: usize, item: &mut Item) {
        let rect = self.free_rects.remove(index);

        log::debug!("Placing item {} at ({}, {})", item.id(), rect.x(), rect.y());

        item.position = Some((rect.x(), rect.y()));
        self.items.push(*item);

        let remainders = split(&rect, item);
        self.free_rects.extend(remainders);

        let bounds = bounding_box(item);
        prune_overlaps(&mut self.free_rects, &bounds);

        log::trace!("Free rectangles are now {:?}", self.free_rects);
    }
}
