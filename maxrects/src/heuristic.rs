use std::{cmp::Reverse, fmt, str::FromStr};

use crate::{
    geometry::{bounding_box, common_interval_length, fits, FreeRectangle},
    types::Item,
};

/// A rule for choosing which free rectangle receives the next item.
///
/// Every heuristic only considers rectangles the item fits in upright, and
/// always puts the item in the chosen rectangle's bottom-left corner. When
/// several rectangles score equally, the one that comes first in the free set
/// wins unless the heuristic says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// The first rectangle in set order that fits.
    FirstFit,

    /// The rectangle with the smallest area.
    BestArea,

    /// The rectangle whose shorter leftover side is smallest.
    BestShortSide,

    /// The rectangle whose longer leftover side is smallest.
    BestLongSide,

    /// The rectangle that puts the item's top edge lowest. Ties go to the
    /// leftmost rectangle.
    BestBottomLeft,

    /// The rectangle where the item touches the most bin edge and
    /// already-placed items.
    ContactPoint,
}

impl Heuristic {
    pub const ALL: [Heuristic; 6] = [
        Heuristic::FirstFit,
        Heuristic::BestArea,
        Heuristic::BestShortSide,
        Heuristic::BestLongSide,
        Heuristic::BestBottomLeft,
        Heuristic::ContactPoint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::FirstFit => "first-fit",
            Heuristic::BestArea => "best-area",
            Heuristic::BestShortSide => "best-shortside",
            Heuristic::BestLongSide => "best-longside",
            Heuristic::BestBottomLeft => "best-bottomleft",
            Heuristic::ContactPoint => "contact-point",
        }
    }

    /// Picks the index of the free rectangle that `item` should go into, or
    /// `None` if the item fits nowhere.
    pub(crate) fn select(
        self,
        free_rects: &[FreeRectangle],
        item: &Item,
        placed: &[Item],
        bin_size: (u32, u32),
    ) -> Option<usize> {
        match self {
            Heuristic::FirstFit => select_by(free_rects, item, |_| ()),
            Heuristic::BestArea => select_by(free_rects, item, FreeRectangle::area),
            Heuristic::BestShortSide => {
                select_by(free_rects, item, |rect| short_side_leftover(item, rect))
            }
            Heuristic::BestLongSide => {
                select_by(free_rects, item, |rect| long_side_leftover(item, rect))
            }
            Heuristic::BestBottomLeft => {
                select_by(free_rects, item, |rect| bottom_left_key(item, rect))
            }
            Heuristic::ContactPoint => select_by(free_rects, item, |rect| {
                Reverse(contact_perimeter(item, rect, placed, bin_size))
            }),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(value: &str) -> Result<Heuristic, Self::Err> {
        Heuristic::ALL
            .iter()
            .copied()
            .find(|heuristic| heuristic.name() == value)
            .ok_or_else(|| {
                let names: Vec<_> = Heuristic::ALL.iter().map(|h| h.name()).collect();
                format!(
                    "Invalid heuristic '{}'. Valid options are: {}",
                    value,
                    names.join(", ")
                )
            })
    }
}

/// Finds the eligible rectangle with the smallest key. `min_by` keeps the first
/// of several equal minimums, which gives every heuristic its first-encountered
/// tie-break.
fn select_by<K, F>(free_rects: &[FreeRectangle], item: &Item, key: F) -> Option<usize>
where
    K: Ord + fmt::Debug,
    F: Fn(&FreeRectangle) -> K,
{
    free_rects
        .iter()
        .enumerate()
        .filter(|(_, rect)| fits(item, rect, false))
        .map(|(index, rect)| {
            let score = key(rect);
            log::trace!("Candidate {:?} scored {:?}", rect, score);
            (index, score)
        })
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(index, _)| index)
}

fn short_side_leftover(item: &Item, rect: &FreeRectangle) -> u32 {
    (rect.width() - item.width()).min(rect.height() - item.height())
}

fn long_side_leftover(item: &Item, rect: &FreeRectangle) -> u32 {
    (rect.width() - item.width()).max(rect.height() - item.height())
}

/// The resulting top edge of the item, then the rectangle's x coordinate.
fn bottom_left_key(item: &Item, rect: &FreeRectangle) -> (u32, u32) {
    (rect.y() + item.height(), rect.x())
}

/// Scores how much of the item's perimeter would touch the bin's edges or
/// already-placed items if it were put at the corner of `rect`.
pub(crate) fn contact_perimeter(
    item: &Item,
    rect: &FreeRectangle,
    placed: &[Item],
    bin_size: (u32, u32),
) -> u64 {
    let (width, height) = item.size();
    let (x1, y1) = (rect.x(), rect.y());
    let (x2, y2) = (x1 + width, y1 + height);

    let mut perimeter = 0u64;

    if x1 == 0 || x2 == bin_size.0 {
        perimeter += u64::from(height);
    }

    if y1 == 0 || y2 == bin_size.1 {
        perimeter += u64::from(width);
    }

    for other in placed {
        let bounds = bounding_box(other);

        if bounds.x1 == x2 || bounds.x2 == x1 {
            perimeter += u64::from(common_interval_length(bounds.y1, bounds.y2, y1, y2));
        }

        if bounds.y1 == y2 || bounds.y2 == y1 {
            perimeter += u64::from(common_interval_length(bounds.x1, bounds.x2, x1, x2));
        }
    }

    perimeter
}
