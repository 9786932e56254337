use crate::types::Item;

/// A block of bin space that is not covered by any placed item.
///
/// Free rectangles are values: splitting or clipping one always produces new
/// rectangles instead of adjusting the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreeRectangle {
    width: u32,
    height: u32,
    x: u32,
    y: u32,
}

impl FreeRectangle {
    #[inline]
    pub const fn new(width: u32, height: u32, x: u32, y: u32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.right(), self.top())
    }
}

/// Axis-aligned box given by its lower-left `(x1, y1)` and upper-right
/// `(x2, y2)` corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl BoundingBox {
    #[inline]
    pub const fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }
}

/// Tells whether `item` can be placed inside `rect`. With `allow_rotation`,
/// an item whose swapped dimensions fit is also accepted.
pub fn fits(item: &Item, rect: &FreeRectangle, allow_rotation: bool) -> bool {
    let (width, height) = item.size();

    if width <= rect.width && height <= rect.height {
        return true;
    }

    allow_rotation && height <= rect.width && width <= rect.height
}

/// The box covered by a placed item.
///
/// Panics if the item has not been given a position yet.
pub fn bounding_box(item: &Item) -> BoundingBox {
    let (x, y) = item
        .position()
        .unwrap_or_else(|| panic!("bounding_box called on unplaced item {}", item.id()));

    BoundingBox::new(x, y, x + item.width(), y + item.height())
}

/// Separating-axis test between a free rectangle and a box. Boxes that only
/// share an edge do not intersect.
pub fn intersects(rect: &FreeRectangle, bounds: &BoundingBox) -> bool {
    !(bounds.x1 >= rect.right()
        || bounds.x2 <= rect.x
        || bounds.y1 >= rect.top()
        || bounds.y2 <= rect.y)
}

/// The region shared by `rect` and `bounds`. Only meaningful when
/// [`intersects`](fn.intersects.html) holds for the pair.
pub fn overlap_region(rect: &FreeRectangle, bounds: &BoundingBox) -> BoundingBox {
    BoundingBox::new(
        rect.x.max(bounds.x1),
        rect.y.max(bounds.y1),
        rect.right().min(bounds.x2),
        rect.top().min(bounds.y2),
    )
}

/// Tells whether `inner` lies entirely within `outer`, edges inclusive.
pub fn contained_in(outer: &FreeRectangle, inner: &FreeRectangle) -> bool {
    inner.x >= outer.x
        && inner.right() <= outer.right()
        && inner.y >= outer.y
        && inner.top() <= outer.top()
}

/// Length of the overlap between the intervals `[a_start, a_end]` and
/// `[b_start, b_end]`, or zero if they are disjoint.
pub fn common_interval_length(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> u32 {
    if a_end < b_start || b_end < a_start {
        return 0;
    }

    a_end.min(b_end) - a_start.max(b_start)
}
