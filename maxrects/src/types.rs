use crate::id::Id;

/// An input to the packing routines.
///
/// `Item` is a 2D size, a Maxrects-generated unique identifier, and the
/// position the item was given once it has been placed. Items start out
/// unplaced; a successful placement writes the position back into the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
    pub(crate) position: Option<(u32, u32)>,
}

impl Item {
    /// Creates a new, unplaced item.
    ///
    /// Panics if either dimension is zero.
    pub fn new(size: (u32, u32)) -> Self {
        assert!(
            size.0 > 0 && size.1 > 0,
            "Item dimensions must be positive, got {}x{}",
            size.0,
            size.1
        );

        Self {
            id: Id::new(),
            size,
            position: None,
        }
    }

    /// Creates an item that is already located at `position`. Useful for
    /// evaluating the geometry helpers against a known layout.
    pub fn with_position(size: (u32, u32), position: (u32, u32)) -> Self {
        Self {
            position: Some(position),
            ..Self::new(size)
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }

    /// The bottom-left corner of the item, if it has been placed.
    #[inline]
    pub fn position(&self) -> Option<(u32, u32)> {
        self.position
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }
}

/// An item that was placed by [`MaxRectsPacker::pack`].
///
/// `OutputItem` corresponds 1:1 to a placed `Item`. It exposes the ID from the
/// input, as well as position and size.
///
/// [`MaxRectsPacker::pack`]: struct.MaxRectsPacker.html#method.pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputItem {
    pub(crate) id: Id,
    pub(crate) position: (u32, u32),
    pub(crate) size: (u32, u32),
}

impl OutputItem {
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.position
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (
            self.position.0 + self.size.0,
            self.position.1 + self.size.1,
        )
    }
}

/// The results from packing a batch of items into a single bin.
#[derive(Debug, Clone)]
pub struct PackOutput {
    pub(crate) bin_size: (u32, u32),
    pub(crate) placed: Vec<OutputItem>,
    pub(crate) unplaced: Vec<Item>,
}

impl PackOutput {
    #[inline]
    pub fn bin_size(&self) -> (u32, u32) {
        self.bin_size
    }

    /// Items that were placed, in the order they were committed.
    #[inline]
    pub fn placed(&self) -> &[OutputItem] {
        &self.placed
    }

    /// Items that did not fit anywhere in the bin, in input order. Their
    /// positions are still unset.
    #[inline]
    pub fn unplaced(&self) -> &[Item] {
        &self.unplaced
    }

    /// The fraction of the bin's area covered by placed items. An empty bin
    /// has a utilization of zero.
    pub fn utilization(&self) -> f64 {
        let bin_area = u64::from(self.bin_size.0) * u64::from(self.bin_size.1);
        if bin_area == 0 {
            return 0.0;
        }

        let used: u64 = self
            .placed
            .iter()
            .map(|item| u64::from(item.size.0) * u64::from(item.size.1))
            .sum();

        used as f64 / bin_area as f64
    }
}
