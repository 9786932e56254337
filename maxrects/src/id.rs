use std::{
    fmt,
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

static LAST_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifies an [`Item`](struct.Item.html) across packing calls.
///
/// IDs are unique for the lifetime of the process. Consumers are expected to
/// keep a mapping from ID back to their own records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroUsize);

impl Id {
    pub(crate) fn new() -> Self {
        let id = LAST_ID.fetch_add(1, Ordering::SeqCst);

        // The counter starts at 1 and would have to wrap all the way around to
        // produce zero.
        Id(NonZeroUsize::new(id).expect("Id counter overflowed"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Id::new();
        let b = Id::new();

        assert_ne!(a, b);
        assert!(a < b);
    }
}
