//! Maxrects is a small library for packing rectangles into a fixed-size bin
//! using the maximal rectangles algorithm.
//!
//! The packer tracks the unused space of its bin as a set of maximal free
//! rectangles: rectangles of free space that are not contained in any other
//! free rectangle. The set may contain rectangles that overlap each other.
//! After every placement, the free rectangle that received the item is split,
//! every free rectangle the item overlaps is clipped, and rectangles that
//! became redundant are dropped.
//!
//! Which free rectangle receives an item is decided by a [`Heuristic`]. All of
//! them are greedy; none of them guarantees an optimal packing.
//!
//! ## Example
//! ```
//! use maxrects::{Heuristic, Item, MaxRectsPacker};
//!
//! let mut packer = MaxRectsPacker::new((8, 4));
//!
//! let mut item = Item::new((2, 2));
//! assert!(packer.place(&mut item, Heuristic::BestArea));
//! assert_eq!(item.position(), Some((0, 0)));
//!
//! // Items can also be packed in bulk. Items that don't fit are handed back.
//! let output = packer.pack(vec![Item::new((4, 2)), Item::new((9, 9))], Heuristic::BestArea);
//! assert_eq!(output.placed().len(), 1);
//! assert_eq!(output.unplaced().len(), 1);
//! ```
//!
//! [`Heuristic`]: enum.Heuristic.html

mod free_space;
mod geometry;
mod heuristic;
mod id;
mod packer;
mod types;

pub use free_space::*;
pub use geometry::*;
pub use heuristic::Heuristic;
pub use id::*;
pub use packer::*;
pub use types::*;
