//! A rectangle packer for sprite sheets and glyph atlases, using the Shelf
//! Best Height Fit heuristic.
//!
//! [`ShelfPack`][ShelfPack] splits its canvas into horizontal shelves. Each
//! bin goes on the existing shelf that wastes the least height, and a new shelf
//! is opened when none fits. Optionally, the canvas doubles in size when it
//! runs out of room. Bins can be packed one at a time as they arrive, or as a
//! batch.
//!
//! ## Example
//! ```
//! use shelf_pack::{Bin, PackOptions, ShelfPack};
//!
//! let mut sprite = ShelfPack::new(64, 64);
//!
//! // Pack a batch of bins. Bins that don't fit are left out of the results.
//! let mut bins = [
//!     Bin::with_id(1, (12, 12)),
//!     Bin::with_id(2, (12, 16)),
//!     Bin::with_id(3, (12, 24)),
//! ];
//! let results = sprite.pack(&mut bins, PackOptions::default()).unwrap();
//! assert_eq!(results.len(), 3);
//!
//! // Or pack a single bin.
//! let packed = sprite.pack_one(10, 10).unwrap().expect("should have room");
//! assert_eq!(packed.position(), (12, 0));
//! ```
//!
//! [ShelfPack]: struct.ShelfPack.html

mod error;
mod geometry;
mod id;
mod packer;
mod shelf;
mod types;

pub use error::*;
pub use id::BinId;
pub use packer::*;
pub use shelf::*;
pub use types::*;
