//! Card instance identification.
//!
//! Every physical card in a match (loaded from data or spawned by an effect)
//! carries a unique `CardUid`. Names are not unique - a deck may hold three
//! copies of "Blue Stripes Commando" - so effects that must single out one
//! card (a hero excluding itself from Scorch, Decoy) compare uids.
//!
//! ## Usage
//!
//! ```
//! use rust_gwent::core::UidAllocator;
//!
//! let mut uids = UidAllocator::new();
//! let a = uids.alloc();
//! let b = uids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(uids.issued(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Create a uid from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw uid value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardUid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic uid source.
///
/// One allocator is owned by each `Game` and shared with the deck loader and
/// with effects that spawn new cards (Foglet), so uids never collide within
/// a match.
#[derive(Clone, Debug, Default)]
pub struct UidAllocator {
    next: u32,
}

impl UidAllocator {
    /// Create an allocator starting at uid 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first uid is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocate the next uid.
    pub fn alloc(&mut self) -> CardUid {
        let uid = CardUid(self.next);
        self.next += 1;
        uid
    }

    /// Number of uids handed out so far (relative to zero).
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}
