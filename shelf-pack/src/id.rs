use std::fmt;

/// Identifies a bin within a single `ShelfPack`.
///
/// Ids are either supplied by the caller or handed out by the packer that
/// placed the bin. They are only unique within that packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinId(u32);

impl BinId {
    #[inline]
    pub fn new(value: u32) -> Self {
        BinId(value)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for BinId {
    fn from(value: u32) -> Self {
        BinId(value)
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out bin ids for one packer.
///
/// Supplied ids are observed so that generated ones never collide with them.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    last_id: u32,
}

impl IdAllocator {
    /// The id the next generated bin will get, or `None` once every id up to
    /// `u32::MAX` has been used. Nothing is reserved until the id is passed to
    /// `observe`.
    pub fn peek(&self) -> Option<BinId> {
        self.last_id.checked_add(1).map(BinId)
    }

    pub fn observe(&mut self, id: BinId) {
        self.last_id = self.last_id.max(id.0);
    }

    pub fn reset(&mut self) {
        self.last_id = 0;
    }
}
