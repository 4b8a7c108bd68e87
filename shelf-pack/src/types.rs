use crate::{geometry::Rect, id::BinId};

/// A request to place a rectangle, as handed to `ShelfPack::pack`.
///
/// `Bin` is a plain record owned by the caller. The id is optional; bins
/// without one are given an id by the packer. When packing with
/// `PackOptions::in_place`, the packer writes the resulting position and id
/// back into the record, so callers can tell placed bins from skipped ones by
/// checking `position()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    pub(crate) id: Option<BinId>,
    pub(crate) size: (u32, u32),
    pub(crate) position: Option<(u32, u32)>,
}

impl Bin {
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            id: None,
            size,
            position: None,
        }
    }

    #[inline]
    pub fn with_id(id: u32, size: (u32, u32)) -> Self {
        Self {
            id: Some(BinId::new(id)),
            size,
            position: None,
        }
    }

    #[inline]
    pub fn id(&self) -> Option<BinId> {
        self.id
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn position(&self) -> Option<(u32, u32)> {
        self.position
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size.0 == 0 || self.size.1 == 0
    }

    pub(crate) fn place(&mut self, packed: &PackedBin) {
        self.id = Some(packed.id);
        self.position = Some(packed.position());
    }
}

/// A bin that was placed on the canvas by a `ShelfPack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedBin {
    pub(crate) id: BinId,
    pub(crate) rect: Rect,
}

impl PackedBin {
    pub(crate) fn new(id: BinId, position: (u32, u32), size: (u32, u32)) -> Self {
        Self {
            id,
            rect: Rect {
                pos: position,
                size,
            },
        }
    }

    #[inline]
    pub fn id(&self) -> BinId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.rect.pos.0
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.rect.pos.1
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.rect.size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.rect.size.1
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect.max()
    }

    /// Whether this bin covers any of the same area as `other`.
    pub fn intersects(&self, other: &PackedBin) -> bool {
        self.rect.intersects(&other.rect)
    }
}
