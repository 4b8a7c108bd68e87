use crate::{id::BinId, types::PackedBin};

/// A horizontal band of the canvas.
///
/// Bins are placed on a shelf left to right. A shelf's top and height are
/// fixed when it is created; its width can only grow, which happens when the
/// canvas it belongs to grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    free_width: u32,
}

impl Shelf {
    pub fn new(y: u32, width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y,
            width,
            height,
            free_width: width,
        }
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
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
    pub fn free_width(&self) -> u32 {
        self.free_width
    }

    /// The width consumed by bins placed on this shelf so far.
    #[inline]
    pub fn used_width(&self) -> u32 {
        self.x
    }

    /// Whether a bin of this size could be placed here right now.
    #[inline]
    pub fn fits(&self, width: u32, height: u32) -> bool {
        width <= self.free_width && height <= self.height
    }

    /// Places a bin at the shelf's cursor, or returns `None` without touching
    /// the shelf if it is too short or doesn't have enough width left.
    pub fn alloc(&mut self, id: BinId, width: u32, height: u32) -> Option<PackedBin> {
        if !self.fits(width, height) {
            return None;
        }

        let x = self.x;
        self.x += width;
        self.free_width -= width;

        Some(PackedBin::new(id, (x, self.y), (width, height)))
    }

    /// Widens the shelf. Fails if `width` is smaller than the current width.
    pub fn grow(&mut self, width: u32) -> bool {
        if width < self.width {
            return false;
        }

        self.free_width += width - self.width;
        self.width = width;
        true
    }

    /// Narrows the shelf down to `width`, which must not cut into space that
    /// has already been handed out.
    pub(crate) fn trim(&mut self, width: u32) {
        debug_assert!(width >= self.x && width <= self.width);

        self.free_width -= self.width - width;
        self.width = width;
    }
}
