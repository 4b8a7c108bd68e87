use std::collections::{BTreeMap, HashMap};

use crate::{
    error::GrowError,
    id::{BinId, IdAllocator},
    shelf::Shelf,
    types::{Bin, PackedBin},
};

const DEFAULT_SIZE: u32 = 64;

/// Options that are fixed for the lifetime of a `ShelfPack`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShelfPackOptions {
    /// If set, the canvas grows whenever a bin doesn't fit instead of the
    /// placement failing.
    pub auto_resize: bool,
}

/// Options for a single call to `ShelfPack::pack`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackOptions {
    /// Write the resulting position and id back into each placed `Bin`.
    pub in_place: bool,

    /// After the batch, shrink the canvas to the area actually used. See
    /// `ShelfPack::shrink`.
    pub shrink_to_fit: bool,
}

/// A rectangle packer using the Shelf Best Height Fit heuristic.
///
/// The canvas is split into horizontal shelves stacked from the top. Each bin
/// goes on the shelf whose height matches it exactly, or failing that the
/// shelf that leaves the least unused height above it. When no shelf fits, a
/// new shelf as tall as the bin is opened below the last one. With
/// auto-resize on, the canvas grows when there's no room left for a new
/// shelf.
///
/// Previously placed bins are never moved.
#[derive(Debug, Clone)]
pub struct ShelfPack {
    width: u32,
    height: u32,
    auto_resize: bool,
    shelves: Vec<Shelf>,
    bins: HashMap<BinId, PackedBin>,
    ids: IdAllocator,
    stats: BTreeMap<u32, u32>,
}

impl Default for ShelfPack {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl ShelfPack {
    /// Creates a packer with a fixed-size canvas. A dimension of zero is
    /// replaced with the default of 64.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_options(width, height, ShelfPackOptions::default())
    }

    pub fn with_options(width: u32, height: u32, options: ShelfPackOptions) -> Self {
        let width = if width > 0 { width } else { DEFAULT_SIZE };
        let height = if height > 0 { height } else { DEFAULT_SIZE };

        Self {
            width,
            height,
            auto_resize: options.auto_resize,
            shelves: Vec::new(),
            bins: HashMap::new(),
            ids: IdAllocator::default(),
            stats: BTreeMap::new(),
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
    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    #[inline]
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// How many bins have been placed for each requested height.
    ///
    /// Only kept for diagnostics; placement never looks at it.
    #[inline]
    pub fn stats(&self) -> &BTreeMap<u32, u32> {
        &self.stats
    }

    pub fn get_bin(&self, id: BinId) -> Option<&PackedBin> {
        self.bins.get(&id)
    }

    /// All bins placed since the packer was created or last cleared, in no
    /// particular order.
    pub fn bins(&self) -> impl Iterator<Item = &PackedBin> {
        self.bins.values()
    }

    /// Packs a batch of bins in order.
    ///
    /// Bins with a zero dimension, and bins that don't fit, are skipped. The
    /// returned list only contains bins that were placed, so it may be shorter
    /// than `bins`. With `options.in_place`, placed records also get their
    /// position and id filled in, and skipped records have their position
    /// cleared.
    pub fn pack(
        &mut self,
        bins: &mut [Bin],
        options: PackOptions,
    ) -> Result<Vec<PackedBin>, GrowError> {
        log::trace!("Packing {} bins", bins.len());

        let mut results = Vec::with_capacity(bins.len());

        for bin in bins.iter_mut() {
            // Records may carry a position from an earlier batch.
            if options.in_place {
                bin.position = None;
            }

            if bin.is_empty() {
                continue;
            }

            let (width, height) = bin.size;
            let packed = match self.pack_request(bin.id, width, height)? {
                Some(packed) => packed,
                None => {
                    log::trace!("Bin {}x{} did not fit, skipping", width, height);
                    continue;
                }
            };

            if options.in_place {
                bin.place(&packed);
            }

            results.push(packed);
        }

        if options.shrink_to_fit {
            self.shrink();
        }

        log::trace!(
            "Finished packing {} of {} bins into {}x{}",
            results.len(),
            bins.len(),
            self.width,
            self.height
        );

        Ok(results)
    }

    /// Packs a single bin, giving it a newly generated id.
    ///
    /// Returns `Ok(None)` if there is no room for the bin. The only error is
    /// the canvas overflowing while growing to fit the bin.
    pub fn pack_one(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<Option<PackedBin>, GrowError> {
        self.pack_request(None, width, height)
    }

    /// Packs a single bin with a caller-chosen id.
    ///
    /// If a bin with this id has already been placed, its existing placement
    /// is returned and nothing new is allocated, even if `width` and `height`
    /// differ from the size it was placed with.
    pub fn pack_one_with_id(
        &mut self,
        id: u32,
        width: u32,
        height: u32,
    ) -> Result<Option<PackedBin>, GrowError> {
        self.pack_request(Some(BinId::new(id)), width, height)
    }

    /// Grows the canvas. Fails without changing anything if either dimension
    /// would shrink.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width < self.width || height < self.height {
            return false;
        }

        self.width = width;
        self.height = height;

        for shelf in &mut self.shelves {
            shelf.grow(width);
        }

        true
    }

    /// Shrinks the canvas to the tight bounding box of the shelves: as wide as
    /// the widest run of placed bins, as tall as all shelves together.
    ///
    /// Placed bins all lie inside this box, so no placement is invalidated.
    /// Does nothing if no bins have been placed.
    pub fn shrink(&mut self) {
        if self.shelves.is_empty() {
            return;
        }

        let width = self
            .shelves
            .iter()
            .map(Shelf::used_width)
            .max()
            .unwrap_or(0);
        let height: u32 = self.shelves.iter().map(Shelf::height).sum();

        log::debug!(
            "Shrinking canvas from {}x{} to {}x{}",
            self.width,
            self.height,
            width,
            height
        );

        for shelf in &mut self.shelves {
            shelf.trim(width);
        }

        self.width = width;
        self.height = height;
    }

    /// Removes all shelves, placed bins, and statistics. The canvas keeps its
    /// current size.
    pub fn clear(&mut self) {
        self.shelves.clear();
        self.bins.clear();
        self.ids.reset();
        self.stats.clear();
    }

    fn pack_request(
        &mut self,
        id: Option<BinId>,
        width: u32,
        height: u32,
    ) -> Result<Option<PackedBin>, GrowError> {
        if let Some(existing) = id.and_then(|id| self.bins.get(&id)) {
            if existing.size() != (width, height) {
                log::debug!(
                    "Bin {} is already placed as {}x{}, ignoring requested size {}x{}",
                    existing.id(),
                    existing.width(),
                    existing.height(),
                    width,
                    height
                );
            }

            return Ok(Some(*existing));
        }

        if width == 0 || height == 0 {
            return Ok(None);
        }

        let id = match id {
            Some(id) => id,
            None => match self.ids.peek() {
                Some(id) if !self.bins.contains_key(&id) => id,
                _ => {
                    log::warn!(
                        "No bin ids left to generate, not placing {}x{}",
                        width,
                        height
                    );
                    return Ok(None);
                }
            },
        };

        // Every pass either places the bin or doubles at least one canvas
        // dimension, so this ends once the bin fits or the canvas overflows.
        loop {
            if let Some(index) = self.choose_shelf(width, height) {
                if let Some(packed) = self.shelves[index].alloc(id, width, height) {
                    self.ids.observe(id);
                    self.bins.insert(id, packed);
                    *self.stats.entry(height).or_insert(0) += 1;

                    log::trace!(
                        "Placed bin {} ({}x{}) at {:?}",
                        id,
                        width,
                        height,
                        packed.position()
                    );

                    return Ok(Some(packed));
                }
            }

            if !self.auto_resize {
                return Ok(None);
            }

            let (new_width, new_height) = self.grown_size(width, height)?;

            log::debug!(
                "Growing canvas from {}x{} to {}x{} to fit {}x{}",
                self.width,
                self.height,
                new_width,
                new_height,
                width,
                height
            );

            self.resize(new_width, new_height);
        }
    }

    /// Finds the shelf a bin of this size should go on, opening a new shelf if
    /// no existing one can take it.
    fn choose_shelf(&mut self, width: u32, height: u32) -> Option<usize> {
        let mut used_height = 0;
        let mut best: Option<(usize, u32)> = None;

        for (index, shelf) in self.shelves.iter().enumerate() {
            used_height += shelf.height();

            if !shelf.fits(width, height) {
                continue;
            }

            // Shelves of exactly the right height are taken immediately.
            if shelf.height() == height {
                return Some(index);
            }

            let waste = shelf.height() - height;
            let is_better = match best {
                Some((_, best_waste)) => waste < best_waste,
                None => true,
            };

            if is_better {
                best = Some((index, waste));
            }
        }

        if let Some((index, _)) = best {
            return Some(index);
        }

        if height <= self.height - used_height && width <= self.width {
            self.shelves.push(Shelf::new(used_height, self.width, height));
            return Some(self.shelves.len() - 1);
        }

        None
    }

    /// The canvas size to try next when a bin of this size doesn't fit.
    ///
    /// The smaller dimension doubles, with width winning ties. A dimension
    /// the bin itself exceeds is doubled from the bin's size instead.
    fn grown_size(&self, width: u32, height: u32) -> Result<(u32, u32), GrowError> {
        let overflow = || GrowError::CanvasOverflow {
            width: self.width,
            height: self.height,
            request_width: width,
            request_height: height,
        };

        let mut new_width = self.width;
        let mut new_height = self.height;

        if self.width <= self.height || width > self.width {
            new_width = width.max(self.width).checked_mul(2).ok_or_else(overflow)?;
        }

        if self.height < self.width || height > self.height {
            new_height = height
                .max(self.height)
                .checked_mul(2)
                .ok_or_else(overflow)?;
        }

        Ok((new_width, new_height))
    }
}
