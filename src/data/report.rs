use std::collections::BTreeMap;

use serde::Serialize;
use shelf_pack::{Bin, PackedBin, ShelfPack};

/// The layout produced by the `pack` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackReport {
    pub width: u32,
    pub height: u32,
    pub placed: Vec<Placement>,

    /// Bins from the input that were not placed, either because they had a
    /// zero dimension or because there was no room for them.
    pub skipped: Vec<SkippedBin>,

    /// Number of bins placed per requested height.
    pub stats: BTreeMap<u32, u32>,
}

impl PackReport {
    /// Builds a report from a packer and the bins it packed in place.
    pub fn new(sprite: &ShelfPack, results: &[PackedBin], bins: &[Bin]) -> Self {
        let placed = results.iter().map(Placement::from).collect();

        let skipped = bins
            .iter()
            .enumerate()
            .filter(|(_, bin)| !bin.is_placed())
            .map(|(index, bin)| SkippedBin {
                index,
                id: bin.id().map(|id| id.get()),
                w: bin.size().0,
                h: bin.size().1,
            })
            .collect();

        Self {
            width: sprite.width(),
            height: sprite.height(),
            placed,
            skipped,
            stats: sprite.stats().clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl From<&PackedBin> for Placement {
    fn from(packed: &PackedBin) -> Placement {
        Placement {
            id: packed.id().get(),
            x: packed.x(),
            y: packed.y(),
            w: packed.width(),
            h: packed.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedBin {
    /// Position of the bin in the input list.
    pub index: usize,
    pub id: Option<u32>,
    pub w: u32,
    pub h: u32,
}
