use shelf_pack::{Bin, BinId, PackOptions, PackedBin, ShelfPack, ShelfPackOptions};

fn bins(sizes: &[(u32, u32)]) -> Vec<Bin> {
    sizes.iter().map(|&size| Bin::new(size)).collect()
}

fn positions(results: &[PackedBin]) -> Vec<(u32, u32)> {
    results.iter().map(PackedBin::position).collect()
}

fn in_place() -> PackOptions {
    PackOptions {
        in_place: true,
        ..PackOptions::default()
    }
}

/// Sizes loosely modeled on a glyph atlas: a few common heights, varied
/// widths.
fn mixed_sizes() -> Vec<(u32, u32)> {
    let heights = [12, 16, 20, 24, 9, 16, 12, 30];
    let widths = [7, 12, 3, 20, 16, 11, 24, 5, 9];

    (0..120)
        .map(|i| (widths[i % widths.len()], heights[(i * 7) % heights.len()]))
        .collect()
}

fn assert_valid_layout(packer: &ShelfPack, results: &[PackedBin]) {
    for (i, a) in results.iter().enumerate() {
        let (max_x, max_y) = a.max();
        assert!(max_x <= packer.width(), "{:?} is outside the canvas", a);
        assert!(max_y <= packer.height(), "{:?} is outside the canvas", a);

        for b in &results[i + 1..] {
            assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
        }
    }

    let mut next_y = 0;
    for shelf in packer.shelves() {
        assert_eq!(shelf.y(), next_y);
        assert_eq!(shelf.used_width() + shelf.free_width(), shelf.width());
        assert!(shelf.width() <= packer.width());
        next_y += shelf.height();
    }
    assert!(next_y <= packer.height());
}

#[test]
fn same_height_bins_share_shelf() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(10, 10), (10, 10), (10, 10)]);

    let results = sprite.pack(&mut input, PackOptions::default()).unwrap();

    assert_eq!(positions(&results), vec![(0, 0), (10, 0), (20, 0)]);
    assert!(results.iter().all(|packed| packed.size() == (10, 10)));
    assert_eq!(sprite.shelves().len(), 1);
}

#[test]
fn larger_bins_go_on_new_shelves() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(10, 10), (10, 15), (10, 20)]);

    let results = sprite.pack(&mut input, PackOptions::default()).unwrap();

    assert_eq!(positions(&results), vec![(0, 0), (0, 10), (0, 25)]);
}

#[test]
fn shorter_bins_minimize_waste() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(10, 10), (10, 15), (10, 20), (10, 9)]);

    let results = sprite.pack(&mut input, PackOptions::default()).unwrap();

    insta::assert_debug_snapshot!(positions(&results), @r###"
[
    (
        0,
        0,
    ),
    (
        0,
        10,
    ),
    (
        0,
        25,
    ),
    (
        10,
        0,
    ),
]
"###);
    assert_eq!(results[3].size(), (10, 9));
}

#[test]
fn in_place_updates_records() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(10, 10), (10, 10), (10, 10)]);

    sprite.pack(&mut input, in_place()).unwrap();

    let placed: Vec<_> = input.iter().map(Bin::position).collect();
    assert_eq!(placed, vec![Some((0, 0)), Some((10, 0)), Some((20, 0))]);

    let ids: Vec<_> = input.iter().map(Bin::id).collect();
    assert_eq!(
        ids,
        vec![Some(BinId::new(1)), Some(BinId::new(2)), Some(BinId::new(3))]
    );
    assert!(input.iter().all(|bin| bin.size() == (10, 10)));
}

#[test]
fn records_are_untouched_by_default() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(10, 10)]);

    sprite.pack(&mut input, PackOptions::default()).unwrap();

    assert_eq!(input[0], Bin::new((10, 10)));
}

#[test]
fn skips_bins_without_room() {
    let mut sprite = ShelfPack::new(20, 20);
    let mut input = bins(&[(10, 10), (10, 10), (10, 30), (10, 10)]);

    let results = sprite.pack(&mut input, in_place()).unwrap();

    assert_eq!(positions(&results), vec![(0, 0), (10, 0), (0, 10)]);

    assert_eq!(input[0].position(), Some((0, 0)));
    assert_eq!(input[1].position(), Some((10, 0)));
    assert_eq!(input[2].position(), None);
    assert_eq!(input[2].id(), None);
    assert_eq!(input[2].size(), (10, 30));
    assert_eq!(input[3].position(), Some((0, 10)));
}

#[test]
fn reused_records_lose_stale_positions() {
    let mut input = bins(&[(10, 10), (50, 50), (0, 10)]);

    let mut large = ShelfPack::new(64, 64);
    large.pack(&mut input, in_place()).unwrap();
    assert_eq!(input[1].position(), Some((0, 10)));

    let mut small = ShelfPack::new(20, 20);
    let results = small.pack(&mut input, in_place()).unwrap();

    assert_eq!(positions(&results), vec![(0, 0)]);
    assert_eq!(input[0].position(), Some((0, 0)));
    assert!(!input[1].is_placed());
    assert!(!input[2].is_placed());
    assert_eq!(input[1].size(), (50, 50));
}

#[test]
fn skips_zero_sized_bins() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(0, 10), (10, 10), (10, 0)]);

    let results = sprite.pack(&mut input, in_place()).unwrap();

    assert_eq!(positions(&results), vec![(0, 0)]);
    assert!(!input[0].is_placed());
    assert!(input[1].is_placed());
    assert!(!input[2].is_placed());
}

#[test]
fn keeps_supplied_ids() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = vec![
        Bin::with_id(40, (10, 10)),
        Bin::new((10, 10)),
        Bin::with_id(7, (10, 12)),
    ];

    let results = sprite.pack(&mut input, PackOptions::default()).unwrap();

    let ids: Vec<_> = results.iter().map(|packed| packed.id().get()).collect();
    assert_eq!(ids, vec![40, 41, 7]);
    assert_eq!(sprite.get_bin(BinId::new(7)), Some(&results[2]));
}

#[test]
fn shrink_to_fit_after_batch() {
    let mut sprite = ShelfPack::new(64, 64);
    let mut input = bins(&[(10, 10), (10, 10), (10, 10), (6, 15)]);

    let options = PackOptions {
        shrink_to_fit: true,
        ..PackOptions::default()
    };
    let results = sprite.pack(&mut input, options).unwrap();

    assert_eq!((sprite.width(), sprite.height()), (30, 25));
    assert_valid_layout(&sprite, &results);
}

#[test]
fn clear_reproduces_layout() {
    let sizes = mixed_sizes();

    let mut fresh = ShelfPack::new(256, 256);
    let expected = fresh.pack(&mut bins(&sizes), PackOptions::default()).unwrap();

    let mut reused = ShelfPack::new(256, 256);
    reused
        .pack(&mut bins(&[(100, 3), (5, 50), (256, 1)]), PackOptions::default())
        .unwrap();
    reused.clear();
    let actual = reused.pack(&mut bins(&sizes), PackOptions::default()).unwrap();

    assert_eq!(actual, expected);
}

#[test]
fn fixed_canvas_layout_is_valid() {
    let mut sprite = ShelfPack::new(128, 128);

    let results = sprite
        .pack(&mut bins(&mixed_sizes()), PackOptions::default())
        .unwrap();

    assert!(!results.is_empty());
    assert!(results.len() < mixed_sizes().len());
    assert_eq!((sprite.width(), sprite.height()), (128, 128));
    assert_valid_layout(&sprite, &results);
}

#[test]
fn auto_resize_layout_is_valid() {
    let options = ShelfPackOptions { auto_resize: true };
    let mut sprite = ShelfPack::with_options(10, 10, options);

    let results = sprite
        .pack(&mut bins(&mixed_sizes()), PackOptions::default())
        .unwrap();

    assert_eq!(results.len(), mixed_sizes().len());
    assert_valid_layout(&sprite, &results);

    let total: u32 = sprite.stats().values().sum();
    assert_eq!(total as usize, results.len());
}

#[test]
fn auto_resize_overflow_stops_batch() {
    let options = ShelfPackOptions { auto_resize: true };
    let mut sprite = ShelfPack::with_options(64, 64, options);
    let mut input = bins(&[(10, 10), (u32::MAX, 10)]);

    assert!(sprite.pack(&mut input, PackOptions::default()).is_err());
}
