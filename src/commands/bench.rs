use std::time::{Duration, Instant};

use anyhow::bail;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shelf_pack::{Bin, PackOptions as BatchOptions, ShelfPack};

use crate::options::BenchOptions;

const SIZES: [u32; 4] = [12, 16, 20, 24];

/// One set of generated bin sizes to time the packer against.
struct DataSet {
    name: &'static str,
    sizes: Vec<(u32, u32)>,
}

impl DataSet {
    fn generate_all<R: Rng>(rng: &mut R, count: usize) -> Vec<DataSet> {
        let mut fixed_both = Vec::with_capacity(count);
        let mut random_width = Vec::with_capacity(count);
        let mut random_height = Vec::with_capacity(count);
        let mut random_both = Vec::with_capacity(count);

        for _ in 0..count {
            let w = random_size(rng);
            let h = random_size(rng);

            fixed_both.push((12, 12));
            random_width.push((w, 12));
            random_height.push((12, h));
            random_both.push((w, h));
        }

        vec![
            DataSet {
                name: "fixed size bins",
                sizes: fixed_both,
            },
            DataSet {
                name: "random width bins",
                sizes: random_width,
            },
            DataSet {
                name: "random height bins",
                sizes: random_height,
            },
            DataSet {
                name: "random height and width bins",
                sizes: random_both,
            },
        ]
    }
}

fn random_size<R: Rng>(rng: &mut R) -> u32 {
    SIZES[rng.gen_range(0..SIZES.len())]
}

pub fn bench(options: BenchOptions) -> anyhow::Result<()> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!("Generating {} bins per data set", options.count);
    let data_sets = DataSet::generate_all(&mut rng, options.count);

    let progress = ProgressBar::new(data_sets.len() as u64 * 2);
    progress.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}"));

    for data_set in &data_sets {
        progress.set_message(format!("pack() {}", data_set.name));
        let duration = time_pack(&data_set.sizes, options.dim)?;
        progress.println(format!("pack() {}: {:?}", data_set.name, duration));
        progress.inc(1);
    }

    for data_set in &data_sets {
        progress.set_message(format!("pack_one() {}", data_set.name));
        let duration = time_pack_one(&data_set.sizes, options.dim)?;
        progress.println(format!("pack_one() {}: {:?}", data_set.name, duration));
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(())
}

fn time_pack(sizes: &[(u32, u32)], dim: u32) -> anyhow::Result<Duration> {
    let mut sprite = ShelfPack::new(dim, dim);
    let mut bins: Vec<_> = sizes.iter().map(|&size| Bin::new(size)).collect();

    let start = Instant::now();
    let results = sprite.pack(&mut bins, BatchOptions::default())?;
    let duration = start.elapsed();

    if results.len() < bins.len() {
        bail!(
            "Ran out of space after {} of {} bins on a {}x{} canvas",
            results.len(),
            bins.len(),
            dim,
            dim
        );
    }

    Ok(duration)
}

fn time_pack_one(sizes: &[(u32, u32)], dim: u32) -> anyhow::Result<Duration> {
    let mut sprite = ShelfPack::new(dim, dim);

    let start = Instant::now();
    for (index, &(width, height)) in sizes.iter().enumerate() {
        if sprite.pack_one(width, height)?.is_none() {
            bail!(
                "Ran out of space after {} of {} bins on a {}x{} canvas",
                index,
                sizes.len(),
                dim,
                dim
            );
        }
    }

    Ok(start.elapsed())
}
