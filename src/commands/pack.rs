use std::io::{self, BufWriter, Write};

use fs_err as fs;
use shelf_pack::{PackOptions as BatchOptions, ShelfPack, ShelfPackOptions};

use crate::data::{BinList, PackReport};
use crate::options::PackOptions;

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let bin_list = BinList::read_from_file(&options.input)?;

    let width = options.width.unwrap_or(bin_list.canvas.width);
    let height = options.height.unwrap_or(bin_list.canvas.height);
    let auto_resize = options.auto_resize || bin_list.canvas.auto_resize;

    let mut sprite = ShelfPack::with_options(width, height, ShelfPackOptions { auto_resize });
    let mut bins = bin_list.to_bins();

    let results = sprite.pack(
        &mut bins,
        BatchOptions {
            in_place: true,
            shrink_to_fit: options.shrink,
        },
    )?;

    log::info!(
        "Packed {} of {} bins into a {}x{} canvas",
        results.len(),
        bins.len(),
        sprite.width(),
        sprite.height()
    );

    let report = PackReport::new(&sprite, &results, &bins);

    match &options.output {
        Some(output) => {
            if let Some(output_folder) = output.parent() {
                fs::create_dir_all(output_folder)?;
            }

            let mut file = BufWriter::new(fs::File::create(output)?);
            serde_json::to_writer_pretty(&mut file, &report)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &report)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
