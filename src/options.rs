use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs rectangles into sprite sheets using shelves")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack a list of bins read from a TOML or JSON file. Prints the resulting
    /// layout as JSON.
    Pack(PackOptions),

    /// Time the packer against randomly generated bins.
    Bench(BenchOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The file listing the bins to pack. Files ending in `.json` are read as
    /// JSON, anything else as TOML.
    pub input: PathBuf,

    /// Where to write the resulting layout. Defaults to stdout.
    #[structopt(long)]
    pub output: Option<PathBuf>,

    /// Initial canvas width. Overrides the width given in the input file.
    #[structopt(long)]
    pub width: Option<u32>,

    /// Initial canvas height. Overrides the height given in the input file.
    #[structopt(long)]
    pub height: Option<u32>,

    /// Grow the canvas when bins don't fit instead of skipping them.
    #[structopt(long)]
    pub auto_resize: bool,

    /// Shrink the canvas to the area actually used once all bins are packed.
    #[structopt(long)]
    pub shrink: bool,
}

#[derive(Debug, StructOpt)]
pub struct BenchOptions {
    /// The number of bins in each generated data set.
    #[structopt(long, default_value = "1000000")]
    pub count: usize,

    /// The width and height of the canvas each data set is packed into.
    #[structopt(long, default_value = "1000000")]
    pub dim: u32,

    /// Seed for generating bin sizes. A random seed is used if not given.
    #[structopt(long)]
    pub seed: Option<u64>,
}
