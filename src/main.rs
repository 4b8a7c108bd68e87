mod commands;
mod data;
mod options;

use std::process;

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Pack(pack_options) => commands::pack(pack_options)?,
        Subcommand::Bench(bench_options) => commands::bench(bench_options)?,
    }

    Ok(())
}
