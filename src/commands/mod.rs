mod bench;
mod pack;

pub use bench::*;
pub use pack::*;
