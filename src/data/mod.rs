mod bin_list;
mod report;

pub use bin_list::*;
pub use report::*;
