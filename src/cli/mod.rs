mod args;
mod cli;
mod usage;

pub use args::*;
pub use cli::*;
pub use usage::*;
