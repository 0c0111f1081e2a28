//! Card Conversion Binary
//!
//! Converts 31 playing cards to a hexadecimal number, or back.

use cardkey::*;
use colored::Colorize;

fn main() {
    let cli = cli::CLI::new();
    log(cli.level());
    if let Err(e) = cli.run() {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}
