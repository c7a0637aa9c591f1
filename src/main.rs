//! Parse a structogram description and print its tree.

use clap::Parser;

use structogram::cli::{self, Cli};
use structogram::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    if let Err(e) = cli::run(&cli, &mut stdout.lock()) {
        eprintln!("structogram: {e}");
        std::process::exit(1);
    }
}
