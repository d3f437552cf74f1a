//! CLI entry point for the jittered rectangle generator

use clap::Parser;
use jitterect::io::cli::{Cli, Generator, init_logging};

fn main() -> jitterect::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut generator = Generator::new(cli);
    generator.run()?;
    Ok(())
}
