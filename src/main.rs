/*!
 * Command-line interface for lstree
 */

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;

use lstree::config::{Args, Config};
use lstree::error::Result;
use lstree::lister::Lister;
use lstree::writer::EntryWriter;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lstree: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    // Validate configuration
    config.validate()?;

    let stdout = io::stdout().lock();
    let mut writer = EntryWriter::new(BufWriter::new(stdout));

    // List the target
    let mut lister = Lister::new(config);
    lister.run(&mut writer)?;

    writer.flush()
}
