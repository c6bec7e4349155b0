//! CLI argument parsing and command handler

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{self, Config};
use crate::convert;
use crate::models::ConversionStats;
use crate::output;

/// Extract pentagonChildren benchmark timings from a log into a CSV table
#[derive(Parser, Debug)]
#[command(
    name = "tocsv",
    version,
    about = "Extract pentagonChildren timings from <BASE>.log into <BASE>.csv",
    long_about = "Scans <BASE>.log for lines of the form\n\n  \
                  -- pentagonChildren_<name>: <seconds>.<fraction> microseconds\n\n\
                  and writes each match as a row of <BASE>.csv under the header\n\
                  'Function Name,Time (microseconds)'."
)]
pub struct Cli {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base filename without extension
    #[arg(value_name = "FILENAME_WITHOUT_EXTENSION")]
    pub base: PathBuf,
}

impl Cli {
    /// Parse arguments, printing usage and exiting with status 1 on a bad
    /// argument list
    ///
    /// `--help` and `--version` keep clap's behavior (print, exit 0).
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => std::process::exit(report_parse_error(&e)),
        }
    }

    /// Execute the conversion
    pub fn execute(self) -> Result<()> {
        let config = config::load_config(Path::new("."))?;
        init_logging(self.verbose, &config);
        if !config.output.color {
            output::disable_colors();
        }

        let (input, output_path) = convert::derive_paths(&self.base);
        let stats = handle_convert(&input, &output_path)?;
        log::debug!("{:?}", stats);

        output::success(&output::created_message(&output_path));
        Ok(())
    }
}

/// Print the message for a failed parse and return the exit status
fn report_parse_error(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            0
        }
        _ => {
            output::usage();
            1
        }
    }
}

fn init_logging(verbose: u8, config: &Config) {
    let log_level = match verbose {
        0 => config.logging.level.as_deref().unwrap_or("warn"), // Default: only warnings and errors
        1 => "info",                                            // -v: show info messages
        2 => "debug",                                           // -vv: show debug messages
        _ => "trace",                                           // -vvv: show trace messages
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();
}

fn handle_convert(input: &Path, output: &Path) -> Result<ConversionStats> {
    let start = Instant::now();
    let stats = convert::convert_file(input, output)?;
    log::info!("Conversion finished in {:.2?}", start.elapsed());
    Ok(stats)
}
