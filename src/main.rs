//! tocsv CLI entrypoint

use pentagon_timings::cli::Cli;
use pentagon_timings::output;

fn main() {
    let cli = Cli::parse_or_exit();

    if let Err(e) = cli.execute() {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
