use clap::Parser;
use tickerwatch::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
