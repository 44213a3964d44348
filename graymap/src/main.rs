//! graymap command-line tool

mod cli;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stdout, everything else to stderr
            let _ = err.print();
            std::process::exit(cli::parse_exit_code(err.kind()));
        }
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    cli.run()
}
