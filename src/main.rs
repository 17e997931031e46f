use std::process::ExitCode;

use clap::Parser;

use searchpath::cli::{run, Cli, Command, Outcome};
use searchpath::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log_dir.as_deref());

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => {
            if let Command::Resolve { name } = &cli.command {
                eprintln!("searchpath: {name}: not found");
            }
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("searchpath: {e:#}");
            ExitCode::from(2)
        }
    }
}
