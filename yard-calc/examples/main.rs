use std::process::ExitCode;

use clap::Parser;

use yard_calc::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    match cli::run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
