use clap::Parser;
use jpgtidy_cli::args::Args;
use jpgtidy_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match jpgtidy_cli::execute(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
