use clap::Parser;

mod cli;
pub mod exit_codes;
mod logging;

use cli::args::Cli;

fn main() {
    logging::init();
    let _cli = Cli::parse();
    let code = match cli::run::run(std::io::stdin().lock(), std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::INTERNAL_ERROR
        }
    };
    std::process::exit(code);
}
