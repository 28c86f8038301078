use clap::Parser;

mod cli;
mod commands;

fn main() {
    let args = cli::Cli::parse();

    match commands::execute(args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
