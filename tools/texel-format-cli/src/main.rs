use argh::FromArgs;
use commands::{info, list, size};
use std::process::ExitCode;

mod commands;
mod error;

#[derive(FromArgs, Debug)]
/// Inspect the texel format catalog: list entries, dump descriptors and
/// compute image sizes.
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    List(list::ListCmd),
    Info(info::InfoCmd),
    Size(size::SizeCmd),
}

fn main() -> ExitCode {
    let args: TopLevel = argh::from_env();
    let result = match args.command {
        Commands::List(cmd) => list::handle_list_command(cmd),
        Commands::Info(cmd) => info::handle_info_command(cmd),
        Commands::Size(cmd) => size::handle_size_command(cmd),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
