use clap::{Parser, Subcommand};
use log::LevelFilter;
mod commands;

#[derive(Parser)]
#[command(name = "faculty-id")]
#[command(about = "A CLI tool for composing and decoding faculty ID numbers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    subcommand: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the ID for a role, building and office number
    Compose(commands::compose::Args),
    /// Show the role, building and office encoded in an ID
    Decode(commands::decode::Args),
    /// List role classification codes
    ListRoles(commands::list_roles::Args),
    /// List building codes
    ListBuildings(commands::list_buildings::Args),
}

fn main() -> anyhow::Result<commands::ExitCode> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    Ok(match cli.subcommand {
        Commands::Compose(args) => commands::compose::main(args)?,
        Commands::Decode(args) => commands::decode::main(args)?,
        Commands::ListRoles(args) => commands::list_roles::main(args)?,
        Commands::ListBuildings(args) => commands::list_buildings::main(args)?,
    })
}
