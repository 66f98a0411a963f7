use clap::Parser;

mod commands;
mod error;
mod util;

pub use error::AppError;

use commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "kogei-cli")]
#[clap(about = "Browse the traditional crafts catalog and render artisan avatars", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();

    match &args.command {
        Commands::Avatar(avatar) => avatar.run()?,
        Commands::Search(search) => search.run()?,
        Commands::Craft(craft) => craft.run()?,
        Commands::Seasonal(seasonal) => seasonal.run()?,
        Commands::Events(events) => events.run()?,
        Commands::Report(report) => report.run()?,
        Commands::Favorites { subcommand } => subcommand.run()?,
    }

    Ok(())
}
