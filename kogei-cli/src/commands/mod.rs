use clap::Subcommand;

mod avatar;
mod craft;
mod events;
pub mod favorites;
mod report;
mod search;
mod seasonal;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Avatar(avatar::Avatar),
    Search(search::Search),
    Craft(craft::Craft),
    Seasonal(seasonal::Seasonal),
    Events(events::Events),
    Report(report::Report),
    #[command(about = "Manage favorite crafts")]
    Favorites {
        #[clap(subcommand)]
        subcommand: favorites::Favorites,
    },
}
