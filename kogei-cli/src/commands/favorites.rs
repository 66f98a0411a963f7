use std::path::PathBuf;

use clap::Subcommand;
use kogei::provide_favorites;

use crate::util::{format_craft, provide_catalog, provide_root};
use crate::AppError;

#[derive(Clone, Debug, Subcommand)]
pub enum Favorites {
    #[clap(about = "Add a craft to the favorites, or remove it")]
    Toggle {
        #[clap(help = "Craft id")]
        id: String,
        #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
        root_dir: Option<PathBuf>,
    },
    #[clap(about = "List favorite crafts")]
    List {
        #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
        root_dir: Option<PathBuf>,
    },
}

impl Favorites {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Favorites::Toggle { id, root_dir } => {
                let root = provide_root(root_dir)?;
                let catalog = provide_catalog(&root)?;
                let craft = catalog
                    .craft_by_id(id)
                    .ok_or_else(|| AppError::CraftNotFound(id.to_owned()))?;

                let mut favorites = provide_favorites(&root);
                if favorites.toggle(id)? {
                    println!("Added {} to favorites", craft.name);
                } else {
                    println!("Removed {} from favorites", craft.name);
                }
            }
            Favorites::List { root_dir } => {
                let root = provide_root(root_dir)?;
                let catalog = provide_catalog(&root)?;
                let favorites = provide_favorites(&root);

                let crafts = catalog.favorite_crafts(favorites.entries());
                if crafts.is_empty() {
                    println!("No favorites yet");
                }
                for craft in crafts {
                    println!("{}", format_craft(craft));
                }
            }
        }

        Ok(())
    }
}
