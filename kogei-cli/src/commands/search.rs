use std::path::PathBuf;

use kogei::search::{search, suggest};

use crate::util::{format_craft, provide_catalog, provide_root};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "search", about = "Search crafts by name, reading, prefecture or category")]
pub struct Search {
    #[clap(help = "Search terms")]
    query: String,
    #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
    root_dir: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::SetTrue, help = "List every match, descriptions included")]
    all: bool,
}

impl Search {
    pub fn run(&self) -> Result<(), AppError> {
        let root = provide_root(&self.root_dir)?;
        let catalog = provide_catalog(&root)?;

        let results = if self.all {
            search(&catalog.crafts, &self.query)
        } else {
            suggest(&catalog.crafts, &self.query)
        };

        println!("「{}」の検索結果：{}件", self.query.trim(), results.len());
        for craft in results {
            println!("{}", format_craft(craft));
        }

        Ok(())
    }
}
