use std::path::PathBuf;

use kogei::report::CompletenessReport;

use crate::util::{provide_catalog, provide_root};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "report", about = "Show crafts that still lack a written history")]
pub struct Report {
    #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
    root_dir: Option<PathBuf>,
}

impl Report {
    pub fn run(&self) -> Result<(), AppError> {
        let root = provide_root(&self.root_dir)?;
        let catalog = provide_catalog(&root)?;

        print!("{}", CompletenessReport::build(&catalog.crafts));
        Ok(())
    }
}
