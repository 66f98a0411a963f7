use std::path::PathBuf;

use kogei::catalog::EventCategory;
use kogei::events::{filter_events, format_date_range, format_month, group_by_month};

use crate::util::{provide_catalog, provide_root};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "events", about = "List craft events month by month")]
pub struct Events {
    #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
    root_dir: Option<PathBuf>,
    #[clap(short, long, help = "Only events of this category, e.g. 陶器市")]
    category: Option<EventCategory>,
}

impl Events {
    pub fn run(&self) -> Result<(), AppError> {
        let root = provide_root(&self.root_dir)?;
        let catalog = provide_catalog(&root)?;

        let events = filter_events(&catalog.events, self.category);
        for (month, events) in group_by_month(events) {
            println!("{}", format_month(&month));
            for event in events {
                let free = if event.is_free { " [無料]" } else { "" };
                println!(
                    "  {}\t[{}]{} {}\t{}",
                    format_date_range(event.start_date, event.end_date),
                    event.category.label(),
                    free,
                    event.name,
                    event.prefecture
                );
            }
        }

        Ok(())
    }
}
