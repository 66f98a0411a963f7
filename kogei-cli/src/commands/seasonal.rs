use std::path::PathBuf;

use chrono::Local;
use kogei::seasonal::{current_feature, feature_by_slug, others};

use crate::util::{provide_catalog, provide_root};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "seasonal", about = "Show the feature of the current season, or one by slug")]
pub struct Seasonal {
    #[clap(help = "Slug of a feature; the current season's feature when omitted")]
    slug: Option<String>,
    #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
    root_dir: Option<PathBuf>,
}

impl Seasonal {
    pub fn run(&self) -> Result<(), AppError> {
        let root = provide_root(&self.root_dir)?;
        let catalog = provide_catalog(&root)?;
        let features = &catalog.seasonal;

        let feature = match &self.slug {
            Some(slug) => feature_by_slug(features, slug),
            None => current_feature(features, Local::now().date_naive()),
        };
        let feature = match feature {
            Some(feature) => feature,
            None => {
                println!("No seasonal features");
                return Ok(());
            }
        };

        println!("{}の特集: {}", feature.season.label(), feature.title);
        if !feature.subtitle.is_empty() {
            println!("{}", feature.subtitle);
        }
        if !feature.description.is_empty() {
            println!("\n{}", feature.description);
        }
        for highlight in &feature.craft_highlights {
            println!("  {}: {}", highlight.name, highlight.reason);
        }

        let rest = others(features, &feature.id);
        if !rest.is_empty() {
            println!("\n他の季節の特集:");
            for other in rest {
                println!("  [{}] {}\t{}", other.season.label(), other.title, other.slug);
            }
        }

        Ok(())
    }
}
