use std::path::PathBuf;

use kogei::images::{gallery_images, ImageOptions};
use kogei::links::craft_links;

use crate::util::{format_craft, provide_catalog, provide_root};
use crate::AppError;

const RELATED_LIMIT: usize = 4;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "craft", about = "Show a craft with its artisans, stories, shops and links")]
pub struct Craft {
    #[clap(help = "Craft id")]
    id: String,
    #[clap(short, long, value_parser, help = "Root directory containing the data folder")]
    root_dir: Option<PathBuf>,
}

impl Craft {
    pub fn run(&self) -> Result<(), AppError> {
        let root = provide_root(&self.root_dir)?;
        let catalog = provide_catalog(&root)?;
        let craft = catalog
            .craft_by_id(&self.id)
            .ok_or_else(|| AppError::CraftNotFound(self.id.clone()))?;

        println!("{}", format_craft(craft));
        if let Some(history) = &craft.history {
            println!("\n歴史:\n  {}", history);
        }
        if let Some(technique) = &craft.technique {
            println!("\n技法:\n  {}", technique);
        }

        let artisans = catalog.artisans_of_craft(&craft.id);
        if !artisans.is_empty() {
            println!("\n職人:");
            for artisan in artisans {
                match &artisan.workshop_name {
                    Some(workshop) => println!("  {}（{}）", artisan.name, workshop),
                    None => println!("  {}", artisan.name),
                }
            }
        }

        let stories = catalog.stories_of_craft(&craft.id);
        if !stories.is_empty() {
            println!("\nストーリー:");
            for story in stories {
                println!("  [{}] {}", story.category.label(), story.title);
            }
        }

        let gallery = gallery_images(&craft.name);
        if !gallery.is_empty() {
            println!("\nギャラリー:");
            for image in gallery {
                println!("  {}\t{}", image.alt, image.url(ImageOptions::default())?);
            }
        }

        let shops = catalog.shops_for_craft(&craft.name);
        if !shops.is_empty() {
            println!("\n工房・店舗:");
            for shop in shops {
                println!("  {}\t{}", shop.name, shop.prefecture);
            }
        }

        let related = catalog.related_crafts(&craft.id, RELATED_LIMIT);
        if !related.is_empty() {
            println!("\n関連する工芸品:");
            for other in related {
                println!("  {}", format_craft(other));
            }
        }

        println!("\n{}をもっと楽しむ:", craft.name);
        for (site, url) in craft_links(&craft.name)? {
            println!("  [{}] {}\t{}", site.tab.label(), site.name, url);
        }

        Ok(())
    }
}
