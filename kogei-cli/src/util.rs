use std::env::current_dir;
use std::path::{Path, PathBuf};

use kogei::catalog::Craft;
use kogei::Catalog;

use crate::error::AppError;

pub fn provide_root(root_dir: &Option<PathBuf>) -> Result<PathBuf, AppError> {
    let root = match root_dir {
        Some(path) => path.clone(),
        None => current_dir()?,
    };
    log::debug!("root directory: {}", root.display());
    Ok(root)
}

pub fn provide_catalog(root: &Path) -> Result<Catalog, AppError> {
    let catalog = Catalog::load(root)
        .map_err(|e| AppError::CatalogLoadError(e.to_string()))?;
    log::debug!(
        "loaded {} crafts, {} events, {} seasonal features",
        catalog.crafts.len(),
        catalog.events.len(),
        catalog.seasonal.len()
    );
    Ok(catalog)
}

pub fn format_craft(craft: &Craft) -> String {
    format!(
        "{}\t{}（{}）\t{}\t{}",
        craft.id, craft.name, craft.name_kana, craft.prefecture, craft.category
    )
}
