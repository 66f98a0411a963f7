use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use serde::de::DeserializeOwned;
use walkdir::{DirEntry, WalkDir};

use crate::{
    KogeiError, Result, ARTISANS_FILE, ARTISTS_FILE, CRAFTS_FILE, DATA_FOLDER,
    EVENTS_FILE, SEASONAL_FILE, SHOPS_FILE, STORIES_FILE,
};
use crate::seasonal::SeasonalFeature;

pub mod category;
pub mod model;

use category::{category_rank, region_by_slug, CATEGORIES};
pub use model::{
    Artisan, Artist, Craft, CraftEvent, CraftRef, EventCategory, Shop,
    ShopKind, ShopLinks, Story, StoryCategory, Work,
};

/// Everything the site shows, loaded from the JSON exports in the data
/// folder of a root directory.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub crafts: Vec<Craft>,
    pub artisans: Vec<Artisan>,
    pub artists: Vec<Artist>,
    pub events: Vec<CraftEvent>,
    pub shops: Vec<Shop>,
    pub stories: Vec<Story>,
    pub seasonal: Vec<SeasonalFeature>,
}

impl Catalog {
    /// Load every dataset found in `root/data`.
    ///
    /// A dataset without a file is left empty, so is every dataset when the
    /// data folder itself is missing. A file that does not parse fails the
    /// whole load.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let data_dir = root.as_ref().join(DATA_FOLDER);
        log::debug!("loading catalog from {}", data_dir.display());
        if !data_dir.exists() {
            log::warn!("{} does not exist, catalog is empty", data_dir.display());
            return Ok(Catalog::default());
        }
        if !data_dir.is_dir() {
            return Err(KogeiError::Path(format!(
                "{} is not a directory",
                data_dir.display()
            )));
        }

        let mut catalog = Catalog::default();
        let datasets = WalkDir::new(&data_dir)
            .max_depth(1)
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in datasets {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            match entry.file_name().to_str() {
                Some(CRAFTS_FILE) => catalog.crafts = read_dataset(path)?,
                Some(ARTISANS_FILE) => catalog.artisans = read_dataset(path)?,
                Some(ARTISTS_FILE) => catalog.artists = read_dataset(path)?,
                Some(EVENTS_FILE) => catalog.events = read_dataset(path)?,
                Some(SHOPS_FILE) => catalog.shops = read_dataset(path)?,
                Some(STORIES_FILE) => catalog.stories = read_dataset(path)?,
                Some(SEASONAL_FILE) => catalog.seasonal = read_dataset(path)?,
                _ => log::trace!("skipping {}", path.display()),
            }
        }

        catalog
            .crafts
            .sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!(
            "catalog has {} crafts, {} artisans, {} events",
            catalog.crafts.len(),
            catalog.artisans.len(),
            catalog.events.len()
        );

        Ok(catalog)
    }

    pub fn craft_by_id(&self, id: &str) -> Option<&Craft> {
        self.crafts.iter().find(|craft| craft.id == id)
    }

    pub fn artist_by_slug(&self, slug: &str) -> Option<&Artist> {
        self.artists
            .iter()
            .find(|artist| artist.slug == slug)
    }

    pub fn shop_by_slug(&self, slug: &str) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.slug == slug)
    }

    pub fn story_by_slug(&self, slug: &str) -> Option<&Story> {
        self.stories
            .iter()
            .find(|story| story.slug == slug)
    }

    /// Artisans working in the craft `id`.
    pub fn artisans_of_craft(&self, id: &str) -> Vec<&Artisan> {
        self.artisans
            .iter()
            .filter(|artisan| artisan.craft.id == id)
            .collect()
    }

    pub fn stories_of_craft(&self, id: &str) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|story| story.craft_id.as_deref() == Some(id))
            .collect()
    }

    /// Up to `limit` other crafts of the same category as `id`, in catalog
    /// order. Empty when `id` is unknown.
    pub fn related_crafts(&self, id: &str, limit: usize) -> Vec<&Craft> {
        let craft = match self.craft_by_id(id) {
            Some(craft) => craft,
            None => return Vec::new(),
        };

        self.crafts
            .iter()
            .filter(|other| other.category == craft.category && other.id != id)
            .take(limit)
            .collect()
    }

    /// Workshops and stores that carry the craft named `name`.
    pub fn shops_for_craft(&self, name: &str) -> Vec<&Shop> {
        self.shops
            .iter()
            .filter(|shop| shop.craft_name == name)
            .collect()
    }

    /// Crafts of one category keyed by prefecture.
    pub fn crafts_in_category(
        &self,
        category: &str,
    ) -> BTreeMap<&str, Vec<&Craft>> {
        self.crafts
            .iter()
            .filter(|craft| craft.category == category)
            .map(|craft| (craft.prefecture.as_str(), craft))
            .into_group_map()
            .into_iter()
            .collect()
    }

    /// Crafts of an area region grouped by prefecture, in the region's own
    /// prefecture order. Prefectures without crafts are left out.
    pub fn crafts_in_region(
        &self,
        slug: &str,
    ) -> Option<Vec<(&'static str, Vec<&Craft>)>> {
        let region = region_by_slug(slug)?;
        let groups = region
            .prefectures
            .iter()
            .map(|prefecture| {
                let crafts: Vec<&Craft> = self
                    .crafts
                    .iter()
                    .filter(|craft| craft.prefecture == *prefecture)
                    .collect();
                (*prefecture, crafts)
            })
            .filter(|(_, crafts)| !crafts.is_empty())
            .collect();

        Some(groups)
    }

    /// Number of crafts per known category, in display order.
    pub fn category_counts(&self) -> Vec<(&'static str, usize)> {
        let counts = self
            .crafts
            .iter()
            .map(|craft| craft.category.as_str())
            .counts();

        CATEGORIES
            .iter()
            .map(|category| {
                (
                    category.name,
                    counts.get(category.name).copied().unwrap_or(0),
                )
            })
            .collect()
    }

    /// Distinct categories present in the catalog, in display order.
    pub fn categories(&self) -> Vec<&str> {
        self.crafts
            .iter()
            .map(|craft| craft.category.as_str())
            .unique()
            .sorted_by_key(|category| (category_rank(category), *category))
            .collect()
    }

    pub fn stories_in(&self, category: Option<StoryCategory>) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|story| category.map_or(true, |c| story.category == c))
            .collect()
    }

    /// Favorited crafts in catalog order; unknown ids are ignored.
    pub fn favorite_crafts(&self, ids: &[String]) -> Vec<&Craft> {
        self.crafts
            .iter()
            .filter(|craft| ids.contains(&craft.id))
            .collect()
    }
}

fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    log::trace!("reading dataset {}", path.display());
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        KogeiError::Parse(format!("{}: {}", path.display(), e))
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempdir::TempDir;

    fn craft(id: &str, name: &str, prefecture: &str, category: &str) -> Craft {
        Craft {
            id: id.to_owned(),
            name: name.to_owned(),
            name_kana: String::new(),
            prefecture: prefecture.to_owned(),
            city: String::new(),
            category: category.to_owned(),
            description: String::new(),
            designated_year: None,
            image_url: None,
            history: None,
            technique: None,
        }
    }

    fn sample() -> Catalog {
        Catalog {
            crafts: vec![
                craft("1", "有田焼", "佐賀県", "陶磁器"),
                craft("2", "唐津焼", "佐賀県", "陶磁器"),
                craft("3", "備前焼", "岡山県", "陶磁器"),
                craft("4", "博多織", "福岡県", "織物"),
                craft("5", "輪島塗", "石川県", "漆器"),
            ],
            ..Catalog::default()
        }
    }

    #[test]
    fn groups_category_by_prefecture() {
        let catalog = sample();
        let groups = catalog.crafts_in_category("陶磁器");
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["佐賀県", "岡山県"]);
        assert_eq!(groups["佐賀県"].len(), 2);
        assert!(catalog.crafts_in_category("和紙").is_empty());
    }

    #[test]
    fn groups_region_in_defined_order() {
        let catalog = sample();
        let groups = catalog.crafts_in_region("kyushu").unwrap();
        let prefectures: Vec<_> = groups.iter().map(|(p, _)| *p).collect();
        assert_eq!(prefectures, vec!["福岡県", "佐賀県"]);
        assert_eq!(catalog.crafts_in_region("shikoku").unwrap().len(), 0);
        assert!(catalog.crafts_in_region("moon").is_none());
    }

    #[test]
    fn counts_follow_category_order() {
        let catalog = sample();
        let counts = catalog.category_counts();
        assert_eq!(counts.len(), CATEGORIES.len());
        assert_eq!(counts[0], ("織物", 1));
        assert_eq!(counts[3], ("陶磁器", 3));
        assert_eq!(counts[4], ("漆器", 1));
        assert_eq!(catalog.categories(), vec!["織物", "陶磁器", "漆器"]);
    }

    #[test]
    fn favorites_keep_catalog_order() {
        let catalog = sample();
        let ids = vec!["5".to_owned(), "1".to_owned(), "missing".to_owned()];
        let names: Vec<_> = catalog
            .favorite_crafts(&ids)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["有田焼", "輪島塗"]);
    }

    #[test]
    fn loads_datasets_from_folder() {
        let dir = TempDir::new("kogei_catalog").unwrap();
        let data = dir.path().join(DATA_FOLDER);
        fs::create_dir_all(&data).unwrap();
        fs::write(
            data.join(CRAFTS_FILE),
            json!([
                {"id": "b", "name": "備前焼", "prefecture": "岡山県", "category": "陶磁器"},
                {"id": "a", "name": "有田焼", "prefecture": "佐賀県", "category": "陶磁器"}
            ])
            .to_string(),
        )
        .unwrap();
        fs::write(
            data.join(STORIES_FILE),
            json!([{"slug": "s1", "title": "t", "category": "lifestyle"}])
                .to_string(),
        )
        .unwrap();
        fs::write(
            data.join(SEASONAL_FILE),
            json!([{"id": "f1", "slug": "winter-lacquer", "season": "winter", "title": "冬の漆"}])
                .to_string(),
        )
        .unwrap();
        fs::write(data.join(".hidden.json"), "not json").unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.crafts.len(), 2);
        assert_eq!(catalog.crafts[0].name, "備前焼");
        assert!(catalog.events.is_empty());
        assert_eq!(catalog.stories_in(Some(StoryCategory::Lifestyle)).len(), 1);
        assert!(catalog.stories_in(Some(StoryCategory::Philosophy)).is_empty());
        assert!(catalog.story_by_slug("s1").is_some());
        assert_eq!(catalog.seasonal.len(), 1);
        assert_eq!(catalog.seasonal[0].season, crate::seasonal::Season::Winter);
    }

    #[test]
    fn malformed_dataset_fails() {
        let dir = TempDir::new("kogei_catalog").unwrap();
        let data = dir.path().join(DATA_FOLDER);
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join(EVENTS_FILE), "[{\"id\": 1}]").unwrap();

        assert!(matches!(
            Catalog::load(dir.path()),
            Err(KogeiError::Parse(_))
        ));
    }

    #[test]
    fn missing_data_folder_is_empty() {
        let dir = TempDir::new("kogei_catalog").unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        assert!(catalog.crafts.is_empty());
        assert!(catalog.events.is_empty());
    }

    #[test]
    fn data_path_must_be_a_folder() {
        let dir = TempDir::new("kogei_catalog").unwrap();
        fs::write(dir.path().join(DATA_FOLDER), "").unwrap();
        assert!(matches!(
            Catalog::load(dir.path()),
            Err(KogeiError::Path(_))
        ));
    }

    fn craft_ref(craft: &Craft) -> CraftRef {
        CraftRef {
            id: craft.id.clone(),
            name: craft.name.clone(),
            category: craft.category.clone(),
            prefecture: craft.prefecture.clone(),
        }
    }

    fn detail_sample() -> Catalog {
        let mut catalog = sample();
        catalog.crafts.extend([
            craft("6", "萩焼", "山口県", "陶磁器"),
            craft("7", "九谷焼", "石川県", "陶磁器"),
            craft("8", "信楽焼", "滋賀県", "陶磁器"),
        ]);
        catalog.artisans = ["1", "1", "4"]
            .iter()
            .enumerate()
            .map(|(i, craft_id)| Artisan {
                id: format!("a{}", i),
                name: format!("職人{}", i),
                generation: None,
                philosophy: None,
                quote: None,
                workshop_name: None,
                craft: craft_ref(catalog.craft_by_id(craft_id).unwrap()),
            })
            .collect();
        catalog.stories = serde_json::from_value(json!([
            {"slug": "s1", "title": "窯の話", "category": "craftsman", "craft_id": "1"},
            {"slug": "s2", "title": "器の選び方", "category": "comparison", "craftId": "1"},
            {"slug": "s3", "title": "暮らし", "category": "lifestyle"}
        ]))
        .unwrap();
        catalog.shops = serde_json::from_value(json!([
            {"slug": "arita", "name": "有田の店", "type": "retailer", "prefecture": "佐賀県",
             "craftCategory": "陶磁器", "craftName": "有田焼"},
            {"slug": "hakata", "name": "博多の工房", "type": "manufacturer", "prefecture": "福岡県",
             "craftCategory": "織物", "craftName": "博多織"}
        ]))
        .unwrap();
        catalog
    }

    #[test]
    fn artisans_of_one_craft() {
        let catalog = detail_sample();
        let ids: Vec<_> = catalog
            .artisans_of_craft("1")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a0", "a1"]);
        assert!(catalog.artisans_of_craft("5").is_empty());
    }

    #[test]
    fn stories_of_one_craft() {
        let catalog = detail_sample();
        let slugs: Vec<_> = catalog
            .stories_of_craft("1")
            .iter()
            .map(|s| s.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["s1", "s2"]);
        assert!(catalog.stories_of_craft("4").is_empty());
    }

    #[test]
    fn related_crafts_exclude_self_and_stop_at_limit() {
        let catalog = detail_sample();
        let related = catalog.related_crafts("1", 4);
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|c| c.id != "1" && c.category == "陶磁器"));

        let ids: Vec<_> = related.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "6", "7"]);

        assert!(catalog.related_crafts("4", 4).is_empty());
        assert!(catalog.related_crafts("missing", 4).is_empty());
        assert_eq!(catalog.related_crafts("1", 2).len(), 2);
    }

    #[test]
    fn shops_carrying_a_craft() {
        let catalog = detail_sample();
        let shops = catalog.shops_for_craft("有田焼");
        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].slug, "arita");
        assert!(catalog.shops_for_craft("輪島塗").is_empty());
    }
}
