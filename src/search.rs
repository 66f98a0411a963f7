//! Craft search and the artisan directory filters.

use itertools::Itertools;

use crate::catalog::{Artisan, Craft, CraftRef};

/// Number of suggestions shown under the search box.
pub const SUGGESTION_LIMIT: usize = 8;

/// Quick suggestions while typing: name, reading, prefecture or category.
pub fn suggest<'a>(crafts: &'a [Craft], query: &str) -> Vec<&'a Craft> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    crafts
        .iter()
        .filter(|craft| {
            matches_name(craft, &query)
                || craft.prefecture.contains(&query)
                || craft.category.contains(&query)
        })
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Full result list of the search page, descriptions included.
pub fn search<'a>(crafts: &'a [Craft], query: &str) -> Vec<&'a Craft> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let lowered = query.to_lowercase();

    let results: Vec<&Craft> = crafts
        .iter()
        .filter(|craft| {
            matches_name(craft, &lowered)
                || craft.prefecture.contains(query)
                || craft.category.contains(query)
                || craft.description.contains(query)
        })
        .collect();
    log::debug!("{} crafts match {:?}", results.len(), query);

    results
}

fn matches_name(craft: &Craft, lowered: &str) -> bool {
    craft.name.to_lowercase().contains(lowered)
        || craft.name_kana.to_lowercase().contains(lowered)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtisanFilter {
    /// Craft category, `None` for every category
    pub category: Option<String>,
    pub query: String,
}

impl ArtisanFilter {
    pub fn apply<'a>(&self, artisans: &'a [Artisan]) -> Vec<&'a Artisan> {
        let query = self.query.trim().to_lowercase();
        artisans
            .iter()
            .filter(|artisan| {
                self.category
                    .as_ref()
                    .map_or(true, |category| artisan.craft.category == *category)
            })
            .filter(|artisan| query.is_empty() || matches_artisan(artisan, &query))
            .collect()
    }
}

fn matches_artisan(artisan: &Artisan, lowered: &str) -> bool {
    artisan.name.to_lowercase().contains(lowered)
        || artisan.craft.name.to_lowercase().contains(lowered)
        || artisan
            .workshop_name
            .as_ref()
            .map_or(false, |workshop| workshop.to_lowercase().contains(lowered))
}

/// Artisans of one craft, as listed in the directory.
#[derive(Debug, PartialEq)]
pub struct CraftGroup<'a> {
    pub craft: &'a CraftRef,
    pub artisans: Vec<&'a Artisan>,
}

/// Group artisans per craft, groups sorted by craft name and artisans kept
/// in input order.
pub fn group_by_craft<'a>(artisans: &[&'a Artisan]) -> Vec<CraftGroup<'a>> {
    artisans
        .iter()
        .map(|artisan| (artisan.craft.id.as_str(), *artisan))
        .into_group_map()
        .into_values()
        .map(|artisans| {
            let first: &'a Artisan = artisans[0];
            CraftGroup {
                craft: &first.craft,
                artisans,
            }
        })
        .sorted_by(|a, b| {
            a.craft
                .name
                .cmp(&b.craft.name)
                .then_with(|| a.craft.id.cmp(&b.craft.id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn craft(name: &str, kana: &str, prefecture: &str, category: &str) -> Craft {
        Craft {
            id: name.to_owned(),
            name: name.to_owned(),
            name_kana: kana.to_owned(),
            prefecture: prefecture.to_owned(),
            city: String::new(),
            category: category.to_owned(),
            description: format!("{}の伝統的工芸品", prefecture),
            designated_year: None,
            image_url: None,
            history: None,
            technique: None,
        }
    }

    fn crafts() -> Vec<Craft> {
        vec![
            craft("有田焼", "ありたやき", "佐賀県", "陶磁器"),
            craft("Imari", "いまり", "佐賀県", "陶磁器"),
            craft("博多織", "はかたおり", "福岡県", "織物"),
            craft("輪島塗", "わじまぬり", "石川県", "漆器"),
        ]
    }

    fn names(results: Vec<&Craft>) -> Vec<&str> {
        results.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("有田", vec!["有田焼"])]
    #[case("ありた", vec!["有田焼"])]
    #[case("imari", vec!["Imari"])]
    #[case(" IMARI ", vec!["Imari"])]
    #[case("佐賀", vec!["有田焼", "Imari"])]
    #[case("漆器", vec!["輪島塗"])]
    fn suggests(#[case] query: &str, #[case] expected: Vec<&str>) {
        let crafts = crafts();
        assert_eq!(names(suggest(&crafts, query)), expected);
    }

    #[test]
    fn suggestions_are_capped() {
        let crafts: Vec<Craft> = (0..20)
            .map(|i| craft(&format!("焼{}", i), "", "岡山県", "陶磁器"))
            .collect();
        assert_eq!(suggest(&crafts, "焼").len(), SUGGESTION_LIMIT);
        assert_eq!(search(&crafts, "焼").len(), 20);
    }

    #[test]
    fn search_includes_descriptions() {
        let crafts = crafts();
        assert!(suggest(&crafts, "伝統的").is_empty());
        assert_eq!(search(&crafts, "伝統的").len(), 4);
        assert_eq!(names(search(&crafts, "福岡県の")), vec!["博多織"]);
    }

    fn artisan(id: &str, name: &str, craft: &str, category: &str, workshop: Option<&str>) -> Artisan {
        Artisan {
            id: id.to_owned(),
            name: name.to_owned(),
            generation: None,
            philosophy: None,
            quote: None,
            workshop_name: workshop.map(str::to_owned),
            craft: CraftRef {
                id: craft.to_owned(),
                name: craft.to_owned(),
                category: category.to_owned(),
                prefecture: String::new(),
            },
        }
    }

    fn artisans() -> Vec<Artisan> {
        vec![
            artisan("1", "山田 宗一郎", "備前焼", "陶磁器", Some("宗窯")),
            artisan("2", "佐藤 美咲", "有田焼", "陶磁器", None),
            artisan("3", "田中 悠介", "備前焼", "陶磁器", None),
            artisan("4", "Kato", "輪島塗", "漆器", Some("Kato Lacquer")),
        ]
    }

    #[test]
    fn filters_artisans() {
        let artisans = artisans();
        let all = ArtisanFilter::default().apply(&artisans);
        assert_eq!(all.len(), 4);

        let lacquer = ArtisanFilter {
            category: Some("漆器".to_owned()),
            query: String::new(),
        };
        assert_eq!(lacquer.apply(&artisans).len(), 1);

        let by_workshop = ArtisanFilter {
            category: None,
            query: "lacquer".to_owned(),
        };
        assert_eq!(by_workshop.apply(&artisans)[0].id, "4");

        let by_craft = ArtisanFilter {
            category: Some("陶磁器".to_owned()),
            query: "備前".to_owned(),
        };
        assert_eq!(by_craft.apply(&artisans).len(), 2);
    }

    #[test]
    fn groups_artisans_per_craft() {
        let artisans = artisans();
        let filtered = ArtisanFilter::default().apply(&artisans);
        let groups = group_by_craft(&filtered);

        let crafts: Vec<_> = groups.iter().map(|g| g.craft.name.as_str()).collect();
        let mut sorted = crafts.clone();
        sorted.sort();
        assert_eq!(crafts, sorted);
        assert_eq!(groups.len(), 3);

        let bizen = groups.iter().find(|g| g.craft.id == "備前焼").unwrap();
        let ids: Vec<_> = bizen.artisans.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
