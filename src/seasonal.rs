use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::KogeiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] =
        [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Season of a calendar month, `1..=12`. Winter spans the turn of the
    /// year.
    pub fn of_month(month: u32) -> Option<Season> {
        match month {
            3..=5 => Some(Season::Spring),
            6..=8 => Some(Season::Summer),
            9..=11 => Some(Season::Autumn),
            12 | 1 | 2 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn of_date(date: NaiveDate) -> Season {
        Season::of_month(date.month()).unwrap_or(Season::Winter)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "春",
            Season::Summer => "夏",
            Season::Autumn => "秋",
            Season::Winter => "冬",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = KogeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s || season.label() == s)
            .ok_or_else(|| KogeiError::Parse(format!("unknown season {}", s)))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CraftHighlight {
    pub name: String,
    pub reason: String,
}

/// Editorial feature tied to one season.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalFeature {
    pub id: String,
    pub slug: String,
    pub season: Season,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub philosophy: Option<String>,
    #[serde(default)]
    pub craft_highlights: Vec<CraftHighlight>,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn feature_by_slug<'a>(
    features: &'a [SeasonalFeature],
    slug: &str,
) -> Option<&'a SeasonalFeature> {
    features.iter().find(|feature| feature.slug == slug)
}

/// Feature of the season `today` falls in, or the first feature when that
/// season has none.
pub fn current_feature(
    features: &[SeasonalFeature],
    today: NaiveDate,
) -> Option<&SeasonalFeature> {
    let season = Season::of_date(today);
    features
        .iter()
        .find(|feature| feature.season == season)
        .or_else(|| features.first())
}

/// Every feature except `id`, in order.
pub fn others<'a>(
    features: &'a [SeasonalFeature],
    id: &str,
) -> Vec<&'a SeasonalFeature> {
    features
        .iter()
        .filter(|feature| feature.id != id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn features() -> Vec<SeasonalFeature> {
        serde_json::from_value(json!([
            {"id": "f1", "slug": "spring-tableware", "season": "spring", "title": "春の器"},
            {"id": "f2", "slug": "summer-glass", "season": "summer", "title": "涼を呼ぶ硝子",
             "craftHighlights": [{"name": "江戸切子", "reason": "光を映す"}],
             "tags": ["硝子", "夏"]},
            {"id": "f3", "slug": "autumn-lacquer", "season": "autumn", "title": "秋の漆"}
        ]))
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(3, Season::Spring)]
    #[case(5, Season::Spring)]
    #[case(6, Season::Summer)]
    #[case(11, Season::Autumn)]
    #[case(12, Season::Winter)]
    #[case(1, Season::Winter)]
    #[case(2, Season::Winter)]
    fn months_map_to_seasons(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::of_month(month), Some(expected));
        assert_eq!(Season::of_date(date(2026, month, 1)), expected);
    }

    #[test]
    fn invalid_month_has_no_season() {
        assert_eq!(Season::of_month(0), None);
        assert_eq!(Season::of_month(13), None);
    }

    #[test]
    fn parses_seasons() {
        assert_eq!("autumn".parse::<Season>().unwrap(), Season::Autumn);
        assert_eq!("冬".parse::<Season>().unwrap(), Season::Winter);
        assert!("monsoon".parse::<Season>().is_err());
        assert_eq!(Season::Summer.to_string(), "夏");
    }

    #[test]
    fn current_feature_follows_the_date() {
        let features = features();
        assert_eq!(current_feature(&features, date(2026, 7, 20)).unwrap().id, "f2");
        assert_eq!(current_feature(&features, date(2026, 10, 19)).unwrap().id, "f3");
        // no winter feature yet
        assert_eq!(current_feature(&features, date(2026, 1, 5)).unwrap().id, "f1");
        assert!(current_feature(&[], date(2026, 1, 5)).is_none());
    }

    #[test]
    fn other_features_skip_the_current_one() {
        let features = features();
        let ids: Vec<_> = others(&features, "f2").iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f3"]);
        assert_eq!(others(&features, "missing").len(), 3);
    }

    #[test]
    fn feature_details() {
        let features = features();
        let glass = feature_by_slug(&features, "summer-glass").unwrap();
        assert_eq!(glass.craft_highlights[0].name, "江戸切子");
        assert_eq!(glass.tags, vec!["硝子", "夏"]);
        assert!(glass.philosophy.is_none());
        assert!(feature_by_slug(&features, "winter").is_none());
    }
}
