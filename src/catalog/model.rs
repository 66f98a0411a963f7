use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::KogeiError;

/// Traditional craft as exported from the crafts table.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Craft {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_kana: String,
    pub prefecture: String,
    #[serde(default)]
    pub city: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub designated_year: Option<u16>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
}

impl Craft {
    pub fn has_history(&self) -> bool {
        self.history
            .as_deref()
            .map_or(false, |history| !history.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CraftRef {
    pub id: String,
    pub name: String,
    pub category: String,
    pub prefecture: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Artisan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub generation: Option<String>,
    #[serde(default)]
    pub philosophy: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub workshop_name: Option<String>,
    pub craft: CraftRef,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Work {
    pub name: String,
    pub image: String,
}

/// Featured artist with a biography and selected works.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub slug: String,
    pub name: String,
    pub region_slug: String,
    pub region_name: String,
    pub style: String,
    pub career: String,
    pub bio: String,
    #[serde(default)]
    pub works: Vec<Work>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EventCategory {
    #[serde(rename = "陶器市")]
    PotteryFair,
    #[serde(rename = "展示会")]
    Exhibition,
    #[serde(rename = "体験")]
    Experience,
    #[serde(rename = "祭り")]
    Festival,
    #[serde(rename = "トークイベント")]
    Talk,
    #[serde(rename = "ワークショップ")]
    Workshop,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::PotteryFair,
        EventCategory::Exhibition,
        EventCategory::Experience,
        EventCategory::Festival,
        EventCategory::Talk,
        EventCategory::Workshop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::PotteryFair => "陶器市",
            EventCategory::Exhibition => "展示会",
            EventCategory::Experience => "体験",
            EventCategory::Festival => "祭り",
            EventCategory::Talk => "トークイベント",
            EventCategory::Workshop => "ワークショップ",
        }
    }

    /// Short tab label.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Talk => "トーク",
            EventCategory::Workshop => "WS",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = KogeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s || category.label() == s)
            .ok_or_else(|| {
                KogeiError::Parse(format!("unknown event category {}", s))
            })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftEvent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prefecture: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub venue: String,
    pub category: EventCategory,
    #[serde(default)]
    pub related_craft: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub is_free: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopKind {
    Manufacturer,
    Retailer,
    Both,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ShopLinks {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub shop: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub formal_name: String,
    #[serde(default)]
    pub name_english: String,
    #[serde(rename = "type")]
    pub kind: ShopKind,
    pub prefecture: String,
    #[serde(default)]
    pub city: String,
    pub craft_category: String,
    pub craft_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub philosophy: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub links: ShopLinks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryCategory {
    Philosophy,
    Craftsman,
    Lifestyle,
    CraftAndTech,
    Comparison,
}

impl StoryCategory {
    pub const ALL: [StoryCategory; 5] = [
        StoryCategory::Philosophy,
        StoryCategory::Craftsman,
        StoryCategory::Lifestyle,
        StoryCategory::CraftAndTech,
        StoryCategory::Comparison,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            StoryCategory::Philosophy => "philosophy",
            StoryCategory::Craftsman => "craftsman",
            StoryCategory::Lifestyle => "lifestyle",
            StoryCategory::CraftAndTech => "craft-and-tech",
            StoryCategory::Comparison => "comparison",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoryCategory::Philosophy => "哲学",
            StoryCategory::Craftsman => "職人",
            StoryCategory::Lifestyle => "暮らし",
            StoryCategory::CraftAndTech => "Craft×Tech",
            StoryCategory::Comparison => "知る・選ぶ",
        }
    }
}

impl FromStr for StoryCategory {
    type Err = KogeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoryCategory::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| {
                KogeiError::Parse(format!("unknown story category {}", s))
            })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub slug: String,
    pub title: String,
    pub category: StoryCategory,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
    /// Craft the story is about, if any.
    #[serde(default, alias = "craft_id")]
    pub craft_id: Option<String>,
}
