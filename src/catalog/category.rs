#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMeta {
    pub name: &'static str,
    pub en: &'static str,
    pub icon: &'static str,
}

/// Craft categories in display order.
pub const CATEGORIES: [CategoryMeta; 15] = [
    meta("織物", "Woven textiles", "織"),
    meta("染色品", "Dyed textiles", "染"),
    meta("その他繊維製品", "Other textiles", "繊"),
    meta("陶磁器", "Ceramics", "陶"),
    meta("漆器", "Lacquerware", "漆"),
    meta("木工品・竹工品", "Wood & Bamboo", "木"),
    meta("金工品", "Metalwork", "金"),
    meta("仏壇・仏具", "Buddhist altars", "仏"),
    meta("和紙", "Washi paper", "紙"),
    meta("文具", "Writing tools", "文"),
    meta("石工品", "Stonework", "石"),
    meta("貴石細工", "Gemstone craft", "玉"),
    meta("人形・こけし", "Dolls & Kokeshi", "人"),
    meta("その他の工芸品", "Other crafts", "工"),
    meta("工芸材料・工芸用具", "Craft materials", "材"),
];

pub const DEFAULT_CATEGORY: CategoryMeta = meta("", "Crafts", "工");

const fn meta(
    name: &'static str,
    en: &'static str,
    icon: &'static str,
) -> CategoryMeta {
    CategoryMeta { name, en, icon }
}

pub fn find_category(name: &str) -> Option<&'static CategoryMeta> {
    CATEGORIES
        .iter()
        .find(|category| category.name == name)
}

/// Metadata of a category, [`DEFAULT_CATEGORY`] for unknown names.
pub fn category_meta(name: &str) -> &'static CategoryMeta {
    find_category(name).unwrap_or(&DEFAULT_CATEGORY)
}

/// Position in the display order, unknown categories sort last.
pub fn category_rank(name: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|category| category.name == name)
        .unwrap_or(CATEGORIES.len())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AreaRegion {
    pub name: &'static str,
    pub slug: &'static str,
    pub prefectures: &'static [&'static str],
}

pub const REGIONS: [AreaRegion; 8] = [
    AreaRegion {
        name: "北海道・東北",
        slug: "tohoku",
        prefectures: &[
            "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
        ],
    },
    AreaRegion {
        name: "関東",
        slug: "kanto",
        prefectures: &[
            "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
        ],
    },
    AreaRegion {
        name: "北陸・甲信越",
        slug: "hokuriku",
        prefectures: &["新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県"],
    },
    AreaRegion {
        name: "東海",
        slug: "tokai",
        prefectures: &["岐阜県", "静岡県", "愛知県", "三重県"],
    },
    AreaRegion {
        name: "近畿",
        slug: "kinki",
        prefectures: &["滋賀県", "京都府", "大阪府", "兵庫県", "奈良県", "和歌山県"],
    },
    AreaRegion {
        name: "中国",
        slug: "chugoku",
        prefectures: &["鳥取県", "島根県", "岡山県", "広島県", "山口県"],
    },
    AreaRegion {
        name: "四国",
        slug: "shikoku",
        prefectures: &["徳島県", "香川県", "愛媛県", "高知県"],
    },
    AreaRegion {
        name: "九州・沖縄",
        slug: "kyushu",
        prefectures: &[
            "福岡県", "佐賀県", "長崎県", "熊本県", "大分県", "宮崎県", "鹿児島県",
            "沖縄県",
        ],
    },
];

pub fn region_by_slug(slug: &str) -> Option<&'static AreaRegion> {
    REGIONS.iter().find(|region| region.slug == slug)
}

pub fn region_of_prefecture(prefecture: &str) -> Option<&'static AreaRegion> {
    REGIONS
        .iter()
        .find(|region| region.prefectures.iter().any(|p| *p == prefecture))
}
