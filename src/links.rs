//! Search links to external shops and experience sites for a craft.

use url::Url;

use crate::{KogeiError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkTab {
    Buy,
    Visit,
    Experience,
}

impl LinkTab {
    pub const ALL: [LinkTab; 3] =
        [LinkTab::Buy, LinkTab::Visit, LinkTab::Experience];

    pub fn label(&self) -> &'static str {
        match self {
            LinkTab::Buy => "手に入れる",
            LinkTab::Visit => "お店で見る",
            LinkTab::Experience => "自分でつくる",
        }
    }
}

/// Where a site expects the search terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Query {
    Path,
    Param(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalSite {
    pub name: &'static str,
    pub tab: LinkTab,
    base: &'static str,
    query: Query,
}

static SITES: [ExternalSite; 6] = [
    ExternalSite {
        name: "楽天市場",
        tab: LinkTab::Buy,
        base: "https://search.rakuten.co.jp/search/mall/",
        query: Query::Path,
    },
    ExternalSite {
        name: "Amazon",
        tab: LinkTab::Buy,
        base: "https://www.amazon.co.jp/s",
        query: Query::Param("k"),
    },
    ExternalSite {
        name: "Yahoo!ショッピング",
        tab: LinkTab::Buy,
        base: "https://shopping.yahoo.co.jp/search",
        query: Query::Param("p"),
    },
    ExternalSite {
        name: "Googleマップで探す",
        tab: LinkTab::Visit,
        base: "https://www.google.com/maps/search/",
        query: Query::Path,
    },
    ExternalSite {
        name: "じゃらん体験",
        tab: LinkTab::Experience,
        base: "https://www.jalan.net/kankou/spt_guide000/activity/?screenId=OUW3701",
        query: Query::Param("keyword"),
    },
    ExternalSite {
        name: "アソビュー",
        tab: LinkTab::Experience,
        base: "https://www.asoview.com/search/",
        query: Query::Param("q"),
    },
];

impl ExternalSite {
    /// Search URL of this site for `terms`.
    pub fn search_url(&self, terms: &str) -> Result<Url> {
        let mut url = Url::parse(self.base)?;
        match self.query {
            Query::Path => {
                url.path_segments_mut()
                    .map_err(|_| {
                        KogeiError::Parse(format!(
                            "{} cannot be a base",
                            self.base
                        ))
                    })?
                    .pop_if_empty()
                    .push(terms);
            }
            Query::Param(key) => {
                url.query_pairs_mut().append_pair(key, terms);
            }
        }
        Ok(url)
    }
}

pub fn sites(tab: LinkTab) -> impl Iterator<Item = &'static ExternalSite> {
    SITES.iter().filter(move |site| site.tab == tab)
}

/// Every external search link for the craft named `craft_name`, grouped by
/// tab in display order.
pub fn craft_links(craft_name: &str) -> Result<Vec<(&'static ExternalSite, Url)>> {
    LinkTab::ALL
        .iter()
        .flat_map(|tab| sites(*tab))
        .map(|site| site.search_url(craft_name).map(|url| (site, url)))
        .collect()
}
