#[macro_use]
extern crate lazy_static;

pub mod avatar;
pub mod catalog;
pub mod errors;
pub mod events;
pub mod favorites;
pub mod images;
pub mod links;
pub mod report;
pub mod search;
pub mod seasonal;

pub use avatar::{render_avatar, Avatar, DEFAULT_AVATAR_SIZE};
pub use catalog::Catalog;
pub use errors::{KogeiError, Result};
pub use favorites::FavoritesStorage;

pub const KOGEI_FOLDER: &str = ".kogei";

// Should not be lost if possible
pub const FAVORITES_FILE: &str = "favorites";

// Exports of the crafts database and the bundled datasets
pub const DATA_FOLDER: &str = "data";
pub const CRAFTS_FILE: &str = "crafts.json";
pub const ARTISANS_FILE: &str = "artisans.json";
pub const ARTISTS_FILE: &str = "artists.json";
pub const EVENTS_FILE: &str = "events.json";
pub const SHOPS_FILE: &str = "shops.json";
pub const STORIES_FILE: &str = "stories.json";
pub const SEASONAL_FILE: &str = "seasonal.json";

/// Favorites storage of a root directory, read from disk.
pub fn provide_favorites<P: AsRef<std::path::Path>>(root: P) -> FavoritesStorage {
    let path = root
        .as_ref()
        .join(KOGEI_FOLDER)
        .join(FAVORITES_FILE);
    log::debug!("favorites at {}", path.display());
    FavoritesStorage::open("favorites".to_owned(), &path)
}
