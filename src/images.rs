use url::Url;

use crate::{KogeiError, Result};

const UNSPLASH_BASE: &str = "https://images.unsplash.com/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: u32,
    pub quality: u32,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: 800,
            quality: 80,
        }
    }
}

/// Cropped, auto-formatted Unsplash URL of a stock photo.
///
/// `photo_id` is always a single path segment of the Unsplash host.
///
/// TODO: point at our own photography once it replaces the stock images.
pub fn unsplash_url(photo_id: &str, options: ImageOptions) -> Result<Url> {
    let mut url = Url::parse(UNSPLASH_BASE)?;
    url.path_segments_mut()
        .map_err(|_| {
            KogeiError::Parse(format!("{} cannot be a base", UNSPLASH_BASE))
        })?
        .pop_if_empty()
        .push(photo_id);
    url.query_pairs_mut()
        .append_pair("auto", "format")
        .append_pair("fit", "crop")
        .append_pair("w", &options.width.to_string())
        .append_pair("q", &options.quality.to_string());
    Ok(url)
}

/// Photo shown in the gallery of a craft's detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub photo_id: &'static str,
    pub alt: &'static str,
    pub caption: Option<&'static str>,
}

impl GalleryImage {
    pub fn url(&self, options: ImageOptions) -> Result<Url> {
        unsplash_url(self.photo_id, options)
    }
}

const fn image(
    photo_id: &'static str,
    alt: &'static str,
    caption: &'static str,
) -> GalleryImage {
    GalleryImage {
        photo_id,
        alt,
        caption: Some(caption),
    }
}

static GALLERY: [(&str, &[GalleryImage]); 5] = [
    (
        "備前焼",
        &[
            image(
                "photo-1565193566173-7a0ee3dbe261",
                "備前焼の花器",
                "窯変による自然な景色が美しい花器",
            ),
            image(
                "photo-1610701596007-11502861dcfa",
                "備前焼の器",
                "素朴な土味を活かした食器",
            ),
            image(
                "photo-1507003211169-0a1dd7228f2d",
                "備前焼の壺",
                "胡麻と緋襷の景色が見られる壺",
            ),
        ],
    ),
    (
        "有田焼",
        &[
            image(
                "photo-1664477407933-dd42ed0c6c62",
                "有田焼の皿",
                "藍の染付が美しい有田焼の皿",
            ),
            image(
                "photo-1682159316104-70c98a792e94",
                "有田焼の茶碗",
                "白磁に繊細な絵付けの茶碗",
            ),
        ],
    ),
    (
        "九谷焼",
        &[image(
            "photo-1670672013421-ec17c92a66d8",
            "九谷焼の色絵皿",
            "五彩の色絵が鮮やかな九谷焼",
        )],
    ),
    (
        "結城紬",
        &[image(
            "photo-1661198979635-1563c2d19196",
            "結城紬の反物",
            "手つむぎ・手織りの結城紬",
        )],
    ),
    (
        "伊賀くみひも",
        &[image(
            "photo-1680817318163-4f72c021b820",
            "伊賀くみひもの帯締め",
            "絹糸で組まれた美しい組紐",
        )],
    ),
];

/// Gallery of the craft named `craft_name`; empty when it has none.
pub fn gallery_images(craft_name: &str) -> &'static [GalleryImage] {
    GALLERY
        .iter()
        .find(|(name, _)| *name == craft_name)
        .map(|(_, images)| *images)
        .unwrap_or(&[])
}
