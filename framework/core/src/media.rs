/// The media URLs extracted from one home screen payload, grouped by the
/// section they came from.
///
/// Order within each group follows the payload. The rewritten counterpart
/// produced by [crate::rewrite::to_storage_urls] is an independent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaSet {
    pub banner: Vec<String>,
    pub carousel: Vec<String>,
    pub hero: Vec<String>,
}

impl MediaSet {
    /// Every URL in the set: banners, then carousels, then the hero.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.banner
            .iter()
            .chain(&self.carousel)
            .chain(&self.hero)
            .map(String::as_str)
    }

    /// Total number of URLs across all three groups.
    pub fn len(&self) -> usize {
        self.banner.len() + self.carousel.len() + self.hero.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
