/// Failures while pulling media URLs out of a home screen payload.
///
/// Any of these aborts the run before a single trial is measured, so that
/// both backends are always timed over the same URL set.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A banner section was present but had no items to take an image from.
    #[error("banner {index} has no items")]
    EmptyBanner { index: usize },
    /// A carousel item referenced an asset id that is missing from the catalog.
    #[error("carousel item references unknown asset {id}")]
    UnknownAsset { id: String },
    /// The hero section carried an id but no media URL.
    #[error("hero asset {id} has no hero media")]
    MissingHeroMedia { id: String },
}
