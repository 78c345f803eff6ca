mod error;
mod extract;
mod media;
mod payload;
mod rewrite;

pub mod prelude {
    pub use crate::error::ExtractError;
    pub use crate::extract::extract_media;
    pub use crate::media::MediaSet;
    pub use crate::payload::{
        Asset, AssetData, Banner, BannerContent, BannerItem, Carousel, CarouselItem, HeroAsset,
        HomeScreen, ImageRef, Sections,
    };
    pub use crate::rewrite::to_storage_urls;
}
