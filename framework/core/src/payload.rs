use serde::Deserialize;

/// The home screen document served by the client-screens API.
///
/// Only the parts the benchmark reads are modelled here. The real document
/// carries much more; unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeScreen {
    pub sections: Sections,
    #[serde(default)]
    pub data: AssetData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(rename = "carouselsV2", default)]
    pub carousels: Vec<Carousel>,
    pub hero_asset: Option<HeroAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Banner {
    pub items: Vec<BannerItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerItem {
    pub content: BannerContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerContent {
    pub image: ImageRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Carousel {
    pub items: Vec<CarouselItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselItem {
    #[serde(rename = "assetId")]
    pub asset_id: String,
}

/// The hero section carries its media URL inline rather than an asset
/// reference, so it is not resolved through [AssetData].
#[derive(Debug, Clone, Deserialize)]
pub struct HeroAsset {
    pub id: Option<String>,
    #[serde(rename = "heroMedia")]
    pub hero_media: Option<String>,
}

/// The flat asset catalog that carousel items reference by id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetData {
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(rename = "portalImage")]
    pub portal_image: String,
}
