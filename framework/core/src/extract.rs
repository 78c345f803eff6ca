use std::collections::HashMap;

use crate::error::ExtractError;
use crate::media::MediaSet;
use crate::payload::HomeScreen;

/// Pull the media URLs for the home screen out of the payload.
///
/// Banners contribute the image of their first item, carousel items are
/// resolved through the asset catalog, and the hero media is read straight
/// off the hero section.
pub fn extract_media(home: &HomeScreen) -> Result<MediaSet, ExtractError> {
    let banner = home
        .sections
        .banners
        .iter()
        .enumerate()
        .map(|(index, banner)| {
            banner
                .items
                .first()
                .map(|item| item.content.image.link.clone())
                .ok_or(ExtractError::EmptyBanner { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // The catalog arrives as a flat list; key it once for the carousel lookups.
    let assets: HashMap<&str, &str> = home
        .data
        .assets
        .iter()
        .map(|asset| (asset.id.as_str(), asset.portal_image.as_str()))
        .collect();

    let carousel = home
        .sections
        .carousels
        .iter()
        .flat_map(|carousel| &carousel.items)
        .map(|item| {
            assets
                .get(item.asset_id.as_str())
                .map(|image| (*image).to_string())
                .ok_or_else(|| ExtractError::UnknownAsset {
                    id: item.asset_id.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // TODO resolve the hero through the asset catalog once the backend
    // publishes hero assets under `data.assets`.
    let hero = match &home.sections.hero_asset {
        Some(hero_asset) => match &hero_asset.id {
            Some(id) => {
                let media = hero_asset
                    .hero_media
                    .clone()
                    .ok_or_else(|| ExtractError::MissingHeroMedia { id: id.clone() })?;
                vec![media]
            }
            None => Vec::new(),
        },
        None => Vec::new(),
    };

    Ok(MediaSet {
        banner,
        carousel,
        hero,
    })
}
