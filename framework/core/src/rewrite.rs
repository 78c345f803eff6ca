use crate::media::MediaSet;

/// CDN hostname to S3 bucket hostname, tried in this order. A URL is
/// rewritten against the first entry it matches and left alone otherwise.
const HOST_REWRITES: [(&str, &str); 3] = [
    (
        "media.dev.rallyrd.com",
        "share-media-applications-dev-rallyrd.s3.amazonaws.com",
    ),
    (
        "media.staging.rallyrd.com",
        "share-media-applications-staging-rallyrd.s3.amazonaws.com",
    ),
    (
        "media.production.rallyrd.com",
        "share-media-applications-production-rallyrd.s3.amazonaws.com",
    ),
];

/// Map every URL in the set onto the S3 origin. The input set is not touched.
pub fn to_storage_urls(media: &MediaSet) -> MediaSet {
    MediaSet {
        banner: media.banner.iter().map(|url| rewrite_url(url)).collect(),
        carousel: media.carousel.iter().map(|url| rewrite_url(url)).collect(),
        hero: media.hero.iter().map(|url| rewrite_url(url)).collect(),
    }
}

fn rewrite_url(url: &str) -> String {
    for (cdn_host, bucket_host) in HOST_REWRITES {
        if url.contains(cdn_host) {
            return url.replacen(cdn_host, bucket_host, 1);
        }
    }
    url.to_string()
}
