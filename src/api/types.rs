//! Listing API response type definitions.

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level listing response wrapper.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

/// Listing payload: post wrappers plus the pagination token.
#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<PostWrapper>,
    /// Opaque cursor for the next page; absent or empty on the last page.
    #[serde(default)]
    pub after: Option<String>,
}

/// Wrapper around a single post record.
#[derive(Debug, Deserialize)]
pub struct PostWrapper {
    pub data: Post,
}

/// One post from the listing. Every media-bearing field is optional; the
/// extractor decides which shape (direct link, gallery, hosted video,
/// crosspost) the post actually is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Candidate direct link.
    #[serde(default)]
    pub url: Option<String>,

    /// Embedded media descriptor (hosted video).
    #[serde(default)]
    pub media: Option<PostMedia>,

    /// Ordered gallery items, paired with `media_metadata`.
    #[serde(default)]
    pub gallery_data: Option<GalleryData>,

    /// Per-item gallery metadata, keyed by media ID.
    #[serde(default)]
    pub media_metadata: Option<HashMap<String, GalleryMetadata>>,

    /// Parent posts for shared/reposted content. Only the first element is
    /// ever traversed.
    #[serde(default)]
    pub crosspost_parent_list: Option<Vec<Post>>,
}

/// Nested media structure carrying the hosted-video descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMedia {
    #[serde(default)]
    pub reddit_video: Option<RedditVideo>,
}

/// Hosted video descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct RedditVideo {
    pub fallback_url: String,
}

/// Ordered list of gallery item references.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryData {
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

/// One gallery item reference.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub media_id: String,
}

/// Size-variant metadata for a gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryMetadata {
    /// Source (full-size) variant; its URL may carry HTML-escaped ampersands.
    #[serde(default)]
    pub s: Option<GallerySource>,
}

/// Renderable source variant of a gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct GallerySource {
    #[serde(default)]
    pub u: Option<String>,
}

/// One page of posts plus the cursor for the next one.
#[derive(Debug)]
pub struct ListingPage {
    pub posts: Vec<Post>,
    pub after: Option<String>,
}
