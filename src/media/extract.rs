//! Media URL extraction from post records.
//!
//! A post may carry media in several shapes at once: a direct link, an
//! imgur-style extensionless link, a hosted image or video, a gallery, or a
//! crosspost wrapping another post. Extraction inspects all of them,
//! accumulates every candidate URL, and deduplicates by the literal URL
//! string while keeping first-seen order.

use std::collections::HashSet;

use crate::api::types::Post;

/// How many crosspost levels to follow. Upstream data nests one level in
/// practice; the cap keeps malformed chains from recursing without bound.
const MAX_CROSSPOST_DEPTH: usize = 3;

/// Extensions accepted on a direct link.
const DIRECT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".mp4", ".webm"];

/// Image extensions that make an imgur link usable as-is.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Extract every media URL carried by a post.
///
/// Returns `None` when no shape matched; never returns an empty list. The
/// function is deterministic and performs no network access.
pub fn extract_media_urls(post: &Post) -> Option<Vec<String>> {
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    collect(post, 0, &mut urls, &mut seen);

    if urls.is_empty() {
        tracing::debug!(post_id = %post.id, "no media found in post");
        None
    } else {
        Some(urls)
    }
}

fn collect(post: &Post, depth: usize, urls: &mut Vec<String>, seen: &mut HashSet<String>) {
    if depth > MAX_CROSSPOST_DEPTH {
        tracing::warn!(post_id = %post.id, "crosspost chain too deep, stopping");
        return;
    }

    tracing::debug!(
        post_id = %post.id,
        title = post.title.as_deref().unwrap_or("<untitled>"),
        "processing post"
    );

    // Direct link classification
    if let Some(url) = &post.url {
        if ends_with_any(url, DIRECT_EXTENSIONS) {
            tracing::debug!("found direct media URL: {}", url);
            push_unique(urls, seen, url.clone());
        } else if url.contains("imgur.com") {
            // imgur serves images without an extension; force one
            let url = if path_ends_with_any(url, IMAGE_EXTENSIONS) {
                url.clone()
            } else {
                format!("{}.jpg", url)
            };
            tracing::debug!("found imgur URL: {}", url);
            push_unique(urls, seen, url);
        } else if url.contains("i.redd.it") {
            tracing::debug!("found hosted image URL: {}", url);
            push_unique(urls, seen, url.clone());
        } else if url.contains("v.redd.it") {
            if let Some(video) = hosted_video(post) {
                tracing::debug!("found hosted video URL: {}", video);
                push_unique(urls, seen, video.to_string());
            }
        }
    }

    // Gallery posts: ordered items looked up in the metadata map
    if let (Some(gallery), Some(metadata)) = (&post.gallery_data, &post.media_metadata) {
        for item in &gallery.items {
            let source_url = metadata
                .get(&item.media_id)
                .and_then(|entry| entry.s.as_ref())
                .and_then(|source| source.u.as_deref());

            match source_url {
                Some(u) if !u.is_empty() => {
                    // Listing JSON escapes ampersands in gallery URLs
                    let unescaped = u.replace("&amp;", "&");
                    tracing::debug!("found gallery image URL: {}", unescaped);
                    push_unique(urls, seen, unescaped);
                }
                _ => tracing::debug!(media_id = %item.media_id, "gallery item without source URL"),
            }
        }
    }

    // Rich video posts carry the descriptor without a v.redd.it link;
    // overlap with the direct-link branch collapses in the seen set
    if let Some(video) = hosted_video(post) {
        push_unique(urls, seen, video.to_string());
    }

    // Crossposts: union in whatever the first parent carries
    if let Some(parent) = post
        .crosspost_parent_list
        .as_ref()
        .and_then(|parents| parents.first())
    {
        tracing::debug!(post_id = %post.id, "following crosspost parent");
        collect(parent, depth + 1, urls, seen);
    }
}

/// Fallback URL of the embedded hosted-video descriptor, if any.
fn hosted_video(post: &Post) -> Option<&str> {
    post.media
        .as_ref()
        .and_then(|media| media.reddit_video.as_ref())
        .map(|video| video.fallback_url.as_str())
}

fn push_unique(urls: &mut Vec<String>, seen: &mut HashSet<String>, url: String) {
    if seen.insert(url.clone()) {
        urls.push(url);
    }
}

fn ends_with_any(url: &str, extensions: &[&str]) -> bool {
    let lower = url.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}

/// Like `ends_with_any` but ignores the query string.
fn path_ends_with_any(url: &str, extensions: &[&str]) -> bool {
    let path = url.split('?').next().unwrap_or(url);
    ends_with_any(path, extensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        GalleryData, GalleryItem, GalleryMetadata, GallerySource, PostMedia, RedditVideo,
    };
    use std::collections::HashMap;

    fn direct_post(url: &str) -> Post {
        Post {
            id: "p1".to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    fn gallery_post(entries: &[(&str, Option<&str>)]) -> Post {
        let items = entries
            .iter()
            .map(|(id, _)| GalleryItem {
                media_id: id.to_string(),
            })
            .collect();

        let mut metadata = HashMap::new();
        for (id, url) in entries {
            metadata.insert(
                id.to_string(),
                GalleryMetadata {
                    s: url.map(|u| GallerySource {
                        u: Some(u.to_string()),
                    }),
                },
            );
        }

        Post {
            id: "g1".to_string(),
            gallery_data: Some(GalleryData { items }),
            media_metadata: Some(metadata),
            ..Default::default()
        }
    }

    fn video_post(link: &str, fallback: &str) -> Post {
        Post {
            id: "v1".to_string(),
            url: Some(link.to_string()),
            media: Some(PostMedia {
                reddit_video: Some(RedditVideo {
                    fallback_url: fallback.to_string(),
                }),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_media_returns_none() {
        let post = Post {
            id: "t1".to_string(),
            title: Some("text only".to_string()),
            url: Some("https://www.reddit.com/r/test/comments/t1/text_only/".to_string()),
            ..Default::default()
        };
        assert!(extract_media_urls(&post).is_none());
    }

    #[test]
    fn test_direct_image_url() {
        let urls = extract_media_urls(&direct_post("https://example.com/pic.png")).unwrap();
        assert_eq!(urls, vec!["https://example.com/pic.png"]);
    }

    #[test]
    fn test_direct_url_case_insensitive() {
        let urls = extract_media_urls(&direct_post("https://example.com/PIC.JPG")).unwrap();
        assert_eq!(urls, vec!["https://example.com/PIC.JPG"]);
    }

    #[test]
    fn test_imgur_without_extension_gets_jpg() {
        let urls = extract_media_urls(&direct_post("https://imgur.com/abc123")).unwrap();
        assert_eq!(urls, vec!["https://imgur.com/abc123.jpg"]);
    }

    #[test]
    fn test_imgur_with_query_keeps_extension() {
        let urls =
            extract_media_urls(&direct_post("https://i.imgur.com/abc123.png?source=share")).unwrap();
        assert_eq!(urls, vec!["https://i.imgur.com/abc123.png?source=share"]);
    }

    #[test]
    fn test_hosted_image_verbatim() {
        let urls = extract_media_urls(&direct_post("https://i.redd.it/xyz789")).unwrap();
        assert_eq!(urls, vec!["https://i.redd.it/xyz789"]);
    }

    #[test]
    fn test_hosted_video_uses_fallback_url() {
        let post = video_post(
            "https://v.redd.it/abc",
            "https://v.redd.it/abc/DASH_720.mp4",
        );
        let urls = extract_media_urls(&post).unwrap();
        // The direct-link branch and the rich-video rule both see the
        // descriptor; the result must still hold the URL once
        assert_eq!(urls, vec!["https://v.redd.it/abc/DASH_720.mp4"]);
    }

    #[test]
    fn test_video_link_without_descriptor_is_skipped() {
        let urls = extract_media_urls(&direct_post("https://v.redd.it/abc"));
        assert!(urls.is_none());
    }

    #[test]
    fn test_rich_video_without_video_link() {
        let mut post = video_post("", "https://v.redd.it/xyz/DASH_480.mp4");
        post.url = Some("https://www.reddit.com/r/test/comments/v1/clip/".to_string());
        let urls = extract_media_urls(&post).unwrap();
        assert_eq!(urls, vec!["https://v.redd.it/xyz/DASH_480.mp4"]);
    }

    #[test]
    fn test_gallery_extracts_in_order() {
        let post = gallery_post(&[
            ("m1", Some("https://preview.example.com/1.png")),
            ("m2", Some("https://preview.example.com/2.png")),
            ("m3", Some("https://preview.example.com/3.png")),
        ]);
        let urls = extract_media_urls(&post).unwrap();
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], "https://preview.example.com/1.png");
        assert_eq!(urls[2], "https://preview.example.com/3.png");
    }

    #[test]
    fn test_gallery_unescapes_ampersands() {
        let post = gallery_post(&[("m1", Some("https://x.example.com/img.png?w=100&amp;s=abc"))]);
        let urls = extract_media_urls(&post).unwrap();
        assert_eq!(urls, vec!["https://x.example.com/img.png?w=100&s=abc"]);
    }

    #[test]
    fn test_gallery_skips_missing_metadata() {
        let post = gallery_post(&[
            ("m1", Some("https://preview.example.com/1.png")),
            ("m2", None),
        ]);
        let urls = extract_media_urls(&post).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn test_gallery_duplicates_collapse() {
        let post = gallery_post(&[
            ("m1", Some("https://preview.example.com/same.png")),
            ("m2", Some("https://preview.example.com/same.png")),
        ]);
        let urls = extract_media_urls(&post).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn test_crosspost_matches_wrapped_post() {
        let inner = direct_post("https://i.redd.it/wrapped.jpg");
        let outer = Post {
            id: "outer".to_string(),
            url: Some("https://www.reddit.com/r/other/comments/outer/share/".to_string()),
            crosspost_parent_list: Some(vec![inner.clone()]),
            ..Default::default()
        };

        assert_eq!(extract_media_urls(&outer), extract_media_urls(&inner));
    }

    #[test]
    fn test_crosspost_unions_with_own_media() {
        let inner = direct_post("https://i.redd.it/parent.jpg");
        let outer = Post {
            id: "outer".to_string(),
            url: Some("https://i.redd.it/own.jpg".to_string()),
            crosspost_parent_list: Some(vec![inner]),
            ..Default::default()
        };

        let urls = extract_media_urls(&outer).unwrap();
        assert_eq!(
            urls,
            vec!["https://i.redd.it/own.jpg", "https://i.redd.it/parent.jpg"]
        );
    }

    #[test]
    fn test_crosspost_depth_is_bounded() {
        // Chain deeper than the cap; the innermost post holds the media
        let mut post = direct_post("https://i.redd.it/deep.jpg");
        for i in 0..(MAX_CROSSPOST_DEPTH + 2) {
            post = Post {
                id: format!("wrap{}", i),
                crosspost_parent_list: Some(vec![post]),
                ..Default::default()
            };
        }
        // Must terminate; the media sits past the cap and is not reached
        assert!(extract_media_urls(&post).is_none());
    }
}
