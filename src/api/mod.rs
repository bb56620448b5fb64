//! Listing API client and response types.

pub mod client;
pub mod types;

pub use client::{RedditClient, LISTING_PAGE_SIZE};
pub use types::{ListingPage, Post};
