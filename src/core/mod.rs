//! Core utilities shared by the provider clients
//!
//! - `cache`: two-tier (LRU + file system) cache
//! - `http`: reqwest client and header construction
//! - `json`: lenient readers for loosely typed provider payloads

pub mod cache;
pub mod http;
pub mod json;

pub use cache::{try_read_to_string, write_string, CacheKey, UnifiedCache};
pub use http::{build_client, yahoo_header_map};
