//! Two-tier cache for secondary-provider payloads
//!
//! - L1 Cache: In-memory LRU cache for fast access
//! - L2 Cache: JSON files under the cache root for data that outlives a run
//!
//! Disk reads promote entries into memory. Entries written with
//! [`UnifiedCache::put_memory`] never touch disk.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::debug;

use crate::{Season, Week};

/// Path: ~/.cache/yahoo-ffl
pub fn default_cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("yahoo-ffl")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Days since the Unix epoch, used to roll the player directory daily.
pub fn epoch_day() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0)
}

/// Generic cache key that can be used for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Generate a string representation for file system storage
    fn to_file_key(&self) -> String;

    /// Generate the file path for this cache entry under `root`
    fn to_file_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}.json", self.to_file_key()))
    }
}

/// Sleeper's full NFL player directory, refreshed once a day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerDirectoryCacheKey {
    pub epoch_day: u64,
}

impl CacheKey for PlayerDirectoryCacheKey {
    fn to_file_key(&self) -> String {
        format!("sleeper_players_d{}", self.epoch_day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeeklyPayloadKind {
    Stats,
    Projections,
}

/// Per-week Sleeper stats or projections for every player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeeklyPayloadCacheKey {
    pub season: Season,
    pub week: Week,
    pub kind: WeeklyPayloadKind,
}

impl CacheKey for WeeklyPayloadCacheKey {
    fn to_file_key(&self) -> String {
        let kind = match self.kind {
            WeeklyPayloadKind::Stats => "stats",
            WeeklyPayloadKind::Projections => "projections",
        };
        format!(
            "sleeper_{}_s{}_w{}",
            kind,
            self.season.as_u16(),
            self.week.as_u16()
        )
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Mutex<LruCache<K, V>>,
    disk_root: Option<PathBuf>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new cache; `disk_root = None` keeps everything in memory.
    pub fn new(memory_capacity: usize, disk_root: Option<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            disk_root,
        }
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut cache) = self.memory_cache.lock() {
            if let Some(value) = cache.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        debug!(key = %key.to_file_key(), "cache promoted from disk");
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            debug!(key = %key.to_file_key(), error = %e, "cache disk write failed");
        }
        self.put_memory(key, value);
    }

    /// Put an item into the memory tier only
    pub fn put_memory(&self, key: K, value: V) {
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.put(key, value);
        }
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(self.disk_root.as_ref()?);
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let Some(root) = self.disk_root.as_ref() else {
            return Ok(());
        };
        let content = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&key.to_file_path(root), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn stats_key(week: u16) -> WeeklyPayloadCacheKey {
        WeeklyPayloadCacheKey {
            season: Season::new(2099),
            week: Week::new(week),
            kind: WeeklyPayloadKind::Stats,
        }
    }

    #[test]
    fn test_default_cache_root() {
        let path = default_cache_root();
        assert!(path.to_string_lossy().ends_with("yahoo-ffl"));
    }

    #[test]
    fn test_try_read_to_string_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "hello world").unwrap();

        let content = try_read_to_string(&file_path);
        assert_eq!(content, Some("hello world".to_string()));
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let dir = tempdir().unwrap();
        let content = try_read_to_string(&dir.path().join("nonexistent.txt"));
        assert_eq!(content, None);
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir").join("output.txt");

        write_string(&file_path, "test content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "test content");
    }

    #[test]
    fn test_cache_key_generation() {
        assert_eq!(stats_key(3).to_file_key(), "sleeper_stats_s2099_w3");

        let proj = WeeklyPayloadCacheKey {
            season: Season::new(2024),
            week: Week::new(11),
            kind: WeeklyPayloadKind::Projections,
        };
        assert_eq!(proj.to_file_key(), "sleeper_projections_s2024_w11");

        let dir_key = PlayerDirectoryCacheKey { epoch_day: 20_000 };
        assert_eq!(dir_key.to_file_key(), "sleeper_players_d20000");
    }

    #[test]
    fn test_unified_cache_lru_eviction() {
        let cache: UnifiedCache<WeeklyPayloadCacheKey, String> = UnifiedCache::new(2, None);

        cache.put(stats_key(1), "one".to_string());
        cache.put(stats_key(2), "two".to_string());
        cache.put(stats_key(3), "three".to_string());

        assert_eq!(cache.get(&stats_key(1)), None);
        assert_eq!(cache.get(&stats_key(2)), Some("two".to_string()));
        assert_eq!(cache.get(&stats_key(3)), Some("three".to_string()));
    }

    #[test]
    fn test_unified_cache_disk_promotion() {
        let dir = tempdir().unwrap();
        let cache: UnifiedCache<WeeklyPayloadCacheKey, String> =
            UnifiedCache::new(4, Some(dir.path().to_path_buf()));

        cache.put(stats_key(5), "persisted".to_string());
        let file = dir.path().join("sleeper_stats_s2099_w5.json");
        assert!(file.exists());

        // A fresh cache over the same root reads the file, then keeps it in memory
        let reopened: UnifiedCache<WeeklyPayloadCacheKey, String> =
            UnifiedCache::new(4, Some(dir.path().to_path_buf()));
        assert_eq!(reopened.get(&stats_key(5)), Some("persisted".to_string()));
        fs::remove_file(&file).unwrap();
        assert_eq!(reopened.get(&stats_key(5)), Some("persisted".to_string()));
    }

    #[test]
    fn test_put_memory_skips_disk() {
        let dir = tempdir().unwrap();
        let cache: UnifiedCache<WeeklyPayloadCacheKey, String> =
            UnifiedCache::new(4, Some(dir.path().to_path_buf()));

        cache.put_memory(stats_key(6), "volatile".to_string());
        assert!(!dir.path().join("sleeper_stats_s2099_w6.json").exists());
        assert_eq!(cache.get(&stats_key(6)), Some("volatile".to_string()));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: UnifiedCache<WeeklyPayloadCacheKey, String> = UnifiedCache::new(0, None);
        cache.put(stats_key(1), "one".to_string());
        assert_eq!(cache.get(&stats_key(1)), Some("one".to_string()));
        cache.put(stats_key(2), "two".to_string());
        assert_eq!(cache.get(&stats_key(1)), None);
    }
}
