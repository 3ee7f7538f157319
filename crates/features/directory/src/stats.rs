use crate::error::{DirectoryError, DirectoryErrorExt};
use seva_domain::constants::{IMPACT_STATS_KEY, STATS_PATH, STATS_RESOURCE};
use seva_domain::stats::ImpactStats;
use seva_kernel::api::ApiClient;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the numbers on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    Live,
    /// The last successful fetch, read back from disk.
    Cached,
}

/// Last known statistics, kept at `<data_dir>/impactStats.json`.
#[derive(Debug, Clone)]
pub struct StatsCache {
    path: PathBuf,
}

impl StatsCache {
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self { path: data_dir.as_ref().join(format!("{IMPACT_STATS_KEY}.json")) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached copy; `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    /// [`DirectoryError::Io`] for unreadable files, [`DirectoryError::Json`] for corrupt ones.
    pub fn load(&self) -> Result<Option<ImpactStats>, DirectoryError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err).context(self.path.display().to_string()),
        };
        let stats = serde_json::from_slice::<ImpactStats>(&raw).context(self.path.display().to_string())?;
        Ok(Some(stats))
    }

    /// Replaces the cached copy via write-then-rename, so readers never see half a file.
    ///
    /// # Errors
    /// [`DirectoryError::Io`] when the directory or file cannot be written.
    pub fn store(&self, stats: &ImpactStats) -> Result<(), DirectoryError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Creating stats cache directory")?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(stats)?).context("Writing stats cache")?;
        fs::rename(&tmp, &self.path).context("Replacing stats cache")?;
        Ok(())
    }
}

/// Fetches live statistics, refreshing the cache; falls back to the cache on failure.
///
/// Returns `None` only when the fetch failed and nothing usable is cached.
pub async fn fetch_stats(
    client: &ApiClient,
    cache: &StatsCache,
) -> Option<(ImpactStats, StatsSource)> {
    match fetch_live(client).await {
        Ok(stats) => {
            if let Err(err) = cache.store(&stats) {
                warn!(error = %err, "Could not refresh stats cache");
            }
            Some((stats, StatsSource::Live))
        },
        Err(err) => {
            warn!(error = %err, "Live stats unavailable, trying cache");
            match cache.load() {
                Ok(Some(stats)) => Some((stats, StatsSource::Cached)),
                Ok(None) => None,
                Err(err) => {
                    debug!(error = %err, "Stats cache unusable");
                    None
                },
            }
        },
    }
}

async fn fetch_live(client: &ApiClient) -> Result<ImpactStats, DirectoryError> {
    let envelope = client.get(STATS_PATH).await?.into_result()?;
    Ok(envelope.decode(STATS_RESOURCE)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_cache_is_not_an_error() {
        let dir = tempdir().unwrap();
        let cache = StatsCache::new(dir.path());
        assert!(cache.path().ends_with("impactStats.json"));
        assert_eq!(cache.load().unwrap(), None);
    }

    #[test]
    fn store_then_load() {
        let dir = tempdir().unwrap();
        let cache = StatsCache::new(dir.path().join("nested"));
        let stats = ImpactStats { donors: 10, volunteers: 4, ..ImpactStats::default() };

        cache.store(&stats).unwrap();
        assert_eq!(cache.load().unwrap(), Some(stats));
    }

    #[test]
    fn corrupt_cache_is_reported() {
        let dir = tempdir().unwrap();
        let cache = StatsCache::new(dir.path());
        fs::write(cache.path(), b"{not json").unwrap();
        assert!(matches!(cache.load(), Err(DirectoryError::Json { .. })));
    }
}
