// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! The archive (pre-election) view: real candidate and constituency data from
//! the feed with every vote count forced to zero, cached to disk so repeat
//! loads don't re-download ~3MB.

use std::path::PathBuf;
use std::sync::Arc;
use chrono::Utc;
use results::constituency::{ConstituencyResult, ConstituencyStatus};
use crate::download::UpstreamSource;
use crate::parse::parse_upstream_text;
use crate::run_once::SingleFlight;

/// Where the archive snapshot is cached unless a caller chooses elsewhere.
pub const DEFAULT_CACHE_DIR : &str = "./Cache/Archive";
const CACHE_KEY : &str = "archive_constituencies_v1";

/// Force every vote count to 0 and every status to PENDING, keeping candidate
/// and constituency identity intact. This is the archive-mode guarantee: the
/// dashboard renders real structure but no vote data before polling begins.
pub fn zero_votes(mut constituencies:Vec<ConstituencyResult>,last_updated:&str) -> Vec<ConstituencyResult> {
    for constituency in &mut constituencies {
        constituency.status = ConstituencyStatus::Pending;
        constituency.votes_cast = 0;
        constituency.last_updated = last_updated.to_string();
        for candidate in &mut constituency.candidates {
            candidate.votes = 0;
            candidate.is_winner = false;
        }
    }
    constituencies
}

/// Loads and caches the archive snapshot.
///
/// Concurrent loads while a download is outstanding share the one in-flight
/// request. Cache write failures are swallowed: the next call just fetches
/// again.
pub struct ArchiveLoader {
    source : UpstreamSource,
    cache_dir : PathBuf,
    in_flight : SingleFlight<Result<Arc<Vec<ConstituencyResult>>,String>>,
}

impl Default for ArchiveLoader {
    fn default() -> Self { ArchiveLoader::new(UpstreamSource::default(),DEFAULT_CACHE_DIR) }
}

impl ArchiveLoader {
    pub fn new<P:Into<PathBuf>>(source:UpstreamSource,cache_dir:P) -> Self {
        ArchiveLoader{ source, cache_dir: cache_dir.into(), in_flight: SingleFlight::default() }
    }

    /// Return the archive snapshot, from the disk cache when present.
    ///
    /// With `force_refresh` the cache is bypassed (though a load already in
    /// flight is still joined rather than duplicated). Fails with an upstream
    /// error string when the feed is unreachable both directly and via the
    /// relay; callers fall back to whatever stale data they hold.
    pub async fn load_archive_data(&self,force_refresh:bool) -> Result<Arc<Vec<ConstituencyResult>>,String> {
        if !force_refresh {
            if let Some(cached) = self.read_cache().await {
                return Ok(Arc::new(cached));
            }
        }
        let source = self.source.clone();
        let cache_dir = self.cache_dir.clone();
        self.in_flight.run(move||async move {
            let text = source.fetch_text().map_err(|e|e.to_string())?;
            let now = Utc::now().to_rfc3339();
            let parsed = parse_upstream_text(&text,&now).map_err(|e|e.to_string())?;
            let zeroed = zero_votes(parsed,&now);
            let serialized = serde_json::to_vec(&zeroed).map_err(|e|e.to_string())?;
            if let Err(e) = cacache::write(&cache_dir,CACHE_KEY,&serialized).await {
                log::warn!("could not cache archive snapshot: {}",e);
            }
            Ok(Arc::new(zeroed))
        }).await
    }

    /// Remove the cached snapshot.
    pub async fn clear_archive_cache(&self) {
        if let Err(e) = cacache::remove(&self.cache_dir,CACHE_KEY).await {
            log::debug!("archive cache clear: {}",e);
        }
    }

    async fn read_cache(&self) -> Option<Vec<ConstituencyResult>> {
        let bytes = cacache::read(&self.cache_dir,CACHE_KEY).await.ok()?;
        let parsed : Vec<ConstituencyResult> = serde_json::from_slice(&bytes).ok()?;
        if parsed.is_empty() { None } else { Some(parsed) }
    }
}
