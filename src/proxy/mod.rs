//! Caching proxy over any [`VideoService`].
//!
//! [`CachingProxy`] implements the same capability set as the service it
//! wraps, so consumers cannot tell the two apart. The listing and per-video
//! metadata are fetched from the wrapped service at most once and served
//! from memory afterwards; downloads always pass through.
//!
//! Nothing is ever evicted or refreshed — the caches live exactly as long as
//! the proxy instance.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::debug;

use crate::service::{ServiceError, VideoService};
use crate::video::{VideoDetail, VideoSummary};

/// Memoizing wrapper around a [`VideoService`].
///
/// Cache state lives behind async mutexes, and each lock is held across the
/// delegated fetch, so even concurrent callers trigger at most one remote
/// fetch per key. A failed delegation leaves the cache slot empty — errors
/// are propagated, never cached.
///
/// # Examples
///
/// ```
/// use vidcache::proxy::CachingProxy;
/// use vidcache::remote::{Latency, MockRemoteService};
/// use vidcache::service::VideoService;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), vidcache::service::ServiceError> {
/// let proxy = CachingProxy::new(MockRemoteService::new(Latency::None));
///
/// let first = proxy.list_videos().await?;   // delegates to the remote
/// let second = proxy.list_videos().await?;  // served from the cache
/// assert_eq!(first, second);
/// # Ok(())
/// # }
/// ```
pub struct CachingProxy<S> {
    inner: S,
    /// Full listing snapshot — absent until the first successful fetch,
    /// immutable afterwards.
    list_cache: Mutex<Option<Vec<VideoSummary>>>,
    /// Per-id metadata, write-once per key.
    detail_cache: Mutex<HashMap<String, VideoDetail>>,
}

impl<S> CachingProxy<S> {
    /// Wraps `inner` with empty caches.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            list_cache: Mutex::new(None),
            detail_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Consumes the proxy, returning the wrapped service. Cached state is
    /// discarded.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> VideoService for CachingProxy<S>
where
    S: VideoService + Sync,
{
    async fn list_videos(&self) -> Result<Vec<VideoSummary>, ServiceError> {
        let mut cache = self.list_cache.lock().await;
        if let Some(videos) = cache.as_ref() {
            debug!("video list cache hit");
            return Ok(videos.clone());
        }

        debug!("video list cache miss — delegating to the wrapped service");
        let videos = self.inner.list_videos().await?;
        *cache = Some(videos.clone());
        Ok(videos)
    }

    async fn video_info(&self, id: &str) -> Result<VideoDetail, ServiceError> {
        let mut cache = self.detail_cache.lock().await;
        if let Some(detail) = cache.get(id) {
            debug!(%id, "video info cache hit");
            return Ok(detail.clone());
        }

        debug!(%id, "video info cache miss — delegating to the wrapped service");
        let detail = self.inner.video_info(id).await?;
        cache.insert(id.to_owned(), detail.clone());
        Ok(detail)
    }

    /// Downloads are not idempotent, so they are never cached or
    /// short-circuited.
    async fn download_video(&self, id: &str) -> Result<(), ServiceError> {
        debug!(%id, "download delegated uncached");
        self.inner.download_video(id).await
    }
}
