//! Simulated third-party video platform.
//!
//! [`MockRemoteService`] stands in for a real platform backend: every call
//! waits out an injectable [`Latency`], emits a progress event, and returns
//! deterministic canned data. No operation can fail.

use std::sync::LazyLock;
use std::time::Duration;

use tracing::info;

use crate::service::{ServiceError, VideoService};
use crate::video::{VideoDetail, VideoSummary};

/// Canned listing payload, shaped like the platform's API response.
const CATALOG_JSON: &str = r#"[
  { "id": "video1", "title": "How to Cook Borscht", "duration": "10:35" },
  { "id": "video2", "title": "Python Lessons for Beginners", "duration": "25:10" },
  { "id": "video3", "title": "Music for Studying", "duration": "1:00:00" }
]"#;

/// Metadata every [`MockRemoteService::video_info`] answer carries, no matter
/// which id was asked for.
const CANNED_TITLE: &str = "How to Cook Borscht";
const CANNED_DURATION: &str = "10:35";
const CANNED_AUTHOR: &str = "Chef TV";

static CATALOG: LazyLock<Vec<VideoSummary>> =
    LazyLock::new(|| serde_json::from_str(CATALOG_JSON).expect("embedded catalog fixture is valid JSON"));

/// Artificial delay applied before every simulated remote operation.
///
/// The delay is injectable so the test suite can swap in [`Latency::None`]
/// and skip real wall-clock waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// No artificial delay.
    #[default]
    None,
    /// A fixed pause before every operation.
    Fixed(Duration),
}

impl Latency {
    /// The demo's stand-in for a network round trip: a fixed one-second pause.
    pub const fn simulated_network() -> Self {
        Latency::Fixed(Duration::from_secs(1))
    }

    /// Waits out the configured delay.
    pub async fn wait(self) {
        if let Latency::Fixed(duration) = self {
            tokio::time::sleep(duration).await;
        }
    }
}

/// A fake third-party video platform client.
///
/// Answers every request with fixed data after the configured [`Latency`]:
///
/// - [`list_videos`](VideoService::list_videos) returns the same 3-entry
///   catalog on every call.
/// - [`video_info`](VideoService::video_info) echoes the requested id but
///   carries the same canned title, duration and author regardless of it —
///   a fixed demo behavior, not a lookup.
/// - [`download_video`](VideoService::download_video) waits and returns.
///
/// No operation fails; ids are never validated.
#[derive(Debug, Clone)]
pub struct MockRemoteService {
    latency: Latency,
}

impl MockRemoteService {
    /// Creates a simulator that pauses for `latency` before each operation.
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl Default for MockRemoteService {
    /// A simulator with the demo's one-second network pause.
    fn default() -> Self {
        Self::new(Latency::simulated_network())
    }
}

impl VideoService for MockRemoteService {
    async fn list_videos(&self) -> Result<Vec<VideoSummary>, ServiceError> {
        self.latency.wait().await;
        info!("fetching video list from the platform");
        Ok(CATALOG.clone())
    }

    async fn video_info(&self, id: &str) -> Result<VideoDetail, ServiceError> {
        self.latency.wait().await;
        info!(%id, "fetching video info from the platform");
        Ok(VideoDetail {
            id: id.to_owned(),
            title: CANNED_TITLE.to_owned(),
            duration: CANNED_DURATION.to_owned(),
            author: CANNED_AUTHOR.to_owned(),
        })
    }

    async fn download_video(&self, id: &str) -> Result<(), ServiceError> {
        self.latency.wait().await;
        info!(%id, "downloading video from the platform");
        Ok(())
    }
}
