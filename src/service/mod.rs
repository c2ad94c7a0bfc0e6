//! The video service capability set and its error taxonomy.
//!
//! [`VideoService`] is the seam of the crate: the remote simulator
//! ([`MockRemoteService`](crate::remote::MockRemoteService)) and the caching
//! proxy ([`CachingProxy`](crate::proxy::CachingProxy)) both implement it, so
//! consumers cannot tell a cached service from a raw one.

use thiserror::Error;

use crate::video::{VideoDetail, VideoSummary};

/// Errors a video service implementation may surface.
///
/// The bundled mock service never fails, but the trait is fallible so that
/// stricter implementations (and test fakes) can report faults. Faults always
/// propagate unchanged to the caller — nothing in this crate retries,
/// recovers, or caches an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The requested video id is unknown to the service.
    ///
    /// Reserved for implementations that validate ids. The mock service is
    /// permissive and answers every id with canned data instead.
    #[error("video {id} not found")]
    NotFound {
        /// The id that was requested.
        id: String,
    },

    /// The service could not be reached or refused to answer.
    #[error("video service unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the fault.
        reason: String,
    },
}

/// The minimal operation set every video service must support.
///
/// Methods take `&self` so implementations can be shared behind a reference;
/// a caching implementation keeps its mutable state behind interior
/// mutability. Ids are passed through as-is — an empty or malformed id is not
/// rejected anywhere, it simply resolves however the implementation resolves
/// unknown ids.
pub trait VideoService {
    /// Returns the full video listing, in the service's canonical order.
    fn list_videos(
        &self,
    ) -> impl Future<Output = Result<Vec<VideoSummary>, ServiceError>> + Send;

    /// Returns the metadata record for a single video.
    fn video_info(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<VideoDetail, ServiceError>> + Send;

    /// Downloads a video. Not idempotent — callers and proxies must not
    /// short-circuit repeated downloads of the same id.
    fn download_video(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = ServiceError::NotFound {
            id: "video9".into(),
        };
        assert_eq!(e.to_string(), "video video9 not found");

        let e = ServiceError::Unavailable {
            reason: "connection reset".into(),
        };
        assert_eq!(e.to_string(), "video service unavailable: connection reset");
    }
}
